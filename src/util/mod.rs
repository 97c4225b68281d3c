pub mod error;
pub mod fmt;
pub mod result;

#[cfg(test)]
pub mod drop;
#[cfg(test)]
pub mod panic;
