//! Contiguous collection types. Namely [`DynamicArray`], a growable array backed by a single
//! allocation.

pub(crate) mod buffer;
pub mod dynamic_array;

#[doc(inline)]
pub use dynamic_array::{DEFAULT_CAP, DynamicArray, GROWTH_FACTOR, InvalidCapacity};
