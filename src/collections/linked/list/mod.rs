mod doubly_linked_list;
mod iter;
mod length;
mod state;

pub use doubly_linked_list::*;
pub use iter::*;
pub(crate) use length::*;
pub(crate) use state::*;
