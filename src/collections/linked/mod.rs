//! Linked collection types. Primarily revolves around [`DoublyLinkedList`] and the
//! [`NodeHandle`]s it hands out for `O(1)` access to individual nodes.

pub(crate) mod arena;
pub(crate) mod handle;
pub mod list;
pub(crate) mod node;

pub(crate) use arena::*;
pub use handle::NodeHandle;
pub(crate) use handle::{ListId, NodeIndex};
#[doc(inline)]
pub use list::DoublyLinkedList;
pub(crate) use node::*;
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, IndexOutOfBounds, StaleHandle};
