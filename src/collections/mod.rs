//! General-purpose linear collection types.
//!
//! # Method
//! [`DynamicArray`](contiguous::DynamicArray) implements [`Deref<Target = [T]>`](std::ops::Deref)
//! (and DerefMut), which saves writing borrowed iteration and slice helpers again.
//! [`DoublyLinkedList`](linked::DoublyLinkedList) provides its own iterators.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
