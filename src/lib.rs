//! Two linear collections written from the ground up: a growable array and a doubly linked list.
//!
//! # Purpose
//! This crate is a learning project. It implements [`DynamicArray`](collections::contiguous::DynamicArray)
//! (contiguous, indexable, amortized `O(1)` push) and
//! [`DoublyLinkedList`](collections::linked::DoublyLinkedList) (`O(1)` at both ends and `O(1)`
//! removal of a node you hold a [`NodeHandle`](collections::linked::NodeHandle) for).
//!
//! # Method
//! [`DynamicArray`](collections::contiguous::DynamicArray) manages its own allocation through a
//! small buffer type and doubles its capacity when it needs to grow. It doesn't use [`Vec`]
//! internally.
//!
//! [`DoublyLinkedList`](collections::linked::DoublyLinkedList) links its nodes by index rather
//! than by pointer. Nodes live in an arena (itself a `DynamicArray`), so a stale link is a failed
//! lookup rather than a dangling pointer. The only raw pointer on the list side is the one
//! [`IterMut`](collections::linked::list::IterMut) keeps into the arena's slots, which lets it
//! hand out disjoint mutable references.
//!
//! # Error Handling
//! Every fallible method has a `try_` variant returning a [`Result`] with a strongly typed error,
//! and a plain variant that panics with the error's message. Searches never fail: they return
//! [`Option`] or [`bool`].
//!
//! # Dependencies
//! This crate depends on `derive_more` for the error enum, which removes the need for some very
//! repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub mod error {
    //! Error types shared by all collections.
    #[doc(inline)]
    pub use crate::util::error::*;
}

pub(crate) mod util;
