use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of `0..len` for the collection it was used on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A collection was asked for a capacity that can't be allocated, because its memory layout would
/// exceed [`isize::MAX`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCapacity {
    pub cap: usize,
}

impl Display for InvalidCapacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Illegal capacity: {}!", self.cap)
    }
}

impl Error for InvalidCapacity {}

/// The length or capacity of a collection would overflow [`usize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// An operation on the first or last element was attempted on an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Collection is empty!")
    }
}

impl Error for EmptyCollection {}

/// A node handle referred to a node that has since been removed, or was issued by another list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaleHandle;

impl Display for StaleHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Node handle refers to a node that is no longer in the list!")
    }
}

impl Error for StaleHandle {}

/// Any error produced by this crate's collections. Every specific error converts into this type,
/// so `?` can be used across operations with different error types.
///
/// # Examples
/// ```
/// # use linear_collections::collections::linked::DoublyLinkedList;
/// # use linear_collections::error::CollectionError;
/// fn middle(list: &mut DoublyLinkedList<u8>) -> Result<u8, CollectionError> {
///     let first = list.try_remove_first()?;
///     let value = list.try_remove_at(0)?;
///     list.push_front(first);
///     Ok(value)
/// }
///
/// let mut list: DoublyLinkedList<u8> = [1, 2, 3].into_iter().collect();
/// assert_eq!(middle(&mut list), Ok(2));
/// assert!(middle(&mut DoublyLinkedList::new()).is_err_and(|e| e.is_empty_collection()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CollectionError {
    IndexOutOfBounds(IndexOutOfBounds),
    InvalidCapacity(InvalidCapacity),
    CapacityOverflow(CapacityOverflow),
    EmptyCollection(EmptyCollection),
    StaleHandle(StaleHandle),
}
