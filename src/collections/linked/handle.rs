use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies the list that issued a handle. Every arena takes a fresh id, including clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(u64);

impl ListId {
    pub fn next() -> ListId {
        ListId(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The position of a node's slot within a list's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeIndex(pub usize);

/// A reference to a single node of a [`DoublyLinkedList`](super::DoublyLinkedList), returned when
/// the node is pushed. It allows the node to be read or removed in `O(1)` without searching.
///
/// A handle stays valid until its node is removed, by any method, or the list is cleared. After
/// that, lookups with it return [`None`] and removal returns [`StaleHandle`](super::StaleHandle),
/// even if the slot has since been reused for another node.
///
/// A handle is tied to the list that issued it. Using it with any other list, including a clone,
/// behaves as if its node had been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(crate) list: ListId,
    pub(crate) index: NodeIndex,
    pub(crate) generation: u32,
}
