use super::{ListId, Node, NodeHandle, NodeIndex};
use crate::collections::contiguous::DynamicArray;

/// Storage for the nodes of a single list. Every node is owned by exactly one slot, and slots are
/// reused after their node is removed.
///
/// Each slot carries a generation which is bumped on removal, so that a [`NodeHandle`] issued for
/// an earlier occupant no longer resolves.
pub(crate) struct Arena<T> {
    id: ListId,
    pub(crate) slots: DynamicArray<Slot<T>>,
    // Head of the chain of vacant slots, linked through Entry::Vacant.
    free: Option<NodeIndex>,
}

pub(crate) struct Slot<T> {
    generation: u32,
    pub(crate) entry: Entry<T>,
}

pub(crate) enum Entry<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeIndex> },
}

impl<T> Arena<T> {
    pub fn new() -> Arena<T> {
        Arena {
            id: ListId::next(),
            slots: DynamicArray::with_cap(0),
            free: None,
        }
    }

    /// Moves `node` into a vacant slot, or a new one if none are free.
    pub fn insert(&mut self, node: Node<T>) -> NodeHandle {
        match self.free {
            Some(index) => {
                let slot = self.slots.get_mut(index.0);
                self.free = match slot.entry {
                    Entry::Vacant { next_free } => next_free,
                    Entry::Occupied(_) => unreachable!("free chain points at an occupied slot"),
                };
                slot.entry = Entry::Occupied(node);

                NodeHandle {
                    list: self.id,
                    index,
                    generation: slot.generation,
                }
            },
            None => {
                let index = NodeIndex(self.slots.len());
                self.slots.push(Slot {
                    generation: 0,
                    entry: Entry::Occupied(node),
                });

                NodeHandle {
                    list: self.id,
                    index,
                    generation: 0,
                }
            },
        }
    }

    /// Moves the node out of the slot at `index`, vacating it and invalidating its handles.
    pub fn remove(&mut self, index: NodeIndex) -> Node<T> {
        let slot = self.slots.get_mut(index.0);
        let entry = std::mem::replace(&mut slot.entry, Entry::Vacant { next_free: self.free });

        match entry {
            Entry::Occupied(node) => {
                slot.generation = slot.generation.wrapping_add(1);
                self.free = Some(index);
                node
            },
            Entry::Vacant { .. } => unreachable!("removed a node from a vacant slot"),
        }
    }

    pub fn node(&self, index: NodeIndex) -> &Node<T> {
        match &self.slots.get(index.0).entry {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("link points at a vacant slot"),
        }
    }

    pub fn node_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        match &mut self.slots.get_mut(index.0).entry {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("link points at a vacant slot"),
        }
    }

    /// Returns the index named by `handle`, if it was issued by this arena and its node is still
    /// present.
    pub fn resolve(&self, handle: NodeHandle) -> Option<NodeIndex> {
        if handle.list != self.id {
            return None;
        }
        let slot = self.slots.try_get(handle.index.0).ok()?;

        match slot.entry {
            Entry::Occupied(_) if slot.generation == handle.generation => Some(handle.index),
            _ => None,
        }
    }
}
