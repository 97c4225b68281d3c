use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{DoublyLinkedList, Empty, Full, ListState};
use crate::collections::linked::{Arena, Entry, Node, NodeIndex, Slot};

/// Walks the arena indices of a list's nodes. The state is a copy of the list's, which shrinks
/// from either end as indices are yielded, so the iterator never reads past the boundaries even
/// when both ends are consumed.
pub(crate) struct Links<'a, T> {
    pub(crate) arena: &'a Arena<T>,
    pub(crate) state: ListState,
}

impl<T> Iterator for Links<'_, T> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let Full(bounds) = self.state else { return None };

        self.state = match self.arena.node(bounds.head).next {
            Some(next) => bounds.after_removal(next, bounds.tail),
            None => Empty,
        };
        Some(bounds.head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.state.len(), Some(self.state.len()))
    }
}

impl<T> DoubleEndedIterator for Links<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let Full(bounds) = self.state else { return None };

        self.state = match self.arena.node(bounds.tail).prev {
            Some(prev) => bounds.after_removal(bounds.head, prev),
            None => Empty,
        };
        Some(bounds.tail)
    }
}

impl<T> ExactSizeIterator for Links<'_, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            links: self.links(),
        }
    }
}

/// A borrowed iterator over the elements of a [`DoublyLinkedList`], from head to tail.
pub struct Iter<'a, T> {
    pub(crate) links: Links<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.links.arena;
        self.links.next().map(|index| &arena.node(index).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.links.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let arena = self.links.arena;
        self.links.next_back().map(|index| &arena.node(index).value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            links: Links {
                arena: self.links.arena,
                state: self.links.state,
            },
        }
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let state = self.state;
        let slots = self.arena.slots.buf.as_mut_ptr();

        IterMut {
            // SAFETY: The pointer comes from a live Buffer and is therefore non-null.
            slots: unsafe { NonNull::new_unchecked(slots) },
            state,
            _phantom: PhantomData,
        }
    }
}

/// A mutable iterator over the elements of a [`DoublyLinkedList`], from head to tail.
pub struct IterMut<'a, T> {
    // Nodes are reached through a raw pointer rather than &mut Arena, so that producing the next
    // node never borrows the slots of elements that have already been handed out.
    pub(crate) slots: NonNull<Slot<T>>,
    pub(crate) state: ListState,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    /// # Safety
    /// `index` must be a linked node of the list being iterated that hasn't been yielded yet.
    unsafe fn node(&mut self, index: NodeIndex) -> &'a mut Node<T> {
        // SAFETY: Linked indices are in bounds of the arena, which is exclusively borrowed for 'a.
        // The caller guarantees that no other reference to this slot has been handed out.
        let slot = unsafe { &mut *self.slots.as_ptr().add(index.0) };

        match &mut slot.entry {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("link points at a vacant slot"),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let Full(bounds) = self.state else { return None };

        // SAFETY: head is within the remaining state, which shrinks past it below, so it is never
        // yielded twice.
        let node = unsafe { self.node(bounds.head) };
        self.state = match node.next {
            Some(next) => bounds.after_removal(next, bounds.tail),
            None => Empty,
        };

        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.state.len(), Some(self.state.len()))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let Full(bounds) = self.state else { return None };

        // SAFETY: tail is within the remaining state, which shrinks past it below, so it is never
        // yielded twice.
        let node = unsafe { self.node(bounds.tail) };
        self.state = match node.prev {
            Some(prev) => bounds.after_removal(bounds.head, prev),
            None => Empty,
        };

        Some(&mut node.value)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

// SAFETY: IterMut behaves like &'a mut DoublyLinkedList<T>, which is Send when T is Send.
unsafe impl<T: Send> Send for IterMut<'_, T> {}
// SAFETY: IterMut behaves like &'a mut DoublyLinkedList<T>, which is Sync when T is Sync.
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owned iterator over the elements of a [`DoublyLinkedList`], from head to tail.
pub struct IntoIter<T> {
    // The list is popped from either end as the iterator is consumed.
    pub(crate) list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
