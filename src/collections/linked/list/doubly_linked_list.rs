use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use super::{Bounds, Empty, Full, Iter, IterMut, Links, ListState};
use crate::collections::linked::{Arena, Node, NodeHandle, NodeIndex};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds, StaleHandle};
use crate::util::fmt::write_bracketed;
use crate::util::result::ResultExtension;

/// A list with links in both directions.
///
/// Nodes are stored in an arena owned by the list and refer to their neighbours by index, so the
/// list contains no raw pointers. Pushing returns a [`NodeHandle`], which can later be used to
/// read or remove that node in `O(1)`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `peek_first/last` | `O(1)` |
/// | `push_front/back` | `O(1)`* |
/// | `remove_first/last` | `O(1)` |
/// | `remove_node` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `remove_at` | `O(min(i, n-i))` |
/// | `remove` / `index_of` / `contains` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Amortized, as the node arena occasionally grows. Slots freed by removals are reused first.
pub struct DoublyLinkedList<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) state: ListState,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements. Nothing is allocated until the first push.
    pub fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            arena: Arena::new(),
            state: Empty,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Adds the provided element to the front of the list, returning a handle to its node.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.peek_first(), &1);
    /// assert_eq!(list.peek_last(), &2);
    /// ```
    pub fn push_front(&mut self, value: T) -> NodeHandle {
        match self.state {
            Empty => self.push_only(value),
            Full(bounds) => {
                let len = bounds.len.checked_add(1).ok_or(CapacityOverflow).throw();
                let handle = self.arena.insert(Node::new(value, None, Some(bounds.head)));

                self.arena.node_mut(bounds.head).prev = Some(handle.index);
                self.state = Full(Bounds { len, head: handle.index, ..bounds });
                handle
            },
        }
    }

    /// Adds the provided element to the back of the list, returning a handle to its node.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow.
    pub fn push_back(&mut self, value: T) -> NodeHandle {
        match self.state {
            Empty => self.push_only(value),
            Full(bounds) => {
                let len = bounds.len.checked_add(1).ok_or(CapacityOverflow).throw();
                let handle = self.arena.insert(Node::new(value, Some(bounds.tail), None));

                self.arena.node_mut(bounds.tail).next = Some(handle.index);
                self.state = Full(Bounds { len, tail: handle.index, ..bounds });
                handle
            },
        }
    }

    /// An alias for [`push_back`](DoublyLinkedList::push_back).
    ///
    /// # Panics
    /// Panics if the length of the list would overflow.
    pub fn push(&mut self, value: T) -> NodeHandle {
        self.push_back(value)
    }

    /// Returns a reference to the first element.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn peek_first(&self) -> &T {
        self.try_peek_first().throw()
    }

    pub fn try_peek_first(&self) -> Result<&T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(bounds) => Ok(&self.arena.node(bounds.head).value),
        }
    }

    /// Returns a reference to the last element.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn peek_last(&self) -> &T {
        self.try_peek_last().throw()
    }

    pub fn try_peek_last(&self) -> Result<&T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(bounds) => Ok(&self.arena.node(bounds.tail).value),
        }
    }

    /// Removes the first element and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn remove_first(&mut self) -> T {
        self.try_remove_first().throw()
    }

    pub fn try_remove_first(&mut self) -> Result<T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(bounds) => Ok(self.detach_head(bounds)),
        }
    }

    /// Removes the last element and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn remove_last(&mut self) -> T {
        self.try_remove_last().throw()
    }

    pub fn try_remove_last(&mut self) -> Result<T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(bounds) => Ok(self.detach_tail(bounds)),
        }
    }

    /// Removes the first element and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.try_remove_first().ok()
    }

    /// Removes the last element and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.try_remove_last().ok()
    }

    /// Returns a reference to the element at the provided `index`, walking from whichever end of
    /// the list is closer.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(&self.arena.node(self.checked_seek(index)?).value)
    }

    /// Returns a mutable reference to the element at the provided `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(&mut self.arena.node_mut(node).value)
    }

    /// Removes the element at the provided `index` and returns it. The node is found by walking
    /// from the head if `index < len / 2`, or from the tail otherwise.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// list.push_front(0);
    /// assert_eq!(list.remove_at(1), 1);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 2]);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }

    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(self.unlink(node))
    }

    /// Removes the node referred to by `handle` and returns its element.
    ///
    /// # Panics
    /// Panics if the node has already been removed.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::new();
    /// list.push_back('a');
    /// let b = list.push_back('b');
    /// list.push_back('c');
    ///
    /// assert_eq!(list.remove_node(b), 'b');
    /// assert_eq!(list.to_string(), "[a, c]");
    /// assert!(list.try_remove_node(b).is_err());
    /// ```
    pub fn remove_node(&mut self, handle: NodeHandle) -> T {
        self.try_remove_node(handle).throw()
    }

    pub fn try_remove_node(&mut self, handle: NodeHandle) -> Result<T, StaleHandle> {
        let node = self.arena.resolve(handle).ok_or(StaleHandle)?;
        Ok(self.unlink(node))
    }

    /// Returns a reference to the element of the node referred to by `handle`, if it is still in
    /// the list.
    pub fn get_node(&self, handle: NodeHandle) -> Option<&T> {
        let node = self.arena.resolve(handle)?;
        Some(&self.arena.node(node).value)
    }

    /// Returns a mutable reference to the element of the node referred to by `handle`, if it is
    /// still in the list.
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        let node = self.arena.resolve(handle)?;
        Some(&mut self.arena.node_mut(node).value)
    }

    /// Removes every element, walking the list from head to tail. All handles become stale.
    ///
    /// The arena's slots are kept for reuse by later pushes.
    pub fn clear(&mut self) {
        let mut next = match std::mem::take(&mut self.state) {
            Empty => None,
            Full(bounds) => Some(bounds.head),
        };

        while let Some(index) = next {
            let node = self.arena.remove(index);
            next = node.next;
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns the index of the first element equal to `item`.
    ///
    /// Elements are compared with [`PartialEq`] only, so a list of [`Option`]s can be searched for
    /// [`None`] like any other value.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::DoublyLinkedList;
    /// let list: DoublyLinkedList<_> = [Some(1), None, Some(3)].into_iter().collect();
    /// assert_eq!(list.index_of(&None), Some(1));
    /// assert_eq!(list.index_of(&Some(4)), None);
    /// ```
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item`, returning whether one was found.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.links().find(|&node| self.arena.node(node).value == *item) {
            Some(node) => {
                self.unlink(node);
                true
            },
            None => false,
        }
    }
}

impl<T> DoublyLinkedList<T> {
    /// Iterates over the arena indices of the list's nodes, from head to tail.
    pub(crate) fn links(&self) -> Links<'_, T> {
        Links {
            arena: &self.arena,
            state: self.state,
        }
    }

    /// Finds the node at `index`, taking at most `len / 2` steps.
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeIndex, IndexOutOfBounds> {
        let len = self.len();
        let out_of_bounds = IndexOutOfBounds { index, len };

        if index >= len {
            return Err(out_of_bounds);
        }

        let mut links = self.links();
        let found = if index < len / 2 {
            links.nth(index)
        } else {
            links.nth_back(len - 1 - index)
        };

        found.ok_or(out_of_bounds)
    }

    /// Removes the node at `index` from the chain, joining its neighbours together.
    pub(crate) fn unlink(&mut self, index: NodeIndex) -> T {
        let bounds = match self.state {
            Full(bounds) => bounds,
            Empty => unreachable!("unlinking a node from an empty list"),
        };

        if index == bounds.head {
            return self.detach_head(bounds);
        }
        if index == bounds.tail {
            return self.detach_tail(bounds);
        }

        let node = self.arena.remove(index);
        match (node.prev, node.next) {
            (Some(prev), Some(next)) => {
                self.arena.node_mut(prev).next = Some(next);
                self.arena.node_mut(next).prev = Some(prev);
            },
            _ => unreachable!("interior node without two neighbours"),
        }
        self.state = bounds.after_removal(bounds.head, bounds.tail);

        node.value
    }

    fn push_only(&mut self, value: T) -> NodeHandle {
        let handle = self.arena.insert(Node::new(value, None, None));
        self.state = Full(Bounds::single(handle.index));
        handle
    }

    fn detach_head(&mut self, bounds: Bounds) -> T {
        let node = self.arena.remove(bounds.head);

        self.state = match node.next {
            Some(new_head) => {
                self.arena.node_mut(new_head).prev = None;
                bounds.after_removal(new_head, bounds.tail)
            },
            None => Empty,
        };

        node.value
    }

    fn detach_tail(&mut self, bounds: Bounds) -> T {
        let node = self.arena.remove(bounds.tail);

        self.state = match node.prev {
            Some(new_tail) => {
                self.arena.node_mut(new_tail).next = None;
                bounds.after_removal(bounds.head, new_tail)
            },
            None => Empty,
        };

        node.value
    }

    /// Checks that every link is mirrored by its neighbour and that the boundaries and length
    /// agree with the chain.
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(bounds) => {
                assert_eq!(self.arena.node(bounds.head).prev, None);
                assert_eq!(self.arena.node(bounds.tail).next, None);

                let mut count = 1;
                let mut curr = bounds.head;
                while let Some(next) = self.arena.node(curr).next {
                    assert_eq!(self.arena.node(next).prev, Some(curr));
                    curr = next;
                    count += 1;
                }
                assert_eq!(curr, bounds.tail);
                assert_eq!(count, bounds.len.get());
            },
        }
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    /// Clones the elements into a new list. Handles issued by `self` aren't valid for the clone.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Contents<'a, T>(&'a DoublyLinkedList<T>);

        impl<T: Debug> Debug for Contents<'_, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("DoublyLinkedList")
            .field("contents", &Contents(self))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.iter())
    }
}
