use derive_more::IsVariant;

use super::{Length, ONE};
use crate::collections::linked::NodeIndex;

/// The shape of a list. An empty list has no boundary nodes at all, which makes it impossible to
/// represent a head without a tail or a zero length with nodes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(Bounds),
}

pub(crate) use ListState::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bounds {
    pub len: Length,
    pub head: NodeIndex,
    pub tail: NodeIndex,
}

impl Bounds {
    /// Bounds for a list containing only the node at `index`.
    pub const fn single(index: NodeIndex) -> Bounds {
        Bounds {
            len: ONE,
            head: index,
            tail: index,
        }
    }

    /// The state after one node has been removed, leaving `head` and `tail` as the new
    /// boundaries. These are ignored if no nodes remain.
    pub const fn after_removal(self, head: NodeIndex, tail: NodeIndex) -> ListState {
        match self.len.checked_sub(1) {
            Some(len) => Full(Bounds { len, head, tail }),
            None => Empty,
        }
    }
}

impl ListState {
    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(bounds) => bounds.len.get(),
        }
    }
}
