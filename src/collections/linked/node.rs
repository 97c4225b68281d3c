use super::NodeIndex;

pub(crate) type Link = Option<NodeIndex>;

/// A node of a linked list. The links refer to neighbouring nodes by their index in the owning
/// arena; they never own anything.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link,
    pub next: Link,
}

impl<T> Node<T> {
    pub const fn new(value: T, prev: Link, next: Link) -> Node<T> {
        Node { value, prev, next }
    }
}
