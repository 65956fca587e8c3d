//! The tree-node layer: a plain data carrier stored in a generational
//! arena.

use generational_arena::Index;

/// A single vertex of a [`Tree`](crate::tree::Tree).
///
/// `Node`s live in the arena owned by their tree and refer to each other
/// through [`Index`] handles: an explicit pair of optional child slots
/// (left holds strictly smaller values, right strictly greater ones) plus a
/// non-owning back-reference to the parent. A `Node` has no behavior of its
/// own; every structural change goes through the tree that owns it.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) parent: Option<Index>,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, parent: Option<Index>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Handle of the left child, the root of the strictly-smaller subtree.
    pub fn left(&self) -> Option<Index> {
        self.left
    }

    /// Handle of the right child, the root of the strictly-greater subtree.
    pub fn right(&self) -> Option<Index> {
        self.right
    }

    /// Handle of the parent node. `None` exactly when this node is the
    /// root.
    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
