//! The binary search tree itself: an arena of [`Node`]s plus a hash-set
//! mirror of the stored values.
//!
//! # Examples
//!
//! ```
//! use arena_bst::Tree;
//!
//! let mut tree: Tree<i32> = [5, 2, 8].iter().copied().collect();
//!
//! assert!(tree.contains(&2));
//! assert_eq!(tree.height(), 2);
//!
//! // Duplicates are refused and leave the tree untouched.
//! assert!(tree.insert(5).is_none());
//!
//! // Removal rebuilds the affected region from scratch.
//! assert!(tree.delete(&5));
//! assert!(!tree.contains(&5));
//! assert!(tree.contains(&2) && tree.contains(&8));
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use generational_arena::{Arena, Index};

use crate::node::Node;

/// An arena-backed Binary Search Tree.
///
/// The tree owns every node reachable from its root and keeps a `HashSet`
/// of the stored values in lockstep with each structural change, so that
/// [`contains`](Self::contains) never has to walk the tree. Handles
/// returned by [`insert`](Self::insert) and [`find`](Self::find) can be
/// resolved back into nodes with [`node`](Self::node) for structural
/// inspection.
#[derive(Clone)]
pub struct Tree<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) root: Option<Index>,
    pub(crate) values: HashSet<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            values: HashSet::new(),
        }
    }

    /// Number of values currently stored.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Handle of the root node, if the tree is non-empty.
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Borrows the node behind a handle. Returns `None` for handles that no
    /// longer name a live node, e.g. after the node was deleted.
    pub fn node(&self, id: Index) -> Option<&Node<T>> {
        self.nodes.get(id)
    }

    /// Drops every node and value, leaving the tree empty.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// The stored values in ascending order: left subtree, node, right
    /// subtree.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        if let Some(root) = self.root {
            self.in_order_at(root, &mut out);
        }
        out
    }

    /// The stored values in pre-order: node, left subtree, right subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        if let Some(root) = self.root {
            self.pre_order_at(root, &mut out);
        }
        out
    }

    fn in_order_at<'a>(&'a self, at: Index, out: &mut Vec<&'a T>) {
        let node = &self.nodes[at];
        if let Some(left) = node.left {
            self.in_order_at(left, out);
        }
        out.push(&node.value);
        if let Some(right) = node.right {
            self.in_order_at(right, out);
        }
    }

    fn pre_order_at<'a>(&'a self, at: Index, out: &mut Vec<&'a T>) {
        let node = &self.nodes[at];
        out.push(&node.value);
        if let Some(left) = node.left {
            self.pre_order_at(left, out);
        }
        if let Some(right) = node.right {
            self.pre_order_at(right, out);
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    ///
    /// A single node has height 1; a node's height is one more than the
    /// taller of its subtrees, with an absent child contributing 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// // Ascending inserts build a degenerate chain.
    /// let chain: Tree<i32> = (1..=5).collect();
    /// assert_eq!(chain.height(), 5);
    ///
    /// let bushy: Tree<i32> = [5, 2, 8, 1, 4, 7, 9].iter().copied().collect();
    /// assert_eq!(bushy.height(), 3);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when the tree is empty: the height of an empty tree is
    /// undefined.
    pub fn height(&self) -> usize {
        let root = self.root.expect("height of an empty tree is undefined");
        self.height_at(root)
    }

    fn height_at(&self, at: Index) -> usize {
        let node = &self.nodes[at];
        let left = node.left.map_or(0, |left| self.height_at(left));
        let right = node.right.map_or(0, |right| self.height_at(right));
        left.max(right) + 1
    }

    /// Inserts `value`, returning the handle of the freshly created node.
    ///
    /// The empty tree accepts any value as its root. Otherwise the value is
    /// compared three-way against each node on the descent: strictly
    /// smaller values go left, strictly greater values go right. A value
    /// equal to one already present is refused; `None` comes back and the
    /// tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// let root = tree.insert(5).unwrap();
    /// assert_eq!(tree.root(), Some(root));
    ///
    /// assert!(tree.insert(2).is_some());
    /// assert!(tree.insert(5).is_none()); // duplicate
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> Option<Index>
    where
        T: Ord + Hash + Clone,
    {
        match self.root {
            Some(root) => self.insert_at(root, value),
            None => {
                let id = self.attach(value, None);
                self.root = Some(id);
                Some(id)
            }
        }
    }

    fn insert_at(&mut self, at: Index, value: T) -> Option<Index>
    where
        T: Ord + Hash + Clone,
    {
        match value.cmp(&self.nodes[at].value) {
            Ordering::Less => match self.nodes[at].left {
                Some(left) => self.insert_at(left, value),
                None => {
                    let id = self.attach(value, Some(at));
                    self.nodes[at].left = Some(id);
                    Some(id)
                }
            },
            Ordering::Equal => None,
            Ordering::Greater => match self.nodes[at].right {
                Some(right) => self.insert_at(right, value),
                None => {
                    let id = self.attach(value, Some(at));
                    self.nodes[at].right = Some(id);
                    Some(id)
                }
            },
        }
    }

    /// Creates the node and records its value in the membership set.
    fn attach(&mut self, value: T, parent: Option<Index>) -> Index
    where
        T: Hash + Eq + Clone,
    {
        self.values.insert(value.clone());
        self.nodes.insert(Node::new(value, parent))
    }

    /// Looks up the node holding `value`.
    ///
    /// Returns `None` on a plain miss, i.e. the search ran off an absent
    /// child slot. That is a normal outcome, unlike querying an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let tree: Tree<i32> = [4, 2, 6].iter().copied().collect();
    ///
    /// assert!(tree.find(&2).is_some());
    /// assert!(tree.find(&5).is_none());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when the tree is empty. Searching a tree with no root is a
    /// contract violation on the caller's side, distinct from a miss; check
    /// [`is_empty`](Self::is_empty) or [`contains`](Self::contains) first
    /// when emptiness is a live possibility.
    pub fn find(&self, value: &T) -> Option<Index>
    where
        T: Ord,
    {
        let root = self.root.expect("cannot search an empty tree");
        self.find_at(root, value)
    }

    fn find_at(&self, at: Index, value: &T) -> Option<Index>
    where
        T: Ord,
    {
        let node = &self.nodes[at];
        match value.cmp(&node.value) {
            Ordering::Less => node.left.and_then(|left| self.find_at(left, value)),
            Ordering::Equal => Some(at),
            Ordering::Greater => node.right.and_then(|right| self.find_at(right, value)),
        }
    }

    /// Returns `true` if `value` is currently stored.
    ///
    /// Answered in `O(1)` from the membership set, which mirrors the set of
    /// values reachable from the root at all times.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Hash + Eq,
    {
        self.values.contains(value)
    }

    /// Deletes `value` from the tree. Returns `true` iff it was present.
    ///
    /// Removal is a brute-force rebuild, not a successor splice: the
    /// subtree rooted at the target node is detached whole, its values are
    /// harvested in pre-order, the target's own value is discarded, and the
    /// survivors are re-inserted one by one. The rebuilt region keeps every
    /// invariant but not necessarily its old shape. `O(k log n)` for a
    /// subtree of `k` nodes, the price of having no splice logic at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let mut tree: Tree<i32> = [5, 2, 8, 1, 4].iter().copied().collect();
    ///
    /// // Deleting 2 takes its subtree {1, 4} down with it; both come back.
    /// assert!(tree.delete(&2));
    /// assert!(!tree.contains(&2));
    /// assert!(tree.contains(&1) && tree.contains(&4));
    ///
    /// // Deleting a value that isn't there changes nothing.
    /// assert!(!tree.delete(&2));
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord + Hash + Clone,
    {
        if self.is_empty() {
            return false;
        }
        let target = match self.find(value) {
            Some(target) => target,
            None => return false,
        };

        // Detach the whole subtree rooted at the target.
        match self.nodes[target].parent {
            Some(parent) => {
                let parent_node = &mut self.nodes[parent];
                if parent_node.left == Some(target) {
                    parent_node.left = None;
                } else {
                    parent_node.right = None;
                }
            }
            None => self.root = None,
        }

        // Harvest the detached values; pre-order puts the target's own
        // value first.
        let mut harvested = Vec::new();
        self.harvest_at(target, &mut harvested);
        let mut survivors = harvested.into_iter();
        survivors.next();

        self.values.remove(value);
        for survivor in survivors {
            self.insert(survivor);
        }
        true
    }

    /// Removes the subtree rooted at `at` from the arena, pushing its
    /// values in pre-order.
    fn harvest_at(&mut self, at: Index, out: &mut Vec<T>) {
        let node = self
            .nodes
            .remove(at)
            .expect("nodes of a detached subtree are live");
        out.push(node.value);
        if let Some(left) = node.left {
            self.harvest_at(left, out);
        }
        if let Some(right) = node.right {
            self.harvest_at(right, out);
        }
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root.map(|id| DebugNode { tree: self, id }))
            .finish()
    }
}

/// Borrow of one node plus the arena needed to resolve its children, so
/// `Debug` can render the tree recursively.
struct DebugNode<'a, T> {
    tree: &'a Tree<T>,
    id: Index,
}

impl<'a, T> fmt::Debug for DebugNode<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.tree.nodes[self.id];
        let child = |id| DebugNode {
            tree: self.tree,
            id,
        };
        f.debug_struct("Node")
            .field("value", &node.value)
            .field("left", &node.left.map(child))
            .field("right", &node.right.map(child))
            .finish()
    }
}
