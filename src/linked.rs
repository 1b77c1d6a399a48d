//! A link-based BST. Every `Node` exclusively owns its (optional) children so
//! the whole tree is a strict hierarchy of `Box`es hanging off the root. The
//! tree never balances itself; call [`Tree::rebalance`] to rebuild it with
//! minimal height.
//!
//! # Examples
//!
//! ```
//! use linkedbst::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.add(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Duplicates are kept.
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Err(TreeError::NotFound));
//! ```

use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::iter::{Inorder, Levelorder, Postorder, PostorderNodes, Preorder};
use crate::util::Side;
use crate::TreeError;

type Link<T> = Option<Box<Node<T>>>;

/// A single value and the subtrees hanging off it. Nodes have no parent
/// pointer, the tree is only ever walked from the root down.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// An unbalanced Binary Search Tree. Values strictly less than a node go into
/// its left subtree, everything else (including equal values) goes right.
pub struct Tree<T> {
    root: Link<T>,
    /// Number of nodes reachable from `root`.
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// The number of values in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Drops every node, leaving an empty tree.
    pub fn clear(&mut self) {
        // Dropping the root directly would recurse once per level.
        let mut stack: Vec<_> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.size = 0;
    }

    /// Iterates over the values in preorder. This is the default iteration
    /// order of the tree and, since it pins down the shape of the tree, the
    /// order used to compare trees for equality.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree = Tree::from([2, 1, 3]);
    /// assert!(tree.iter().eq(&[2, 1, 3]));
    /// ```
    pub fn iter(&self) -> Preorder<'_, T> {
        Preorder::new(self.root())
    }

    /// Iterates over the values in preorder. Same as [`Tree::iter`].
    pub fn preorder(&self) -> Preorder<'_, T> {
        self.iter()
    }

    /// Iterates over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree = Tree::from([2, 3, 1]);
    /// assert!(tree.inorder().eq(&[1, 2, 3]));
    /// ```
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root())
    }

    /// Iterates over the values children first, the root last.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root())
    }

    /// Iterates over the values one level at a time, left to right.
    pub fn levelorder(&self) -> Levelorder<'_, T> {
        Levelorder::new(self.root())
    }

    /// The number of edges on the longest path from the root to a leaf. A tree
    /// with a single node has a height of 0.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] when the tree has no nodes.
    pub fn height(&self) -> Result<usize, TreeError> {
        let root = self.root.as_deref().ok_or(TreeError::Empty)?;
        let mut height = 0;
        let mut level = vec![root];
        loop {
            let next: Vec<_> = level
                .iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
            if next.is_empty() {
                return Ok(height);
            }
            height += 1;
            level = next;
        }
    }

    /// Whether the tree is within the height bound `2 * log2(len + 1) - 1`.
    /// This is not an AVL style check of every node: only the overall height
    /// is compared against what a tree of this many nodes could get away with.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] when the tree has no nodes.
    pub fn is_balanced(&self) -> Result<bool, TreeError> {
        let height = self.height()?;
        let bound = 2.0 * ((self.size + 1) as f64).log2() - 1.0;
        Ok((height as f64) < bound)
    }

    /// Rebuilds the tree with the minimal possible height. The values are laid
    /// out in their inorder sequence and, for every subsequence of `n` values,
    /// the one at index `n / 2` becomes the root of the subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), Ok(6));
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), Ok(2));
    /// assert!(tree.iter().eq(&[4, 2, 1, 3, 6, 5, 7]));
    /// ```
    pub fn rebalance(&mut self) {
        let values = self.take_inorder();
        let len = values.len();
        self.root = Self::build_balanced(len, &mut values.into_iter());
        self.size = len;
        debug!(
            "rebalanced tree of {} values to height {:?}",
            len,
            self.height().ok()
        );
    }

    /// Builds a minimal height subtree out of the next `len` values. Only
    /// recurses `O(lg len)` deep.
    fn build_balanced(len: usize, values: &mut impl Iterator<Item = T>) -> Link<T> {
        if len == 0 {
            return None;
        }
        // `len / 2` values sit before the middle one.
        let left = Self::build_balanced(len / 2, values);
        let value = values.next()?;
        let right = Self::build_balanced(len - len / 2 - 1, values);
        Some(Box::new(Node { value, left, right }))
    }

    /// Moves every value out of the tree in inorder, leaving the tree empty.
    fn take_inorder(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.size);
        let mut stack = Vec::new();
        let mut current = self.root.take();
        self.size = 0;
        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            match stack.pop() {
                Some(node) => {
                    let Node { value, right, .. } = *node;
                    values.push(value);
                    current = right;
                }
                None => return values,
            }
        }
    }

    /// Removes the largest node of `subtree`, splicing its left child into its
    /// place. Returns the removed value and what is left of `subtree`.
    fn take_max(subtree: Box<Node<T>>) -> (T, Link<T>) {
        let mut spine = Vec::new();
        let mut max = subtree;
        while let Some(right) = max.right.take() {
            spine.push(max);
            max = right;
        }
        let Node { value, left, .. } = *max;

        let mut rest = left;
        while let Some(mut node) = spine.pop() {
            node.right = rest;
            rest = Some(node);
        }
        (value, rest)
    }
}

impl<T: Ord> Tree<T> {
    /// Adds the item to the tree. Items equal to one already stored are kept
    /// as well and end up in its right subtree.
    pub fn add(&mut self, item: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            let side = Side::toward(&item, &node.value);
            slot = node.child_mut(side);
        }
        *slot = Some(Node::new_boxed(item));
        self.size += 1;
    }

    /// Finds a value in the tree equal to `item`. If there are duplicates the
    /// one closest to the root is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree = Tree::from([1, 2]);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T> {
        let mut probe = self.root.as_deref();
        while let Some(node) = probe {
            if *item == node.value {
                return Some(&node.value);
            }
            probe = node.child(Side::toward(item, &node.value));
        }
        None
    }

    /// Whether a value equal to `item` is in the tree.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// How many values in the tree are equal to `item`.
    pub fn count(&self, item: &T) -> usize {
        // Deleting with lift-max can leave equal values on both sides of a
        // node, so a single descent isn't enough.
        self.iter().filter(|value| *value == item).count()
    }

    /// Removes a value equal to `item` from the tree and returns it. If the
    /// node holding it has two children, it takes over the largest value of
    /// its left subtree and that node is removed instead.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] when no value equals `item`. The tree is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::from([2, 1, 3]);
    ///
    /// assert_eq!(tree.remove(&2), Ok(2));
    /// assert_eq!(tree.remove(&2), Err(TreeError::NotFound));
    /// assert!(tree.iter().eq(&[1, 3]));
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T, TreeError> {
        let slot = self.slot_mut(item).ok_or(TreeError::NotFound)?;
        let mut node = slot.take().ok_or(TreeError::NotFound)?;

        let removed = match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                trace!("lifting the maximum of the left subtree into a removed node");
                let (max, left) = Self::take_max(left);
                node.left = left;
                node.right = Some(right);
                let removed = mem::replace(&mut node.value, max);
                *slot = Some(node);
                removed
            }
            (child, None) | (None, child) => {
                trace!("splicing out a removed node with at most one child");
                *slot = child;
                node.value
            }
        };
        self.size -= 1;
        Ok(removed)
    }

    /// Overwrites the value equal to `item` with `new_item` and returns the old
    /// value, or `None` if no value equals `item`.
    ///
    /// The node is not moved: if `new_item` doesn't sort the same way `item`
    /// did, the tree is no longer ordered and lookups may miss values.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let mut tree = Tree::from([(2, "b"), (1, "a")]);
    ///
    /// assert_eq!(tree.replace(&(1, "a"), (1, "z")), Some((1, "a")));
    /// assert_eq!(tree.replace(&(3, "c"), (3, "z")), None);
    /// assert!(tree.inorder().eq(&[(1, "z"), (2, "b")]));
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T> {
        let mut probe = self.root.as_deref_mut();
        while let Some(node) = probe {
            if node.value == *item {
                return Some(mem::replace(&mut node.value, new_item));
            }
            // Phrased as `value > item` rather than `add`'s `item < value`.
            // With a total order both walk the same path.
            probe = if node.value > *item {
                node.left.as_deref_mut()
            } else {
                node.right.as_deref_mut()
            };
        }
        None
    }

    /// A new tree holding this tree's values followed by `other`'s, each added
    /// in preorder. Neither tree is modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree = Tree::from([2, 1]).concat(&Tree::from([3, 0]));
    /// assert!(tree.iter().eq(&[2, 1, 0, 3]));
    /// ```
    pub fn concat(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// All values `v` with `low <= v <= high`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree = Tree::from([5, 3, 8, 1, 4, 7, 9]);
    /// assert_eq!(tree.range_find(&4, &8), [&4, &5, &7, &8]);
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T> {
        self.sorted()
            .into_iter()
            .filter(|value| low <= *value && *value <= high)
            .collect()
    }

    /// The smallest value strictly greater than `item`. `item` itself does not
    /// have to be in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree = Tree::from([5, 3, 8]);
    /// assert_eq!(tree.successor(&5), Some(&8));
    /// assert_eq!(tree.successor(&4), Some(&5));
    /// assert_eq!(tree.successor(&8), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T> {
        self.sorted().into_iter().find(|value| *value > item)
    }

    /// The largest value strictly less than `item`. `item` itself does not
    /// have to be in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree = Tree::from([5, 3, 8]);
    /// assert_eq!(tree.predecessor(&5), Some(&3));
    /// assert_eq!(tree.predecessor(&9), Some(&8));
    /// assert_eq!(tree.predecessor(&3), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T> {
        self.sorted().into_iter().rev().find(|value| *value < item)
    }

    /// References to every value, sorted. Only differs from `inorder` once
    /// `replace` has broken the ordering of the tree.
    fn sorted(&self) -> Vec<&T> {
        let mut values: Vec<_> = self.inorder().collect();
        values.sort();
        values
    }

    /// The link holding the first node (on the search path) equal to `item`.
    fn slot_mut(&mut self, item: &T) -> Option<&mut Link<T>> {
        let mut slot = &mut self.root;
        loop {
            let side = match slot.as_deref() {
                None => return None,
                Some(node) if node.value == *item => return Some(slot),
                Some(node) => Side::toward(item, &node.value),
            };
            slot = match slot {
                Some(node) => node.child_mut(side),
                None => return None,
            };
        }
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        // In postorder both subtrees of a node are already built (right one on
        // top) by the time the node itself comes up.
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in PostorderNodes::new(self.root()) {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }));
        }
        Self {
            root: built.pop(),
            size: self.size,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    // Preorder, which is enough to tell the shape apart.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Draws the tree rotated 90 degrees counter-clockwise: the root is on the
/// left edge, right subtrees above their parent, left subtrees below, each
/// level indented by `"| "`.
///
/// ```
/// use linkedbst::Tree;
///
/// let tree = Tree::from([5, 3, 8, 1]);
/// assert_eq!(tree.to_string(), "| 8\n5\n| 3\n| | 1\n");
/// ```
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Vec::new();
        let mut current = self.root.as_deref().map(|node| (node, 0));
        loop {
            while let Some((node, level)) = current {
                stack.push((node, level));
                current = node.right.as_deref().map(|right| (right, level + 1));
            }
            let (node, level) = match stack.pop() {
                Some(entry) => entry,
                None => return Ok(()),
            };
            writeln!(f, "{}{}", "| ".repeat(level), node.value)?;
            current = node.left.as_deref().map(|left| (left, level + 1));
        }
    }
}

/// Two trees are equal when they hold the same values in the same shape.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut tree = Self::new();
        tree.extend(items);
        tree
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for Tree<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Preorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consumes the tree, yielding its values in inorder.
impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.take_inorder().into_iter()
    }
}
