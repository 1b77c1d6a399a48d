//! Borrowing traversals of a [`Tree`][crate::Tree].
//!
//! Every traversal keeps its own explicit stack (or queue) on the heap instead
//! of recursing, so the depth of the tree never matters. Each call on the tree
//! returns a fresh iterator starting from the root.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::linked::Node;

/// Preorder traversal: a node, then its left subtree, then its right subtree.
///
/// This is the default iteration order of a [`Tree`][crate::Tree]. Created by
/// [`Tree::iter`][crate::Tree::iter] and [`Tree::preorder`][crate::Tree::preorder].
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is visited next.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.value)
    }
}

impl<T> FusedIterator for Preorder<'_, T> {}

/// Inorder traversal: left subtree, the node, right subtree. Yields the values
/// in ascending order. Created by [`Tree::inorder`][crate::Tree::inorder].
pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
    current: Option<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        Some(&node.value)
    }
}

impl<T> FusedIterator for Inorder<'_, T> {}

/// Postorder traversal over the nodes themselves. Used internally wherever a
/// node must be handled after both of its children (e.g. cloning).
pub(crate) struct PostorderNodes<'a, T> {
    /// Each node is pushed twice: first unexpanded, then (once its children
    /// are queued above it) expanded and ready to be yielded.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostorderNodes<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostorderNodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }
}

/// Postorder traversal: left subtree, right subtree, then the node. Created by
/// [`Tree::postorder`][crate::Tree::postorder].
pub struct Postorder<'a, T>(PostorderNodes<'a, T>);

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self(PostorderNodes::new(root))
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|node| &node.value)
    }
}

impl<T> FusedIterator for Postorder<'_, T> {}

/// Level order (breadth first) traversal: the root, then every node one level
/// down from left to right, and so on. Created by
/// [`Tree::levelorder`][crate::Tree::levelorder].
pub struct Levelorder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Levelorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Levelorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(&node.value)
    }
}

impl<T> FusedIterator for Levelorder<'_, T> {}
