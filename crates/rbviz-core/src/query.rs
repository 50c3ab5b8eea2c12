//! Read-only queries: lookup, extremes and in-order traversal.

use std::cmp::Ordering;

use crate::RbTree;
use crate::node::{Color, NodeId};

/// Result of [`RbTree::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SearchOutcome {
    Found(Color),
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn color(self) -> Option<Color> {
        match self {
            SearchOutcome::Found(color) => Some(color),
            SearchOutcome::NotFound => None,
        }
    }
}

impl<K: Ord> RbTree<K> {
    /// Handle of the node holding `key`.
    pub fn find(&self, key: &K) -> Option<NodeId> {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.arena[id];
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    pub fn search(&self, key: &K) -> SearchOutcome {
        match self.find(key) {
            Some(id) => SearchOutcome::Found(self.arena[id].color),
            None => SearchOutcome::NotFound,
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }
}

impl<K> RbTree<K> {
    /// Leftmost node of the subtree rooted at `id`.
    ///
    /// # Panics
    ///
    /// If `id` is not a live node of this tree.
    pub fn minimum(&self, id: NodeId) -> NodeId {
        let mut id = id;
        while let Some(left) = self.arena[id].left {
            id = left;
        }
        id
    }

    /// Rightmost node of the subtree rooted at `id`.
    ///
    /// # Panics
    ///
    /// If `id` is not a live node of this tree.
    pub fn maximum(&self, id: NodeId) -> NodeId {
        let mut id = id;
        while let Some(right) = self.arena[id].right {
            id = right;
        }
        id
    }

    pub fn min(&self) -> Option<&K> {
        self.root.map(|root| &self.arena[self.minimum(root)].key)
    }

    pub fn max(&self) -> Option<&K> {
        self.root.map(|root| &self.arena[self.maximum(root)].key)
    }

    /// In-order `(key, color)` pairs. Each call starts a fresh walk.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// In-order keys.
    pub fn keys(&self) -> Keys<'_, K> {
        Keys { inner: self.iter() }
    }
}

/// In-order iterator over `(key, color)`.
pub struct Iter<'a, K> {
    tree: &'a RbTree<K>,
    stack: Vec<NodeId>,
}

impl<K> Iter<'_, K> {
    fn push_left_spine(&mut self, mut cursor: Option<NodeId>) {
        while let Some(id) = cursor {
            self.stack.push(id);
            cursor = self.tree.arena[id].left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = (&'a K, Color);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = &tree.arena[id];
        self.push_left_spine(node.right);
        Some((&node.key, node.color))
    }
}

impl<'a, K> IntoIterator for &'a RbTree<K> {
    type Item = (&'a K, Color);
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over keys.
pub struct Keys<'a, K> {
    inner: Iter<'a, K>,
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}
