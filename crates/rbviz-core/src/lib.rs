//! Red-black tree for rbviz.
//!
//! [`RbTree`] keeps its nodes in an arena and links them through
//! [`NodeId`] handles, so a presentation layer can walk the structure
//! (keys, colors, left/right children) without borrowing individual nodes.
//! Mutations return the authoritative root handle together with an outcome
//! value; nothing about a rejected operation (duplicate key, missing key)
//! touches the tree.
//!
//! Invariants held after every completed operation:
//! 1. in-order keys are strictly ascending (no duplicates)
//! 2. absent children count as black
//! 3. the root is black
//! 4. a red node never has a red parent
//! 5. every path from a node down to an absent child crosses the same number
//!    of black nodes

mod delete;
mod insert;
mod node;
mod query;
mod rotate;
mod view;

pub use node::{Color, NodeId};
pub use query::{Iter, Keys, SearchOutcome};
pub use view::NodeRef;

use node::{Arena, Side};

/// Result of [`RbTree::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum InsertOutcome {
    Inserted,
    /// The key was already present; the tree is unchanged.
    Duplicate,
}

/// Result of [`RbTree::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum DeleteOutcome {
    Deleted,
    /// The key was not present; the tree is unchanged.
    NotFound,
}

/// A mutation outcome plus the root handle after the mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Mutation<O> {
    pub root: Option<NodeId>,
    pub outcome: O,
}

impl<O> Mutation<O> {
    fn new(root: Option<NodeId>, outcome: O) -> Self {
        Self { root, outcome }
    }
}

/// Red-black tree over totally ordered keys.
#[derive(Clone)]
pub struct RbTree<K> {
    arena: Arena<K>,
    root: Option<NodeId>,
    len: usize,
}

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            root: None,
            len: 0,
        }
    }
}

impl<K: Ord> RbTree<K> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K> RbTree<K> {
    /// Handle of the current root, `None` when empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drop every node. Outstanding [`NodeId`]s become meaningless.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self.arena[id];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }

    fn color_of(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.arena[id].color)
    }

    fn is_red(&self, id: Option<NodeId>) -> bool {
        self.color_of(id).is_red()
    }

    fn is_black(&self, id: Option<NodeId>) -> bool {
        self.color_of(id).is_black()
    }

    /// Recolor a real node. Absent links are left alone.
    fn paint(&mut self, id: Option<NodeId>, color: Color) {
        if let Some(id) = id {
            self.arena[id].color = color;
        }
    }

    fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent
    }

    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.arena[id].child(side)
    }

    /// Which slot of `parent` holds `child`, decided by identity.
    fn side_of(&self, child: Option<NodeId>, parent: NodeId) -> Side {
        if self.arena[parent].left == child {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Point whichever slot held `old` (or the root) at `new`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let side = self.side_of(Some(old), p);
                self.arena[p].set_child(side, new);
            }
        }
    }
}

impl<K: Ord> FromIterator<K> for RbTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = RbTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RbTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            let _ = self.insert(key);
        }
    }
}

impl<K: std::fmt::Debug> std::fmt::Debug for RbTree<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
