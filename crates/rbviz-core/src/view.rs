//! Read-only structural view for layout and rendering.

use crate::RbTree;
use crate::node::{Color, Node, NodeId};

/// Borrowed handle on one live node.
///
/// Walking `left`/`right`/`parent` never re-queries by key, so a drawing can
/// be laid out straight from the structure.
pub struct NodeRef<'a, K> {
    tree: &'a RbTree<K>,
    id: NodeId,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<'a, K> NodeRef<'a, K> {
    fn node(&self) -> &'a Node<K> {
        &self.tree.arena[self.id]
    }

    fn wrap(&self, id: Option<NodeId>) -> Option<NodeRef<'a, K>> {
        id.map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> &'a K {
        &self.node().key
    }

    pub fn color(&self) -> Color {
        self.node().color
    }

    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.wrap(self.node().left)
    }

    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.wrap(self.node().right)
    }

    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        self.wrap(self.node().parent)
    }

    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }
}

impl<K: std::fmt::Debug> std::fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", self.key())
            .field("color", &self.color())
            .finish()
    }
}

impl<K> RbTree<K> {
    /// View of the root node.
    pub fn root_ref(&self) -> Option<NodeRef<'_, K>> {
        self.node_ref(self.root)
    }

    /// View of the node behind `id`, if it is live.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        self.arena.get(id)?;
        self.node_ref(Some(id))
    }

    fn node_ref(&self, id: Option<NodeId>) -> Option<NodeRef<'_, K>> {
        id.map(|id| NodeRef { tree: self, id })
    }
}
