//! Canvas coordinates for drawing an rbviz tree.
//!
//! The root sits at a fixed origin. Each level drops by `level_spacing`, and
//! a child is shifted left or right of its parent by
//! `max(min_offset, base_offset / 2^depth)`, so the fan-out halves per level
//! until it bottoms out. Deep trees can overlap at the floor; the canvas is
//! expected to scroll.

use rbviz_core::{Color, NodeId, NodeRef, RbTree};
use serde::{Deserialize, Serialize};

/// Spacing and origin of a drawing, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_origin_x")]
    pub origin_x: i64,
    #[serde(default = "default_origin_y")]
    pub origin_y: i64,
    /// Vertical distance between depths.
    #[serde(default = "default_level_spacing")]
    pub level_spacing: i64,
    /// Horizontal child offset under the root.
    #[serde(default = "default_base_offset")]
    pub base_offset: i64,
    /// Floor for the horizontal child offset.
    #[serde(default = "default_min_offset")]
    pub min_offset: i64,
    #[serde(default = "default_node_radius")]
    pub node_radius: i64,
}

fn default_origin_x() -> i64 {
    2000
}

fn default_origin_y() -> i64 {
    50
}

fn default_level_spacing() -> i64 {
    60
}

fn default_base_offset() -> i64 {
    400
}

fn default_min_offset() -> i64 {
    35
}

fn default_node_radius() -> i64 {
    18
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin_x: default_origin_x(),
            origin_y: default_origin_y(),
            level_spacing: default_level_spacing(),
            base_offset: default_base_offset(),
            min_offset: default_min_offset(),
            node_radius: default_node_radius(),
        }
    }
}

impl LayoutConfig {
    /// Horizontal distance from a node at `depth` to each of its children.
    pub fn child_offset(&self, depth: usize) -> i64 {
        let halved = u32::try_from(depth)
            .ok()
            .and_then(|d| self.base_offset.checked_shr(d))
            .unwrap_or(0);
        halved.max(self.min_offset)
    }
}

/// A node with its canvas position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedNode<K> {
    pub id: NodeId,
    pub key: K,
    pub color: Color,
    pub x: i64,
    pub y: i64,
    pub depth: usize,
    #[serde(default)]
    pub highlighted: bool,
}

/// A parent-to-child connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

/// Bounding box of every node circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    fn around(x: i64, y: i64, r: i64) -> Self {
        Self {
            min_x: x.saturating_sub(r),
            min_y: y.saturating_sub(r),
            max_x: x.saturating_add(r),
            max_y: y.saturating_add(r),
        }
    }

    fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// A complete drawing: nodes in pre-order, edges, and the box they fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout<K> {
    pub nodes: Vec<PlacedNode<K>>,
    pub edges: Vec<Edge>,
    /// `None` for an empty tree.
    pub bounds: Option<Bounds>,
}

impl<K> Layout<K> {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn position(&self, id: NodeId) -> Option<(i64, i64)> {
        self.nodes.iter().find(|n| n.id == id).map(|n| (n.x, n.y))
    }
}

/// Lay out `tree`. Nodes whose key equals `highlight` are flagged.
pub fn layout<K: Clone + PartialEq>(
    tree: &RbTree<K>,
    config: &LayoutConfig,
    highlight: Option<&K>,
) -> Layout<K> {
    let mut nodes = Vec::with_capacity(tree.len());
    let mut edges = Vec::with_capacity(tree.len().saturating_sub(1));
    let mut bounds: Option<Bounds> = None;

    let mut stack: Vec<(NodeRef<'_, K>, i64, i64, usize)> = tree
        .root_ref()
        .map(|root| (root, config.origin_x, config.origin_y, 0))
        .into_iter()
        .collect();

    while let Some((node, x, y, depth)) = stack.pop() {
        let key = node.key();
        nodes.push(PlacedNode {
            id: node.id(),
            key: key.clone(),
            color: node.color(),
            x,
            y,
            depth,
            highlighted: highlight == Some(key),
        });
        let circle = Bounds::around(x, y, config.node_radius);
        bounds = Some(bounds.map_or(circle, |b| b.union(circle)));

        let offset = config.child_offset(depth);
        let child_y = y.saturating_add(config.level_spacing);
        // Right first so the left subtree is popped (and listed) first.
        let branches = [
            (node.right(), x.saturating_add(offset)),
            (node.left(), x.saturating_sub(offset)),
        ];
        for (child, child_x) in branches {
            let Some(child) = child else { continue };
            edges.push(Edge {
                from: node.id(),
                to: child.id(),
                x1: x,
                y1: y,
                x2: child_x,
                y2: child_y,
            });
            stack.push((child, child_x, child_y, depth + 1));
        }
    }

    Layout {
        nodes,
        edges,
        bounds,
    }
}
