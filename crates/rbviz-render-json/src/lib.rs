//! JSON snapshots of an rbviz tree.
//!
//! A snapshot is the nested structure (ids, keys, colors) plus the counts a
//! viewer needs to size itself. Absent children are omitted.

use anyhow::{Context, Result};
use rbviz_core::{Color, NodeId, NodeRef, RbTree};
use rbviz_ports::{Key, TreeRenderer};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One node and its subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot<K> {
    pub id: NodeId,
    pub key: K,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<NodeSnapshot<K>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<NodeSnapshot<K>>>,
}

impl<K: Clone> NodeSnapshot<K> {
    fn of(node: NodeRef<'_, K>) -> Self {
        Self {
            id: node.id(),
            key: node.key().clone(),
            color: node.color(),
            left: node.left().map(|l| Box::new(Self::of(l))),
            right: node.right().map(|r| Box::new(Self::of(r))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot<K> {
    pub len: usize,
    pub height: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<K>,
    pub root: Option<NodeSnapshot<K>>,
}

impl<K: Clone> TreeSnapshot<K> {
    pub fn of(tree: &RbTree<K>, highlight: Option<&K>) -> Self {
        Self {
            len: tree.len(),
            height: tree.height(),
            highlight: highlight.cloned(),
            root: tree.root_ref().map(NodeSnapshot::of),
        }
    }
}

/// Pretty-printed [`TreeSnapshot`].
pub struct JsonRenderer;

impl TreeRenderer for JsonRenderer {
    fn render(&self, tree: &RbTree<Key>, highlight: Option<Key>) -> Result<String> {
        let snapshot = TreeSnapshot::of(tree, highlight.as_ref());
        let mut text = serde_json::to_string_pretty(&snapshot).context("serialize tree snapshot")?;
        text.push('\n');
        Ok(text)
    }
}

pub fn write_snapshot<K: Serialize>(path: &Path, snapshot: &TreeSnapshot<K>) -> Result<()> {
    let text = serde_json::to_string_pretty(snapshot).context("serialize tree snapshot")?;
    std::fs::write(path, text).with_context(|| format!("write {path:?}"))?;
    Ok(())
}
