use anyhow::Result;
use rbviz_core::RbTree;

/// Key type at the presentation boundary. Input is validated into this
/// before it reaches a tree.
pub type Key = i64;

/// Rendering.
///
/// Renderers should be pure: tree in, text out. `highlight` marks the key the
/// last search found, if any.
pub trait TreeRenderer {
    fn render(&self, tree: &RbTree<Key>, highlight: Option<Key>) -> Result<String>;
}
