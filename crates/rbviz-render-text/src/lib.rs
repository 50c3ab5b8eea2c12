//! Plain-text drawings of an rbviz tree.
//!
//! Every internal node lists both children with an explicit `L`/`R` marker,
//! writing `nil` where a child is absent, so the shape reads unambiguously in
//! a terminal:
//!
//! ```text
//! 20 (black)
//! |-- L nil
//! `-- R 30 (red)
//! ```

use anyhow::Result;
use rbviz_core::{NodeRef, RbTree};
use rbviz_ports::{Key, TreeRenderer};
use std::fmt::Display;

/// Drawn in place of an empty tree.
pub const EMPTY_TREE: &str = "Tree is Empty";

/// Suffix on the highlighted node's line.
const HIGHLIGHT_MARK: &str = " <==";

/// Indented ASCII drawing.
pub struct TextRenderer;

impl TreeRenderer for TextRenderer {
    fn render(&self, tree: &RbTree<Key>, highlight: Option<Key>) -> Result<String> {
        Ok(draw_tree(tree, highlight.as_ref()))
    }
}

/// Draw `tree`, one node per line, marking the node whose key is `highlight`.
pub fn draw_tree<K: Display + PartialEq>(tree: &RbTree<K>, highlight: Option<&K>) -> String {
    let Some(root) = tree.root_ref() else {
        return format!("{EMPTY_TREE}\n");
    };
    let mut out = String::new();
    push_label(&mut out, root, highlight);
    push_children(&mut out, root, "", highlight);
    out
}

fn push_label<K: Display + PartialEq>(out: &mut String, node: NodeRef<'_, K>, highlight: Option<&K>) {
    out.push_str(&format!("{} ({})", node.key(), node.color()));
    if highlight == Some(node.key()) {
        out.push_str(HIGHLIGHT_MARK);
    }
    out.push('\n');
}

fn push_children<K: Display + PartialEq>(
    out: &mut String,
    node: NodeRef<'_, K>,
    prefix: &str,
    highlight: Option<&K>,
) {
    if node.is_leaf() {
        return;
    }
    let branches = [
        ("L", node.left(), "|-- ", "|   "),
        ("R", node.right(), "`-- ", "    "),
    ];
    for (marker, child, elbow, carry) in branches {
        out.push_str(&format!("{prefix}{elbow}{marker} "));
        match child {
            Some(child) => {
                push_label(out, child, highlight);
                push_children(out, child, &format!("{prefix}{carry}"), highlight);
            }
            None => out.push_str("nil\n"),
        }
    }
}

/// In-order listing as `key(color)` separated by spaces. Empty for an empty tree.
pub fn render_inorder<K: Display>(tree: &RbTree<K>) -> String {
    tree.iter()
        .map(|(key, color)| format!("{key}({color})"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbviz_testkit::{scenarios, tree_of};

    #[test]
    fn empty_tree_says_so() {
        let tree: RbTree<i64> = RbTree::new();
        assert_eq!(draw_tree(&tree, None), "Tree is Empty\n");
        assert_eq!(render_inorder(&tree), "");
    }

    #[test]
    fn single_node_has_no_branches() {
        let tree = tree_of(&[7]);
        assert_eq!(draw_tree(&tree, None), "7 (black)\n");
    }

    #[test]
    fn ascending_three_snapshot() {
        let tree = tree_of(&scenarios::ASCENDING_THREE);
        insta::assert_snapshot!(draw_tree(&tree, None), @r"
        20 (black)
        |-- L 10 (red)
        `-- R 30 (red)
        ");
    }

    #[test]
    fn ascending_five_snapshot() {
        let tree = tree_of(&scenarios::ASCENDING_FIVE);
        insta::assert_snapshot!(draw_tree(&tree, None), @r"
        20 (black)
        |-- L 10 (black)
        `-- R 40 (black)
            |-- L 30 (red)
            `-- R 50 (red)
        ");
    }

    #[test]
    fn missing_child_is_drawn_as_nil() {
        let tree = tree_of(&[20, 30]);
        insta::assert_snapshot!(draw_tree(&tree, None), @r"
        20 (black)
        |-- L nil
        `-- R 30 (red)
        ");
    }

    #[test]
    fn highlight_marks_one_line() {
        let tree = tree_of(&scenarios::ASCENDING_THREE);
        let text = TextRenderer.render(&tree, Some(30)).unwrap();
        let marked: Vec<_> = text.lines().filter(|l| l.ends_with(HIGHLIGHT_MARK)).collect();
        assert_eq!(marked, vec!["`-- R 30 (red) <=="]);
    }

    #[test]
    fn inorder_lists_key_and_color() {
        let tree = tree_of(&scenarios::ASCENDING_THREE);
        assert_eq!(render_inorder(&tree), "10(red) 20(black) 30(red)");
    }
}
