//! Invariant checks for rbviz trees.
//!
//! [`TreeValidator`] walks a live [`RbTree`] and reports every broken
//! red-black invariant, parent link or length mismatch it finds. The color
//! and ordering checks run over [`Shape`], an owned copy of the structure,
//! so they can also be pointed at hand-built (and deliberately broken) trees.

use rbviz_core::{Color, NodeRef, RbTree};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The property a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Invariant {
    BstOrder,
    RootBlack,
    NoRedRed,
    BlackHeight,
    ParentLink,
    Length,
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invariant::BstOrder => write!(f, "bst_order"),
            Invariant::RootBlack => write!(f, "root_black"),
            Invariant::NoRedRed => write!(f, "no_red_red"),
            Invariant::BlackHeight => write!(f, "black_height"),
            Invariant::ParentLink => write!(f, "parent_link"),
            Invariant::Length => write!(f, "length"),
        }
    }
}

/// One broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvariantViolation {
    pub invariant: Invariant,
    /// Debug rendering of the key where it was detected, if any.
    pub at: Option<String>,
    pub message: String,
}

impl InvariantViolation {
    fn new(invariant: Invariant, at: Option<String>, message: impl Into<String>) -> Self {
        Self {
            invariant,
            at,
            message: message.into(),
        }
    }
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invariant '{}' violated", self.invariant)?;
        if let Some(at) = &self.at {
            write!(f, " at {at}")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

pub type ValidationResult<T> = Result<T, InvariantViolation>;

/// Summary of a tree that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeReport {
    pub len: usize,
    pub height: usize,
    /// Black nodes on every root-to-leaf path, root included.
    pub black_height: usize,
}

/// Owned snapshot of a tree's keys, colors and left/right structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape<K> {
    pub key: K,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<Shape<K>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<Shape<K>>>,
}

impl<K> Shape<K> {
    pub fn red(key: K) -> Self {
        Self::leaf(key, Color::Red)
    }

    pub fn black(key: K) -> Self {
        Self::leaf(key, Color::Black)
    }

    fn leaf(key: K, color: Color) -> Self {
        Self {
            key,
            color,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, left: Shape<K>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn with_right(mut self, right: Shape<K>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    pub fn node_count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |l| l.node_count())
            + self.right.as_ref().map_or(0, |r| r.node_count())
    }

    pub fn height(&self) -> usize {
        1 + self
            .left
            .as_ref()
            .map_or(0, |l| l.height())
            .max(self.right.as_ref().map_or(0, |r| r.height()))
    }
}

impl<K: Clone> Shape<K> {
    /// Copy the structure of `tree`. `None` for an empty tree.
    pub fn of(tree: &RbTree<K>) -> Option<Self> {
        tree.root_ref().map(Self::from_node)
    }

    fn from_node(node: NodeRef<'_, K>) -> Self {
        Self {
            key: node.key().clone(),
            color: node.color(),
            left: node.left().map(|l| Box::new(Self::from_node(l))),
            right: node.right().map(|r| Box::new(Self::from_node(r))),
        }
    }
}

/// Invariant checks.
pub struct TreeValidator;

impl TreeValidator {
    /// Every violation in `tree`, empty when the tree is sound.
    pub fn violations<K: Ord + Clone + fmt::Debug>(tree: &RbTree<K>) -> Vec<InvariantViolation> {
        let mut out = Vec::new();
        let shape = Shape::of(tree);
        Self::check_shape_into(shape.as_ref(), &mut out);

        if let Some(root) = tree.root_ref() {
            if !root.is_root() {
                out.push(InvariantViolation::new(
                    Invariant::ParentLink,
                    Some(format!("{:?}", root.key())),
                    "root has a parent",
                ));
            }
            Self::check_links(root, &mut out);
        }

        let counted = tree.iter().count();
        if counted != tree.len() {
            out.push(InvariantViolation::new(
                Invariant::Length,
                None,
                format!("len() reports {} but {} nodes are reachable", tree.len(), counted),
            ));
        }
        out
    }

    /// Check `tree`, returning its dimensions or the first violation.
    pub fn validate<K: Ord + Clone + fmt::Debug>(tree: &RbTree<K>) -> ValidationResult<TreeReport> {
        match Self::violations(tree).into_iter().next() {
            Some(violation) => Err(violation),
            None => {
                let shape = Shape::of(tree);
                Ok(TreeReport {
                    len: tree.len(),
                    height: tree.height(),
                    black_height: shape.as_ref().map_or(0, black_height_of),
                })
            }
        }
    }

    /// Color and ordering checks over a shape. `None` is the empty tree.
    pub fn check_shape<K: Ord + fmt::Debug>(root: Option<&Shape<K>>) -> Vec<InvariantViolation> {
        let mut out = Vec::new();
        Self::check_shape_into(root, &mut out);
        out
    }

    fn check_shape_into<K: Ord + fmt::Debug>(root: Option<&Shape<K>>, out: &mut Vec<InvariantViolation>) {
        let Some(root) = root else { return };
        if root.color != Color::Black {
            out.push(InvariantViolation::new(
                Invariant::RootBlack,
                Some(format!("{:?}", root.key)),
                "root is red",
            ));
        }
        walk(root, None, None, false, out);
    }

    fn check_links<K: fmt::Debug>(node: NodeRef<'_, K>, out: &mut Vec<InvariantViolation>) {
        for child in [node.left(), node.right()].into_iter().flatten() {
            if child.parent().map(|p| p.id()) != Some(node.id()) {
                out.push(InvariantViolation::new(
                    Invariant::ParentLink,
                    Some(format!("{:?}", child.key())),
                    format!("parent link does not point at {:?}", node.key()),
                ));
            }
            Self::check_links(child, out);
        }
    }
}

/// Returns the black height of `node` (counting `node`).
fn walk<K: Ord + fmt::Debug>(
    node: &Shape<K>,
    lower: Option<&K>,
    upper: Option<&K>,
    parent_red: bool,
    out: &mut Vec<InvariantViolation>,
) -> usize {
    let at = || Some(format!("{:?}", node.key));

    if lower.is_some_and(|lo| node.key <= *lo) || upper.is_some_and(|hi| node.key >= *hi) {
        out.push(InvariantViolation::new(
            Invariant::BstOrder,
            at(),
            format!("key outside ({lower:?}, {upper:?})"),
        ));
    }

    let red = node.color == Color::Red;
    if red && parent_red {
        out.push(InvariantViolation::new(
            Invariant::NoRedRed,
            at(),
            "red node under a red parent",
        ));
    }

    let left = node
        .left
        .as_deref()
        .map_or(0, |l| walk(l, lower, Some(&node.key), red, out));
    let right = node
        .right
        .as_deref()
        .map_or(0, |r| walk(r, Some(&node.key), upper, red, out));
    if left != right {
        out.push(InvariantViolation::new(
            Invariant::BlackHeight,
            at(),
            format!("left black height {left} != right black height {right}"),
        ));
    }

    left.max(right) + usize::from(!red)
}

fn black_height_of<K>(shape: &Shape<K>) -> usize {
    let mut height = 0;
    let mut cursor = Some(shape);
    while let Some(node) = cursor {
        height += usize::from(node.color == Color::Black);
        cursor = node.left.as_deref();
    }
    height
}
