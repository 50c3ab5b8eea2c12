//! The two order-preserving rotations.

use crate::RbTree;
use crate::node::{NodeId, Side};

impl<K> RbTree<K> {
    /// Promote `x.right` into `x`'s position; `x` becomes its left child.
    ///
    /// Returns the new local subtree root, or `None` (and changes nothing)
    /// when `x` has no right child.
    pub(crate) fn rotate_left(&mut self, x: NodeId) -> Option<NodeId> {
        self.rotate(x, Side::Left)
    }

    /// Mirror of [`RbTree::rotate_left`], pivoting on `x.left`.
    pub(crate) fn rotate_right(&mut self, x: NodeId) -> Option<NodeId> {
        self.rotate(x, Side::Right)
    }

    /// Rotate `x` down towards `dir`. The pivot is the child on the other side.
    fn rotate(&mut self, x: NodeId, dir: Side) -> Option<NodeId> {
        let y = self.child(x, dir.opposite())?;

        // y's inner subtree crosses over to x.
        let inner = self.child(y, dir);
        self.arena[x].set_child(dir.opposite(), inner);
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(x);
        }

        let parent = self.arena[x].parent;
        self.arena[y].parent = parent;
        self.replace_child(parent, x, Some(y));

        self.arena[y].set_child(dir, Some(x));
        self.arena[x].parent = Some(y);
        Some(y)
    }

    /// Rotation issued by a fixup.
    ///
    /// # Panics
    ///
    /// If the pivot child is absent.
    pub(crate) fn rotate_for_fixup(&mut self, x: NodeId, dir: Side) -> NodeId {
        let pivot = match dir {
            Side::Left => self.rotate_left(x),
            Side::Right => self.rotate_right(x),
        };
        match pivot {
            Some(y) => y,
            None => panic!("rotate {dir} at {x}: no {} child to pivot on", dir.opposite()),
        }
    }
}
