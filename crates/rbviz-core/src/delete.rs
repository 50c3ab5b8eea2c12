use crate::node::{Color, NodeId};
use crate::{DeleteOutcome, Mutation, RbTree};

impl<K: Ord> RbTree<K> {
    /// Remove `key`.
    ///
    /// A node with two children is replaced by its in-order successor, which
    /// is relinked into the removed node's position (so every other node keeps
    /// its [`NodeId`]). A missing key is reported as
    /// [`DeleteOutcome::NotFound`] and the tree is left as is.
    pub fn delete(&mut self, key: &K) -> Mutation<DeleteOutcome> {
        let Some(z) = self.find(key) else {
            return Mutation::new(self.root, DeleteOutcome::NotFound);
        };

        let (z_left, z_right) = (self.arena[z].left, self.arena[z].right);
        let removed_color;
        // `x` moves into the vacated position; `x_parent` is where that
        // position hangs, needed when `x` is absent.
        let x;
        let x_parent;

        match (z_left, z_right) {
            (None, _) | (_, None) => {
                removed_color = self.arena[z].color;
                x = z_left.or(z_right);
                x_parent = self.parent_of(z);
                self.transplant(z, x);
            }
            (Some(left), Some(right)) => {
                let y = self.minimum(right);
                removed_color = self.arena[y].color;
                x = self.arena[y].right;

                if y == right {
                    x_parent = Some(y);
                } else {
                    x_parent = self.parent_of(y);
                    self.transplant(y, x);
                    self.arena[y].right = Some(right);
                    self.arena[right].parent = Some(y);
                }

                self.transplant(z, Some(y));
                self.arena[y].left = Some(left);
                self.arena[left].parent = Some(y);
                let z_color = self.arena[z].color;
                self.arena[y].color = z_color;
            }
        }

        self.arena.release(z);
        self.len -= 1;

        if removed_color.is_black() {
            self.fixup_after_delete(x, x_parent);
        }
        Mutation::new(self.root, DeleteOutcome::Deleted)
    }

    /// Put subtree `v` where `u` hangs. `u`'s own links are left for the
    /// caller to rewrite.
    fn transplant(&mut self, u: NodeId, v: Option<NodeId>) {
        let parent = self.parent_of(u);
        self.replace_child(parent, u, v);
        if let Some(v) = v {
            self.arena[v].parent = parent;
        }
    }

    /// Restore black-height after a black node left the position of `x`.
    ///
    /// `x` may be absent; `parent` then identifies the position.
    fn fixup_after_delete(&mut self, mut x: Option<NodeId>, mut parent: Option<NodeId>) {
        while x != self.root && self.is_black(x) {
            let Some(p) = parent else { break };
            let side = self.side_of(x, p);
            let mut w = self.child(p, side.opposite());

            if self.is_red(w) {
                self.paint(w, Color::Black);
                self.paint(Some(p), Color::Red);
                self.rotate_for_fixup(p, side);
                w = self.child(p, side.opposite());
            }

            // x carries one black less than its sibling's side, so the
            // sibling is a real node.
            let Some(mut s) = w else {
                panic!("black-height deficit at {p} with no sibling on the {} side", side.opposite());
            };

            let near = self.child(s, side);
            let far = self.child(s, side.opposite());
            if self.is_black(near) && self.is_black(far) {
                self.paint(Some(s), Color::Red);
                x = Some(p);
                parent = self.parent_of(p);
                continue;
            }

            if self.is_black(far) {
                self.paint(near, Color::Black);
                self.paint(Some(s), Color::Red);
                s = self.rotate_for_fixup(s, side.opposite());
            }

            let parent_color = self.arena[p].color;
            self.paint(Some(s), parent_color);
            self.paint(Some(p), Color::Black);
            let far = self.child(s, side.opposite());
            self.paint(far, Color::Black);
            self.rotate_for_fixup(p, side);
            x = self.root;
            parent = None;
        }

        self.paint(x, Color::Black);
    }
}
