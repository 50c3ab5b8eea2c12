use std::cmp::Ordering;

use crate::node::{Color, Node, NodeId, Side};
use crate::{InsertOutcome, Mutation, RbTree};

impl<K: Ord> RbTree<K> {
    /// Insert `key`.
    ///
    /// The first key of an empty tree becomes a black root. Any later key is
    /// attached as a red leaf and the tree is rebalanced. An existing key is
    /// reported as [`InsertOutcome::Duplicate`] and the tree is left as is.
    pub fn insert(&mut self, key: K) -> Mutation<InsertOutcome> {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            side = match key.cmp(&self.arena[id].key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Mutation::new(self.root, InsertOutcome::Duplicate),
            };
            parent = Some(id);
            cursor = self.child(id, side);
        }

        let z = match parent {
            None => {
                let z = self.arena.alloc(Node::new(key, Color::Black, None));
                self.root = Some(z);
                z
            }
            Some(p) => {
                let z = self.arena.alloc(Node::new(key, Color::Red, Some(p)));
                self.arena[p].set_child(side, Some(z));
                z
            }
        };
        self.len += 1;

        self.fixup_after_insert(z);
        Mutation::new(self.root, InsertOutcome::Inserted)
    }

    /// Repair a red-red violation between `z` and its parent.
    fn fixup_after_insert(&mut self, mut z: NodeId) {
        while let Some(mut p) = self.parent_of(z).filter(|&p| self.is_red(Some(p))) {
            // A red parent is never the root.
            let Some(g) = self.parent_of(p) else { break };
            let side = self.side_of(Some(p), g);
            let uncle = self.child(g, side.opposite());

            if self.is_red(uncle) {
                self.paint(Some(p), Color::Black);
                self.paint(uncle, Color::Black);
                self.paint(Some(g), Color::Red);
                z = g;
                continue;
            }

            if self.child(p, side.opposite()) == Some(z) {
                // Inner grandchild: turn it into an outer one.
                z = p;
                p = self.rotate_for_fixup(z, side);
            }

            self.paint(Some(p), Color::Black);
            self.paint(Some(g), Color::Red);
            self.rotate_for_fixup(g, side.opposite());
            break;
        }

        let root = self.root;
        self.paint(root, Color::Black);
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::assert_invariants;
    use crate::{Color, InsertOutcome, RbTree};

    fn shape(tree: &RbTree<i64>) -> Vec<(i64, Color, Option<i64>, Option<i64>)> {
        let mut out = Vec::new();
        let mut stack: Vec<_> = tree.root_ref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push((
                *node.key(),
                node.color(),
                node.left().map(|n| *n.key()),
                node.right().map(|n| *n.key()),
            ));
            stack.extend(node.right());
            stack.extend(node.left());
        }
        out
    }

    #[test]
    fn first_key_becomes_black_root() {
        let mut tree = RbTree::new();
        let m = tree.insert(7);
        assert_eq!(m.outcome, InsertOutcome::Inserted);
        let root = tree.root_ref().unwrap();
        assert_eq!(m.root, Some(root.id()));
        assert_eq!(*root.key(), 7);
        assert_eq!(root.color(), Color::Black);
        assert!(root.left().is_none() && root.right().is_none());
    }

    #[test]
    fn ascending_three_rotates_middle_to_root() {
        let mut tree = RbTree::new();
        for k in [10, 20, 30] {
            assert_eq!(tree.insert(k).outcome, InsertOutcome::Inserted);
        }
        assert_eq!(
            shape(&tree),
            vec![
                (20, Color::Black, Some(10), Some(30)),
                (10, Color::Red, None, None),
                (30, Color::Red, None, None),
            ]
        );
        assert_invariants(&tree);
    }

    #[test]
    fn red_uncle_recolors_and_keeps_root_black() {
        let mut tree: RbTree<i64> = [10, 20, 30].into_iter().collect();
        let _ = tree.insert(40);
        assert_eq!(
            shape(&tree),
            vec![
                (20, Color::Black, Some(10), Some(30)),
                (10, Color::Black, None, None),
                (30, Color::Black, None, Some(40)),
                (40, Color::Red, None, None),
            ]
        );
        assert_eq!(assert_invariants(&tree), 2);
    }

    #[test]
    fn ascending_five_has_black_height_two() {
        let tree: RbTree<i64> = [10, 20, 30, 40, 50].into_iter().collect();
        assert_eq!(assert_invariants(&tree), 2);
        assert_eq!(
            shape(&tree),
            vec![
                (20, Color::Black, Some(10), Some(40)),
                (10, Color::Black, None, None),
                (40, Color::Black, Some(30), Some(50)),
                (30, Color::Red, None, None),
                (50, Color::Red, None, None),
            ]
        );
    }

    #[test]
    fn inner_grandchild_takes_double_rotation() {
        // 30 <- 10 -> 20 is a left-right zig-zag.
        let tree: RbTree<i64> = [30, 10, 20].into_iter().collect();
        assert_eq!(
            shape(&tree),
            vec![
                (20, Color::Black, Some(10), Some(30)),
                (10, Color::Red, None, None),
                (30, Color::Red, None, None),
            ]
        );

        let mirrored: RbTree<i64> = [10, 30, 20].into_iter().collect();
        assert_eq!(shape(&mirrored), shape(&tree));
    }

    #[test]
    fn duplicate_leaves_tree_untouched() {
        let mut tree: RbTree<i64> = [10, 20, 30, 40, 50].into_iter().collect();
        let before = shape(&tree);
        let root = tree.root();

        let m = tree.insert(30);
        assert_eq!(m.outcome, InsertOutcome::Duplicate);
        assert_eq!(m.root, root);
        assert_eq!(shape(&tree), before);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn descending_inserts_stay_balanced() {
        let mut tree = RbTree::new();
        for k in (0..200).rev() {
            let _ = tree.insert(k);
            assert_invariants(&tree);
        }
        assert_eq!(tree.len(), 200);
    }
}
