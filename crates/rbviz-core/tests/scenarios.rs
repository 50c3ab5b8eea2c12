//! Worked scenarios with exact expected shapes.

use rbviz_core::{Color, DeleteOutcome, RbTree, SearchOutcome};
use rbviz_testkit::scenarios::{ASCENDING_FIVE, ASCENDING_THREE, ZIGZAG};
use rbviz_testkit::tree_of;
use rbviz_validate::{Shape, TreeValidator};

#[test]
fn scenario_ascending_three() {
    let tree = tree_of(&ASCENDING_THREE);
    assert_eq!(
        Shape::of(&tree),
        Some(Shape::black(20).with_left(Shape::red(10)).with_right(Shape::red(30)))
    );
}

#[test]
fn scenario_delete_red_leaf() {
    let mut tree = tree_of(&ASCENDING_THREE);
    assert_eq!(tree.delete(&10).outcome, DeleteOutcome::Deleted);
    assert_eq!(
        Shape::of(&tree),
        Some(Shape::black(20).with_right(Shape::red(30)))
    );
}

#[test]
fn scenario_ascending_five() {
    let tree = tree_of(&ASCENDING_FIVE);
    let report = TreeValidator::validate(&tree).unwrap();
    assert_eq!(report.black_height, 2);
    assert_eq!(report.len, 5);
}

#[test]
fn scenario_empty_tree_queries() {
    let mut tree: RbTree<i64> = RbTree::new();
    assert_eq!(tree.search(&5), SearchOutcome::NotFound);
    assert_eq!(tree.delete(&5).outcome, DeleteOutcome::NotFound);
    assert!(tree.is_empty());
}

#[test]
fn scenario_zigzag_mirrors() {
    let mut tree = tree_of(&ZIGZAG);
    assert!(TreeValidator::violations(&tree).is_empty());
    for k in [20, 80, 50, 25] {
        assert_eq!(tree.delete(&k).outcome, DeleteOutcome::Deleted);
        assert!(TreeValidator::violations(&tree).is_empty(), "after deleting {k}");
    }
    assert_eq!(
        tree.keys().copied().collect::<Vec<_>>(),
        vec![10, 30, 70, 75, 90]
    );
    assert_eq!(tree.root_ref().map(|r| r.color()), Some(Color::Black));
}
