//! Derived tree operations, checked on both bundled hosts.
//!
//! Fixture tree used throughout:
//!
//! ```text
//!     A
//!    / \
//!   B   C
//!  / \
//! D   E
//! ```

use generational_arena::Index;
use rstest::{fixture, rstest};

use simple_tree::render::node_label;
use simple_tree::util::testing;
use simple_tree::{RcNode, SimpleTree, TreeArena};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

struct RcTree {
    a: RcNode<String>,
    b: RcNode<String>,
    c: RcNode<String>,
    d: RcNode<String>,
    e: RcNode<String>,
}

#[fixture]
fn rc_tree() -> RcTree {
    let a = RcNode::new("A".to_string());
    let b = a.add_child("B".to_string());
    let c = a.add_child("C".to_string());
    let d = b.add_child("D".to_string());
    let e = b.add_child("E".to_string());
    RcTree { a, b, c, d, e }
}

#[fixture]
fn arena_tree() -> (TreeArena<String>, [Index; 5]) {
    let mut arena = TreeArena::new();
    let a = arena.insert_node("A".to_string(), None).unwrap();
    let b = arena.insert_node("B".to_string(), Some(a)).unwrap();
    let c = arena.insert_node("C".to_string(), Some(a)).unwrap();
    let d = arena.insert_node("D".to_string(), Some(b)).unwrap();
    let e = arena.insert_node("E".to_string(), Some(b)).unwrap();
    (arena, [a, b, c, d, e])
}

fn labels<N: SimpleTree>(nodes: &[N]) -> Vec<String> {
    nodes.iter().map(node_label).collect()
}

fn label_of<N: SimpleTree>(node: Option<N>) -> Option<String> {
    node.as_ref().map(node_label)
}

/// Every expectation of the A/B/C/D/E scenario, for any host.
fn assert_scenario<N: SimpleTree>(a: &N, b: &N, c: &N, d: &N, e: &N) {
    assert_eq!(a.height(), 3);
    assert_eq!(b.height(), 2);
    assert_eq!(d.height(), 1);

    assert_eq!(labels(&a.descendants()), ["B", "D", "E", "C"]);
    assert_eq!(labels(&a.leaves()), ["D", "E", "C"]);

    assert_eq!(labels(&d.siblings()), ["E"]);
    assert_eq!(labels(&b.siblings()), ["C"]);
    assert!(a.siblings().is_empty());

    assert_eq!(labels(&d.family()), ["B", "E"]);
    assert_eq!(labels(&a.family()), ["B", "D", "E", "C"]);

    assert_eq!(label_of(d.grandparent()).as_deref(), Some("A"));
    assert_eq!(label_of(b.grandparent()), None);
    assert_eq!(label_of(a.grandparent()), None);

    assert!(c.is_leaf() && e.is_leaf() && d.is_leaf());
    assert!(a.is_root());
}

#[rstest]
fn given_rc_tree_when_querying_then_matches_scenario(rc_tree: RcTree) {
    let RcTree { a, b, c, d, e } = &rc_tree;
    assert_scenario(a, b, c, d, e);
}

#[rstest]
fn given_arena_tree_when_querying_then_matches_scenario(arena_tree: (TreeArena<String>, [Index; 5])) {
    let (arena, [a, b, c, d, e]) = arena_tree;
    let node = |idx| arena.node(idx).unwrap();
    assert_scenario(&node(a), &node(b), &node(c), &node(d), &node(e));
}

// ============================================================
// Classification
// ============================================================

#[rstest]
fn given_any_node_when_classifying_then_predicates_are_consistent(rc_tree: RcTree) {
    for node in [&rc_tree.a, &rc_tree.b, &rc_tree.c, &rc_tree.d, &rc_tree.e] {
        assert_eq!(node.is_root(), !node.has_parent());
        assert_eq!(node.is_leaf(), !node.has_children());
    }
    assert!(rc_tree.b.has_parent());
    assert!(rc_tree.b.has_children());
    assert!(!rc_tree.a.has_parent());
}

#[rstest]
fn given_single_node_when_querying_then_everything_is_empty() {
    let lone = RcNode::new("lone".to_string());

    assert!(lone.is_root());
    assert!(lone.is_leaf());
    assert_eq!(lone.height(), 1);
    assert!(lone.descendants().is_empty());
    assert!(lone.leaves().is_empty());
    assert!(lone.siblings().is_empty());
    assert!(lone.family().is_empty());
    assert!(lone.grandparent().is_none());
}

// ============================================================
// Structural queries
// ============================================================

#[rstest]
fn given_inner_node_when_computing_height_then_one_more_than_tallest_child(rc_tree: RcTree) {
    for node in [&rc_tree.a, &rc_tree.b] {
        let tallest = node.children().iter().map(|c| c.height()).max().unwrap();
        assert_eq!(node.height(), 1 + tallest);
    }
}

#[rstest]
fn given_leaf_when_asking_leaves_then_excludes_itself(rc_tree: RcTree) {
    assert!(rc_tree.c.is_leaf());
    assert!(rc_tree.c.leaves().is_empty());
}

#[rstest]
fn given_subtree_when_listing_descendants_then_no_node_repeats(rc_tree: RcTree) {
    let descendants = rc_tree.a.descendants();
    for (i, x) in descendants.iter().enumerate() {
        for y in &descendants[i + 1..] {
            assert!(!x.same_node(y));
        }
    }
    assert_eq!(descendants.len(), 4);
}

#[rstest]
fn given_subtree_when_listing_leaves_then_all_are_leaves(rc_tree: RcTree) {
    assert!(rc_tree.a.leaves().iter().all(|leaf| leaf.is_leaf()));
    assert_eq!(labels(&rc_tree.b.leaves()), ["D", "E"]);
}

#[rstest]
fn given_non_root_when_computing_family_then_parent_plus_its_descendants_without_self(
    rc_tree: RcTree,
) {
    let parent = rc_tree.b.parent().unwrap();
    let mut expected = vec![parent.clone()];
    expected.extend(parent.descendants());
    expected.retain(|n| !n.same_node(&rc_tree.b));

    assert_eq!(labels(&rc_tree.b.family()), labels(&expected));
    assert_eq!(labels(&rc_tree.b.family()), ["A", "D", "E", "C"]);
}

#[rstest]
fn given_root_when_computing_family_then_equals_descendants(rc_tree: RcTree) {
    assert_eq!(labels(&rc_tree.a.family()), labels(&rc_tree.a.descendants()));
}

#[rstest]
fn given_deep_node_when_walking_up_then_ancestors_root_and_level(rc_tree: RcTree) {
    assert_eq!(labels(&rc_tree.d.ancestors()), ["B", "A"]);
    assert!(rc_tree.d.root().same_node(&rc_tree.a));
    assert!(rc_tree.a.root().same_node(&rc_tree.a));
    assert_eq!(rc_tree.d.level(), 2);
    assert_eq!(rc_tree.a.level(), 0);
}

#[rstest]
fn given_structure_change_when_querying_again_then_result_reflects_change(rc_tree: RcTree) {
    assert_eq!(rc_tree.a.height(), 3);
    rc_tree.e.add_child("F".to_string());
    assert_eq!(rc_tree.a.height(), 4);
    assert_eq!(labels(&rc_tree.a.leaves()), ["D", "F", "C"]);
}

// ============================================================
// Identity
// ============================================================

#[rstest]
fn given_siblings_with_equal_payloads_when_excluding_self_then_keeps_twin() {
    let root = RcNode::new("root".to_string());
    let first = root.add_child("twin".to_string());
    let second = root.add_child("twin".to_string());

    let siblings = first.siblings();
    assert_eq!(siblings.len(), 1);
    assert!(siblings[0].same_node(&second));

    let family = first.family();
    assert_eq!(labels(&family), ["root", "twin"]);
    assert!(family[1].same_node(&second));
}
