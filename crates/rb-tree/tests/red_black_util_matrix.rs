use rb_tree::red_black::{assert_red_black_tree, delete_node, insert, remove};
use rb_tree::util::{insertion_parent, search, size};
use rb_tree::{Node, RbNode};

fn rb_cmp(a: &i32, b: &i32) -> i32 {
    a.cmp(b) as i32
}

fn rb_key(node: &RbNode<i32>) -> &i32 {
    &node.k
}

fn insert_value(arena: &mut Vec<RbNode<i32>>, root: Option<u32>, value: i32) -> Option<u32> {
    arena.push(RbNode::new(value));
    let idx = (arena.len() - 1) as u32;
    let root = insert(arena, root, idx, &rb_cmp);
    if let Err(err) = assert_red_black_tree(arena, root, &rb_cmp) {
        panic!("invalid red-black tree after insert({value}): {err}");
    }
    root
}

fn delete_value(arena: &mut Vec<RbNode<i32>>, root: Option<u32>, value: i32) -> Option<u32> {
    if let Some(idx) = search(arena, root, &value, rb_key, rb_cmp) {
        let (root, removed) = remove(arena, root, idx);
        assert_eq!(removed.k, value);
        if let Err(err) = assert_red_black_tree(arena, root, &rb_cmp) {
            panic!("invalid red-black tree after delete({value}): {err}");
        }
        root
    } else {
        root
    }
}

#[test]
fn rb_util_insert_delete_various_numbers_matrix() {
    let mut arena = Vec::<RbNode<i32>>::new();
    let mut root = None;

    for value in [10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51] {
        root = insert_value(&mut arena, root, value);
    }
    assert_eq!(size(&arena, root), 13);

    root = delete_value(&mut arena, root, 100);
    assert_eq!(size(&arena, root), 12);

    root = delete_value(&mut arena, root, 33);
    root = delete_value(&mut arena, root, 33);
    assert_eq!(size(&arena, root), 11);

    root = delete_value(&mut arena, root, 10);
    assert_eq!(size(&arena, root), 10);

    root = delete_value(&mut arena, root, 60);
    assert_eq!(size(&arena, root), 9);

    root = delete_value(&mut arena, root, 22);
    assert_eq!(size(&arena, root), 8);
    assert_eq!(arena.len(), 8);
}

#[test]
fn rb_util_insertion_parent_matrix() {
    let mut arena = Vec::<RbNode<i32>>::new();
    assert_eq!(insertion_parent(&arena, None, &1, rb_key, rb_cmp), None);

    let mut root = None;
    for value in [20, 10, 30] {
        root = insert_value(&mut arena, root, value);
    }
    let parent = insertion_parent(&arena, root, &15, rb_key, rb_cmp).unwrap();
    assert_eq!(arena[parent as usize].k, 10);
    let parent = insertion_parent(&arena, root, &35, rb_key, rb_cmp).unwrap();
    assert_eq!(arena[parent as usize].k, 30);
    // Equal keys descend to the right.
    let parent = insertion_parent(&arena, root, &20, rb_key, rb_cmp).unwrap();
    assert_eq!(arena[parent as usize].k, 30);
}

#[test]
fn rb_util_search_from_subtree_matrix() {
    let mut arena = Vec::<RbNode<i32>>::new();
    let mut root = None;
    for value in [20, 10, 30, 5, 15] {
        root = insert_value(&mut arena, root, value);
    }
    let ten = search(&arena, root, &10, rb_key, rb_cmp).unwrap();
    let fifteen = search(&arena, Some(ten), &15, rb_key, rb_cmp);
    assert_eq!(fifteen.map(|i| arena[i as usize].k), Some(15));
    // 30 is not below 10.
    assert_eq!(search(&arena, Some(ten), &30, rb_key, rb_cmp), None);
    assert_eq!(search(&arena, root, &31, rb_key, rb_cmp), None);
}

#[test]
fn rb_util_delete_node_keeps_slot_detached_matrix() {
    let mut arena = Vec::<RbNode<i32>>::new();
    let mut root = None;
    for value in [2, 1, 3] {
        root = insert_value(&mut arena, root, value);
    }
    let one = search(&arena, root, &1, rb_key, rb_cmp).unwrap();
    root = delete_node(&mut arena, root, one);
    assert_eq!(arena.len(), 3);
    assert_eq!(arena[one as usize].p(), None);
    assert_eq!(size(&arena, root), 2);
    assert!(assert_red_black_tree(&arena, root, &rb_cmp).is_ok());
}

#[test]
fn rb_util_remove_relinks_moved_root_matrix() {
    let mut arena = Vec::<RbNode<i32>>::new();
    let mut root = None;
    for value in [1, 3, 2] {
        root = insert_value(&mut arena, root, value);
    }
    // 2 ends up as root in the last slot; freeing slot 0 moves it there.
    assert_eq!(root, Some(2));
    root = delete_value(&mut arena, root, 1);
    assert_eq!(arena.len(), 2);
    assert_eq!(root, Some(0));
    assert_eq!(arena[0].k, 2);
    assert_eq!(arena[1].p(), Some(0));

    root = delete_value(&mut arena, root, 2);
    root = delete_value(&mut arena, root, 3);
    assert_eq!(root, None);
    assert!(arena.is_empty());
}

#[test]
fn rb_util_detects_broken_invariants_matrix() {
    let mut arena = vec![RbNode::new(1), RbNode::new(2)];
    arena[0].r = Some(1);
    arena[1].p = Some(0);
    // Root left Red.
    assert!(assert_red_black_tree(&arena, Some(0), &rb_cmp).is_err());
    arena[0].c = rb_tree::Color::Black;
    assert!(assert_red_black_tree(&arena, Some(0), &rb_cmp).is_ok());
    arena[1].p = None;
    assert!(assert_red_black_tree(&arena, Some(0), &rb_cmp).is_err());
}
