use std::collections::VecDeque;

use crate::types::Node;

use super::{get_l, get_r};

/// Order in which [`traverse`] visits nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraverseOrder {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Ascending key order.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
    /// Breadth-first, left to right within each level.
    #[default]
    LevelOrder,
}

/// Collects node indices under `root` in the requested order.
pub fn traverse<N: Node>(arena: &[N], root: Option<u32>, order: TraverseOrder) -> Vec<u32> {
    let mut out = Vec::new();
    match order {
        TraverseOrder::PreOrder => pre_order(arena, root, &mut out),
        TraverseOrder::InOrder => in_order(arena, root, &mut out),
        TraverseOrder::PostOrder => post_order(arena, root, &mut out),
        TraverseOrder::LevelOrder => level_order(arena, root, &mut out),
    }
    out
}

fn pre_order<N: Node>(arena: &[N], node: Option<u32>, out: &mut Vec<u32>) {
    if let Some(i) = node {
        out.push(i);
        pre_order(arena, get_l(arena, i), out);
        pre_order(arena, get_r(arena, i), out);
    }
}

fn in_order<N: Node>(arena: &[N], node: Option<u32>, out: &mut Vec<u32>) {
    if let Some(i) = node {
        in_order(arena, get_l(arena, i), out);
        out.push(i);
        in_order(arena, get_r(arena, i), out);
    }
}

fn post_order<N: Node>(arena: &[N], node: Option<u32>, out: &mut Vec<u32>) {
    if let Some(i) = node {
        post_order(arena, get_l(arena, i), out);
        post_order(arena, get_r(arena, i), out);
        out.push(i);
    }
}

fn level_order<N: Node>(arena: &[N], root: Option<u32>, out: &mut Vec<u32>) {
    let mut queue: VecDeque<u32> = root.into_iter().collect();
    while let Some(i) = queue.pop_front() {
        out.push(i);
        queue.extend(get_l(arena, i));
        queue.extend(get_r(arena, i));
    }
}
