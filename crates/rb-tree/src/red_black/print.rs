use std::fmt::{Debug, Display, Write};

use crate::node::RbNodeLike;
use crate::util::{traverse, TraverseOrder};

/// Debug dump of the subtree at `node`, one line per node.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: RbNodeLike<K>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let color = if n.is_black() { "black" } else { "red" };
            let left = print(arena, n.l(), &format!("{tab}  "));
            let right = print(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] {color} {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.key()
            )
        }
    }
}

/// Compact rendering of the keys in `order`.
///
/// Level order tags every key with its color (`<23b><12r>`); the other
/// orders list bare keys, each followed by a comma (`12,23,`).
pub fn render<K, N>(arena: &[N], root: Option<u32>, order: TraverseOrder) -> String
where
    K: Display,
    N: RbNodeLike<K>,
{
    let mut out = String::new();
    for i in traverse(arena, root, order) {
        let n = &arena[i as usize];
        // Writing into a String cannot fail.
        let _ = if order == TraverseOrder::LevelOrder {
            write!(out, "<{}{}>", n.key(), n.color().tag())
        } else {
            write!(out, "{},", n.key())
        };
    }
    out
}
