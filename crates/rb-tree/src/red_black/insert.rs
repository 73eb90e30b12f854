use tracing::trace;

use crate::node::RbNodeLike;
use crate::types::Color;
use crate::util::{get_l, get_p, get_r, insertion_parent, set_l, set_p, set_r};

use super::rotate::{rotate_left, rotate_right};
use super::{is_red, set_color};

/// Attaches the detached node `n` below its BST insertion parent and
/// rebalances. Returns the new root.
pub fn insert<K, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: RbNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let key = arena[n as usize].key();
    let Some(p) = insertion_parent(arena, root, key, |x| x.key(), comparator) else {
        set_p(arena, n, None);
        set_color(arena, n, Color::Black);
        return Some(n);
    };
    let go_left = comparator(key, arena[p as usize].key()) < 0;

    set_p(arena, n, Some(p));
    if go_left {
        set_l(arena, p, Some(n));
    } else {
        set_r(arena, p, Some(n));
    }
    insert_fixup(arena, root, n)
}

/// Restores the red-black properties after a red leaf `n` was attached.
///
/// The only property that may be broken on entry is "a red node has no red
/// child", at the `n`–parent edge.
fn insert_fixup<K, N>(arena: &mut [N], mut root: Option<u32>, mut n: u32) -> Option<u32>
where
    N: RbNodeLike<K>,
{
    while let Some(mut p) = get_p(arena, n).filter(|&p| is_red(arena, Some(p))) {
        let g = get_p(arena, p).expect("red parent always has a parent");
        let parent_is_left = get_l(arena, g) == Some(p);
        let uncle = if parent_is_left {
            get_r(arena, g)
        } else {
            get_l(arena, g)
        };

        if let Some(u) = uncle.filter(|&u| is_red(arena, Some(u))) {
            trace!(case = "red_uncle", node = n, parent = p, uncle = u, "insert fixup");
            set_color(arena, p, Color::Black);
            set_color(arena, u, Color::Black);
            set_color(arena, g, Color::Red);
            n = g;
            continue;
        }

        if parent_is_left {
            if get_r(arena, p) == Some(n) {
                trace!(case = "triangle", node = n, parent = p, "insert fixup");
                root = rotate_left(arena, root, p);
                n = p;
                p = get_p(arena, n).expect("rotated node has a parent");
            }
            trace!(case = "line", node = n, parent = p, grandparent = g, "insert fixup");
            set_color(arena, p, Color::Black);
            set_color(arena, g, Color::Red);
            root = rotate_right(arena, root, g);
        } else {
            if get_l(arena, p) == Some(n) {
                trace!(case = "triangle", node = n, parent = p, "insert fixup");
                root = rotate_right(arena, root, p);
                n = p;
                p = get_p(arena, n).expect("rotated node has a parent");
            }
            trace!(case = "line", node = n, parent = p, grandparent = g, "insert fixup");
            set_color(arena, p, Color::Black);
            set_color(arena, g, Color::Red);
            root = rotate_left(arena, root, g);
        }
        break;
    }

    let r = root.expect("tree is non-empty after insertion");
    set_color(arena, r, Color::Black);
    root
}
