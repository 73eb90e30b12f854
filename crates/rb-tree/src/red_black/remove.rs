use tracing::trace;

use crate::node::RbNodeLike;
use crate::types::Color;
use crate::util::{first, get_l, get_p, get_r, set_l, set_p, set_r};

use super::rotate::{rotate_left, rotate_right, transplant};
use super::{color, is_black, is_red, set_color};

/// Removes node `n` from the tree and frees its arena slot.
///
/// Returns the new root and the removed node. The last arena slot is moved
/// into the freed one, so indices of other nodes held by the caller may be
/// invalidated.
pub fn remove<K, N>(arena: &mut Vec<N>, root: Option<u32>, n: u32) -> (Option<u32>, N)
where
    N: RbNodeLike<K>,
{
    let root = delete_node(arena, root, n);
    release(arena, root, n)
}

/// Unlinks node `z` and rebalances. `z` stays in the arena, fully detached.
pub fn delete_node<K, N>(arena: &mut [N], mut root: Option<u32>, z: u32) -> Option<u32>
where
    N: RbNodeLike<K>,
{
    let mut removed_color = color(arena, z);
    let x: Option<u32>;
    let x_parent: Option<u32>;

    match (get_l(arena, z), get_r(arena, z)) {
        (None, r) => {
            x = r;
            x_parent = get_p(arena, z);
            root = transplant(arena, root, z, r);
        }
        (l, None) => {
            x = l;
            x_parent = get_p(arena, z);
            root = transplant(arena, root, z, l);
        }
        (Some(l), Some(r)) => {
            let min = first(arena, Some(r)).expect("right subtree is non-empty");
            removed_color = color(arena, min);
            x = get_r(arena, min);
            if get_p(arena, min) == Some(z) {
                x_parent = Some(min);
            } else {
                x_parent = get_p(arena, min);
                root = transplant(arena, root, min, x);
                set_r(arena, min, Some(r));
                set_p(arena, r, Some(min));
            }
            root = transplant(arena, root, z, Some(min));
            set_l(arena, min, Some(l));
            set_p(arena, l, Some(min));
            let z_color = color(arena, z);
            set_color(arena, min, z_color);
        }
    }

    set_p(arena, z, None);
    set_l(arena, z, None);
    set_r(arena, z, None);

    if removed_color == Color::Black {
        root = delete_fixup(arena, root, x, x_parent);
    }
    root
}

/// Restores the red-black properties after a black unit was removed from the
/// position now held by `x` (absent positions count as Black). `x_parent` is
/// the parent of that position; it is tracked explicitly because `x` may be
/// absent.
fn delete_fixup<K, N>(
    arena: &mut [N],
    mut root: Option<u32>,
    mut x: Option<u32>,
    mut x_parent: Option<u32>,
) -> Option<u32>
where
    N: RbNodeLike<K>,
{
    while x != root && is_black(arena, x) {
        let p = x_parent.expect("doubly black position below the root has a parent");

        if get_l(arena, p) == x {
            let mut s = get_r(arena, p).expect("doubly black position has a sibling");
            if is_red(arena, Some(s)) {
                trace!(case = "red_sibling", parent = p, sibling = s, "delete fixup");
                set_color(arena, s, Color::Black);
                set_color(arena, p, Color::Red);
                root = rotate_left(arena, root, p);
                s = get_r(arena, p).expect("sibling after rotation");
            }

            if is_black(arena, get_l(arena, s)) && is_black(arena, get_r(arena, s)) {
                trace!(case = "black_nephews", parent = p, sibling = s, "delete fixup");
                set_color(arena, s, Color::Red);
                x = Some(p);
                x_parent = get_p(arena, p);
                continue;
            }

            if is_black(arena, get_r(arena, s)) {
                trace!(case = "near_nephew", parent = p, sibling = s, "delete fixup");
                let near = get_l(arena, s).expect("near nephew is red");
                set_color(arena, near, Color::Black);
                set_color(arena, s, Color::Red);
                root = rotate_right(arena, root, s);
                s = get_r(arena, p).expect("sibling after rotation");
            }

            trace!(case = "far_nephew", parent = p, sibling = s, "delete fixup");
            let parent_color = color(arena, p);
            set_color(arena, s, parent_color);
            set_color(arena, p, Color::Black);
            let far = get_r(arena, s).expect("far nephew is red");
            set_color(arena, far, Color::Black);
            root = rotate_left(arena, root, p);
        } else {
            let mut s = get_l(arena, p).expect("doubly black position has a sibling");
            if is_red(arena, Some(s)) {
                trace!(case = "red_sibling", parent = p, sibling = s, "delete fixup");
                set_color(arena, s, Color::Black);
                set_color(arena, p, Color::Red);
                root = rotate_right(arena, root, p);
                s = get_l(arena, p).expect("sibling after rotation");
            }

            if is_black(arena, get_l(arena, s)) && is_black(arena, get_r(arena, s)) {
                trace!(case = "black_nephews", parent = p, sibling = s, "delete fixup");
                set_color(arena, s, Color::Red);
                x = Some(p);
                x_parent = get_p(arena, p);
                continue;
            }

            if is_black(arena, get_l(arena, s)) {
                trace!(case = "near_nephew", parent = p, sibling = s, "delete fixup");
                let near = get_r(arena, s).expect("near nephew is red");
                set_color(arena, near, Color::Black);
                set_color(arena, s, Color::Red);
                root = rotate_left(arena, root, s);
                s = get_l(arena, p).expect("sibling after rotation");
            }

            trace!(case = "far_nephew", parent = p, sibling = s, "delete fixup");
            let parent_color = color(arena, p);
            set_color(arena, s, parent_color);
            set_color(arena, p, Color::Black);
            let far = get_l(arena, s).expect("far nephew is red");
            set_color(arena, far, Color::Black);
            root = rotate_right(arena, root, p);
        }

        x = root;
        x_parent = None;
    }

    if let Some(x) = x {
        set_color(arena, x, Color::Black);
    }
    root
}

/// Frees the slot of the detached node `n` by swap-removing it and relinking
/// the node that moved into the slot.
fn release<K, N>(arena: &mut Vec<N>, mut root: Option<u32>, n: u32) -> (Option<u32>, N)
where
    N: RbNodeLike<K>,
{
    let moved = (arena.len() - 1) as u32;
    let removed = arena.swap_remove(n as usize);
    if moved == n {
        return (root, removed);
    }

    match get_p(arena, n) {
        Some(p) => {
            if get_l(arena, p) == Some(moved) {
                set_l(arena, p, Some(n));
            } else {
                set_r(arena, p, Some(n));
            }
        }
        None => root = Some(n),
    }
    if let Some(l) = get_l(arena, n) {
        set_p(arena, l, Some(n));
    }
    if let Some(r) = get_r(arena, n) {
        set_p(arena, r, Some(n));
    }
    (root, removed)
}
