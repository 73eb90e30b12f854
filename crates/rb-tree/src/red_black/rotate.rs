//! Rotation and transplant primitives.
//!
//! Each function takes the current root and returns the (possibly new) root,
//! like the rest of the arena utilities.

use crate::types::Node;
use crate::util::{get_l, get_p, get_r, set_l, set_p, set_r};

/// Points `p`'s link that currently holds `old` at `new`. With no parent,
/// `new` becomes the root.
#[inline]
fn replace_child<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    p: Option<u32>,
    old: u32,
    new: Option<u32>,
) -> Option<u32> {
    match p {
        None => new,
        Some(p) => {
            if get_l(arena, p) == Some(old) {
                set_l(arena, p, new);
            } else {
                set_r(arena, p, new);
            }
            root
        }
    }
}

/// Rotates `x` down to the left; its right child `y` takes its place.
///
/// Panics if `x` has no right child.
pub fn rotate_left<N: Node>(arena: &mut [N], root: Option<u32>, x: u32) -> Option<u32> {
    let y = get_r(arena, x).expect("rotate_left requires a right child");
    let yl = get_l(arena, y);

    set_r(arena, x, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(x));
    }

    let p = get_p(arena, x);
    set_p(arena, y, p);
    let root = replace_child(arena, root, p, x, Some(y));

    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

/// Rotates `x` down to the right; its left child `y` takes its place.
///
/// Panics if `x` has no left child.
pub fn rotate_right<N: Node>(arena: &mut [N], root: Option<u32>, x: u32) -> Option<u32> {
    let y = get_l(arena, x).expect("rotate_right requires a left child");
    let yr = get_r(arena, y);

    set_l(arena, x, yr);
    if let Some(yr) = yr {
        set_p(arena, yr, Some(x));
    }

    let p = get_p(arena, x);
    set_p(arena, y, p);
    let root = replace_child(arena, root, p, x, Some(y));

    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

/// Puts `new` where `old` hangs (under `old`'s parent, or as root).
///
/// `old`'s own links are left untouched.
pub fn transplant<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    old: u32,
    new: Option<u32>,
) -> Option<u32> {
    let p = get_p(arena, old);
    let root = replace_child(arena, root, p, old, new);
    if let Some(new) = new {
        set_p(arena, new, p);
    }
    root
}
