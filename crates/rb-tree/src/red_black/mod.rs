//! Red-black balancing engine over an arena of [`RbNodeLike`] nodes.
//!
//! Absent children are Black; there is no materialized sentinel node.

pub mod insert;
pub mod print;
pub mod remove;
pub mod rotate;
pub mod validate;

use crate::node::RbNodeLike;
use crate::types::Color;

pub use insert::insert;
pub use print::{print, render};
pub use remove::{delete_node, remove};
pub use rotate::{rotate_left, rotate_right, transplant};
pub use validate::assert_red_black_tree;

#[inline]
pub(crate) fn color<K, N>(arena: &[N], i: u32) -> Color
where
    N: RbNodeLike<K>,
{
    arena[i as usize].color()
}

#[inline]
pub(crate) fn set_color<K, N>(arena: &mut [N], i: u32, c: Color)
where
    N: RbNodeLike<K>,
{
    arena[i as usize].set_color(c);
}

/// Absent nodes count as Black.
#[inline]
pub(crate) fn is_black<K, N>(arena: &[N], node: Option<u32>) -> bool
where
    N: RbNodeLike<K>,
{
    node.map_or(true, |i| arena[i as usize].is_black())
}

#[inline]
pub(crate) fn is_red<K, N>(arena: &[N], node: Option<u32>) -> bool
where
    N: RbNodeLike<K>,
{
    !is_black(arena, node)
}
