//! Node link and color definitions.
//!
//! Nodes are stored in a [`Vec`]-backed arena and every link is an
//! `Option<u32>` index into it. All tree-manipulation functions take the
//! arena as `&mut [N]` (or `&mut Vec<N>` when they free slots) and work with
//! indices. `None` stands for an absent child, which counts as Black.

/// Binary tree links (`p`, `l`, `r`).
///
/// `p` is a lookup-only back-reference: it never owns the parent and is
/// never used to free or duplicate a node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Node color tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Single-letter tag used by the colored rendering (`b` / `r`).
    pub fn tag(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Black => 'b',
        }
    }
}

/// Default comparator over [`Ord`] keys.
///
/// Comparators return a negative, zero or positive number.
pub fn default_comparator<K: Ord>(a: &K, b: &K) -> i32 {
    a.cmp(b) as i32
}
