use crate::types::{Color, Node};

/// Arena node of a red-black tree.
#[derive(Clone, Debug)]
pub struct RbNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub c: Color,
}

impl<K> RbNode<K> {
    /// New nodes start Red and detached.
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            c: Color::Red,
        }
    }
}

impl<K> Node for RbNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

/// Red-black specific node behavior.
pub trait RbNodeLike<K>: Node {
    fn key(&self) -> &K;
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn is_black(&self) -> bool {
        self.color() == Color::Black
    }
}

impl<K> RbNodeLike<K> for RbNode<K> {
    fn key(&self) -> &K {
        &self.k
    }

    fn color(&self) -> Color {
        self.c
    }

    fn set_color(&mut self, color: Color) {
        self.c = color;
    }
}
