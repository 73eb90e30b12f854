use std::fmt;

use tracing::debug;

use crate::error::RbTreeError;
use crate::node::RbNode;
use crate::red_black;
use crate::types::{default_comparator, Color};
use crate::util::{first, height, last, next, search, traverse, TraverseOrder};

/// Ordered set of keys kept balanced by red-black coloring.
///
/// Nodes live in an internal arena; every public operation runs in
/// O(log n) and leaves all red-black invariants intact.
pub struct RbTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    root: Option<u32>,
    arena: Vec<RbNode<K>>,
    comparator: C,
}

impl<K> RbTree<K, fn(&K, &K) -> i32>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

    /// Empty tree with room for `capacity` keys before the arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: None,
            arena: Vec::with_capacity(capacity),
            comparator: default_comparator::<K>,
        }
    }
}

impl<K> Default for RbTree<K, fn(&K, &K) -> i32>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            arena: Vec::new(),
            comparator,
        }
    }

    /// Inserts `key`. Keys are expected to be distinct; an equal key is
    /// placed to the right of the existing one.
    pub fn insert(&mut self, key: K) {
        self.arena.push(RbNode::new(key));
        let idx = (self.arena.len() - 1) as u32;
        self.root = red_black::insert(&mut self.arena, self.root, idx, &self.comparator);
        debug!(len = self.arena.len(), "inserted key");
    }

    /// Removes `key`, or fails with [`RbTreeError::KeyNotFound`] leaving the
    /// tree untouched.
    pub fn delete(&mut self, key: &K) -> Result<(), RbTreeError> {
        let Some(idx) = self.find(key) else {
            debug!(len = self.arena.len(), "delete of missing key");
            return Err(RbTreeError::KeyNotFound);
        };
        let (root, _removed) = red_black::remove(&mut self.arena, self.root, idx);
        self.root = root;
        debug!(len = self.arena.len(), "deleted key");
        Ok(())
    }

    pub fn has_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    fn find(&self, key: &K) -> Option<u32> {
        search(&self.arena, self.root, key, |n| &n.k, &self.comparator)
    }

    /// Keys in the requested order, fully materialized.
    pub fn traverse(&self, order: TraverseOrder) -> Vec<K>
    where
        K: Clone,
    {
        traverse(&self.arena, self.root, order)
            .into_iter()
            .map(|i| self.arena[i as usize].k.clone())
            .collect()
    }

    /// Lazy ascending iterator.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            arena: &self.arena,
            curr: first(&self.arena, self.root),
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    /// Smallest key.
    pub fn first(&self) -> Option<&K> {
        first(&self.arena, self.root).map(|i| &self.arena[i as usize].k)
    }

    /// Largest key.
    pub fn last(&self) -> Option<&K> {
        last(&self.arena, self.root).map(|i| &self.arena[i as usize].k)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|i| &self.arena[i as usize].k)
    }

    /// Color of the node holding `key`.
    pub fn color_of(&self, key: &K) -> Option<Color> {
        self.find(key).map(|i| self.arena[i as usize].c)
    }

    /// See [`red_black::render`].
    pub fn render(&self, order: TraverseOrder) -> String
    where
        K: fmt::Display,
    {
        red_black::render(&self.arena, self.root, order)
    }

    pub fn print(&self) -> String
    where
        K: fmt::Debug,
    {
        red_black::print(&self.arena, self.root, "")
    }

    pub fn assert_valid(&self) -> Result<(), RbTreeError> {
        red_black::assert_red_black_tree(&self.arena, self.root, &self.comparator)
    }
}

impl<K, C> fmt::Display for RbTree<K, C>
where
    K: fmt::Display,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(TraverseOrder::LevelOrder))
    }
}

impl<K, C> Extend<K> for RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for RbTree<K, fn(&K, &K) -> i32>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Ascending iterator over the keys of an [`RbTree`].
pub struct Iter<'a, K> {
    arena: &'a [RbNode<K>],
    curr: Option<u32>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = next(self.arena, i);
        Some(&self.arena[i as usize].k)
    }
}

impl<'a, K, C> IntoIterator for &'a RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
