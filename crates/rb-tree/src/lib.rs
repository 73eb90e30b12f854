//! Arena-based red-black tree.
//!
//! Nodes are stored in a `Vec` and linked through `Option<u32>` indices:
//! children are owned by position in the tree, while the parent link is a
//! plain index used for upward walks during rebalancing. An absent child
//! counts as Black; there is no sentinel node.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] link trait, [`Color`] |
//! [`node`] | [`RbNode`] and the [`RbNodeLike`] color trait |
//! [`util`] | locator (`insertion_parent`, `search`), `first` / `next`, traversals |
//! [`red_black`] | rotations, transplant, insertion and deletion fixups, validation |
//! [`tree`] | [`RbTree`], the owning ordered-set facade |
//!
//! ```
//! use rb_tree::{RbTree, TraverseOrder};
//!
//! let mut tree: RbTree<i32> = [23, 12, 40, 13].into_iter().collect();
//! assert_eq!(tree.to_string(), "<23b><12b><40b><13r>");
//!
//! tree.delete(&12).unwrap();
//! assert_eq!(tree.traverse(TraverseOrder::InOrder), vec![13, 23, 40]);
//! assert!(tree.delete(&12).is_err());
//! ```

pub mod error;
pub mod node;
pub mod red_black;
pub mod tree;
pub mod types;
pub mod util;

pub use error::RbTreeError;
pub use node::{RbNode, RbNodeLike};
pub use tree::{Iter, RbTree};
pub use types::{default_comparator, Color, Node};
pub use util::TraverseOrder;
