use crate::error::RbTreeError;
use crate::node::RbNodeLike;
use crate::util::{first, next};

use super::is_red;

/// Checks every structural invariant of the tree rooted at `root`:
/// root is Black and parentless, parent links mirror child links, no red
/// node has a red child, black heights agree, and in-order keys are
/// strictly ascending under `comparator`.
pub fn assert_red_black_tree<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), RbTreeError>
where
    N: RbNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p().is_some() {
        return Err(RbTreeError::Invariant("root has parent"));
    }
    if !arena[root as usize].is_black() {
        return Err(RbTreeError::Invariant("root is not black"));
    }

    fn black_height<K, N>(arena: &[N], node: Option<u32>) -> Result<usize, RbTreeError>
    where
        N: RbNodeLike<K>,
    {
        let Some(node) = node else {
            return Ok(0);
        };

        let l = arena[node as usize].l();
        let r = arena[node as usize].r();

        if let Some(li) = l {
            if arena[li as usize].p() != Some(node) {
                return Err(RbTreeError::Invariant("broken parent link on left child"));
            }
        }
        if let Some(ri) = r {
            if arena[ri as usize].p() != Some(node) {
                return Err(RbTreeError::Invariant("broken parent link on right child"));
            }
        }

        if is_red(arena, Some(node)) && (is_red(arena, l) || is_red(arena, r)) {
            return Err(RbTreeError::Invariant("red node has red child"));
        }

        let lh = black_height(arena, l)?;
        let rh = black_height(arena, r)?;
        if lh != rh {
            return Err(RbTreeError::Invariant("black height mismatch"));
        }

        Ok(lh + usize::from(arena[node as usize].is_black()))
    }

    black_height(arena, Some(root))?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if comparator(arena[prev as usize].key(), arena[i as usize].key()) >= 0 {
                return Err(RbTreeError::Invariant("node order violated"));
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}
