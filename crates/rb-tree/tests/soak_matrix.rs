use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use rb_tree::{RbTree, TraverseOrder};

fn soak(seed: u64, rounds: usize, key_space: i64) {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut tree = RbTree::new();
    let mut model = BTreeSet::new();

    for round in 0..rounds {
        let key = rng.gen_range(0..key_space);
        if rng.gen_bool(0.6) {
            if model.insert(key) {
                tree.insert(key);
            }
        } else {
            assert_eq!(tree.delete(&key).is_ok(), model.remove(&key));
        }
        if let Err(err) = tree.assert_valid() {
            panic!("seed {seed}, round {round}: {err}");
        }
    }

    assert_eq!(
        tree.traverse(TraverseOrder::InOrder),
        model.iter().copied().collect::<Vec<_>>()
    );

    let remaining: Vec<i64> = model.iter().copied().collect();
    for key in remaining {
        tree.delete(&key).unwrap();
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
}

#[test]
fn soak_small_key_space_matrix() {
    for seed in 0..20 {
        soak(seed, 2_000, 64);
    }
}

#[test]
fn soak_large_key_space_matrix() {
    soak(0x5eed, 5_000, 1_000_000);
}
