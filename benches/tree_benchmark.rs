#[macro_use]
extern crate criterion;

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use grovedb_linked_merkle_tree::{Blake3PairHasher, MerkleTree, NodeValue};

/// A node value from an integer (for benchmarking).
fn leaf_from_u64(i: u64) -> NodeValue {
    NodeValue::from_u64(i)
}

fn prepare_leaves(count: u64) -> Vec<NodeValue> {
    (0..count).map(leaf_from_u64).collect()
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("linked tree construction");
        let inputs = [256u64, 4096, 65536];
        for input in inputs.iter() {
            let leaves = prepare_leaves(*input);
            group.bench_with_input(BenchmarkId::new("leaves", input), &leaves, |b, leaves| {
                b.iter(|| MerkleTree::from_leaves(black_box(leaves), &Blake3PairHasher).unwrap());
            });
        }
    }

    c.bench_function("linked tree gen proof", |b| {
        let leaves = prepare_leaves(65536);
        let tree = MerkleTree::from_leaves(&leaves, &Blake3PairHasher).unwrap();
        let mut position = 0usize;
        b.iter(|| {
            position = (position + 331) % leaves.len();
            tree.proof_at(black_box(position)).unwrap()
        });
    });

    c.bench_function("linked tree verify proof", |b| {
        let leaves = prepare_leaves(4096);
        let tree = MerkleTree::from_leaves(&leaves, &Blake3PairHasher).unwrap();
        let root = tree.root_value();
        let proof = tree.proof_at(1024).unwrap();
        b.iter(|| {
            proof
                .verify(black_box(&leaves[1024]), &root, &Blake3PairHasher)
                .unwrap()
        });
    });

    c.bench_function("linked tree storage round trip", |b| {
        let leaves = prepare_leaves(4096);
        let tree = MerkleTree::from_leaves(&leaves, &Blake3PairHasher).unwrap();
        b.iter(|| {
            let stored = tree.to_storage_string();
            MerkleTree::from_storage_string(black_box(&stored)).unwrap()
        });
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
