//! Pointer-linked binary Merkle tree over a fixed set of hashed leaf values.
//!
//! Unlike the dense fixed-sized tree, nodes here are explicitly linked:
//! every node carries index-based references to its children and a
//! back-reference to its parent, all stored in a flat arena owned by the
//! tree. The hash at each internal node is supplied by the caller through
//! the [`PairHasher`] collaborator:
//!
//! `parent.value = hash_pair(left.value, right.value)`
//!
//! Left/right order is never commuted, so the root commits to the exact
//! leaf sequence. The leaf count must be a power of two; an odd node count
//! at any level is rejected rather than silently dropped or padded.
//!
//! A tree is built once from a finalized leaf sequence (or re-read from its
//! storage string) and is immutable from then on. Inclusion proofs are
//! sibling paths: values and left/right markers in leaf-to-root order,
//! verifiable without the tree by recomputing the root.

#![warn(missing_docs)]

mod error;
mod hash;
mod node;
mod proof;
mod storage;
mod tree;
mod value;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
pub use hash::{Blake3PairHasher, PairHasher};
pub use node::TreeNode;
pub use proof::{MerkleProof, Side};
pub use tree::MerkleTree;
pub use value::{NodeValue, VALUE_WIDTH};
