//! Inclusion proof data model.
//!
//! A proof is the sibling path of one leaf: values and left/right markers
//! in leaf-to-root order, excluding the root itself. It is the hand-off
//! artifact to external proving pipelines, which receive it together with
//! the tree's root value.

use bincode::{Decode, Encode};

use crate::{Error, NodeValue, Result};

/// Decode size limit for proofs coming in over the wire.
const MAX_PROOF_BYTES: usize = 16 * 1024 * 1024; // 16MB

/// Which side the proved node occupied at one ascent step.
///
/// The bit refers to the PROVED node, not the sibling: `Left` (bit 0)
/// means the node was the left child and its recorded sibling sits on the
/// right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum Side {
    /// The proved node was the left child.
    Left,
    /// The proved node was the right child.
    Right,
}

impl Side {
    /// The direction bit: 0 for `Left`, 1 for `Right`.
    pub fn bit(&self) -> u8 {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// An inclusion proof for a single leaf.
///
/// `values[i]` is the sibling value at ascent step `i` and `indices[i]`
/// the side the proved node occupied there; both run leaf-to-root and
/// have length equal to the leaf's depth.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MerkleProof {
    /// Sibling values, leaf level first, root excluded.
    pub values: Vec<NodeValue>,
    /// Side of the proved node at each step, parallel to `values`.
    pub indices: Vec<Side>,
}

impl MerkleProof {
    /// Number of ascent steps, equal to the proved leaf's depth.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the proof is empty (the proved leaf is itself the root).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| Error::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// Validates that the sibling and side sequences are parallel.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<MAX_PROOF_BYTES>();
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| Error::InvalidProof(format!("decode error: {}", e)))?;
        if proof.values.len() != proof.indices.len() {
            return Err(Error::InvalidProof(format!(
                "{} sibling values but {} side markers",
                proof.values.len(),
                proof.indices.len()
            )));
        }
        Ok(proof)
    }
}
