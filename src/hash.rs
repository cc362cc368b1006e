//! The hash collaborator seam.
//!
//! The tree never hashes on its own: every internal value comes from a
//! [`PairHasher`] the caller constructs up front and passes into
//! construction and verification. The function must be deterministic and
//! order-sensitive; `hash_pair(a, b)` and `hash_pair(b, a)` are different
//! commitments.

use crate::{NodeValue, Result};

/// A binary compression function over node values.
///
/// Implementations must be deterministic, order-sensitive, and free of
/// expected collisions over the input domain. Backends are initialized
/// explicitly by the caller before construction begins; a failed call
/// aborts the whole operation it was part of, surfacing as
/// [`Error::HashBackend`](crate::Error::HashBackend) or whatever error the
/// backend maps to it.
pub trait PairHasher {
    /// Compress the ordered pair `(left, right)` into one value.
    fn hash_pair(&self, left: &NodeValue, right: &NodeValue) -> Result<NodeValue>;
}

/// Stock backend: `blake3(left_be || right_be)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Blake3PairHasher;

impl PairHasher for Blake3PairHasher {
    fn hash_pair(&self, left: &NodeValue, right: &NodeValue) -> Result<NodeValue> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&left.to_be_bytes());
        hasher.update(&right.to_be_bytes());
        Ok(NodeValue::from_be_bytes(*hasher.finalize().as_bytes()))
    }
}
