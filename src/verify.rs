//! Proof verification for the linked Merkle tree.
//!
//! Pure function — no tree required. Folds the sibling path back up to a
//! root value and compares it to the expected root. A `Side::Left` step
//! hashes `(current, sibling)`, a `Side::Right` step `(sibling, current)`,
//! preserving the order the tree was built with.

use crate::{Error, MerkleProof, NodeValue, PairHasher, Result, Side};

impl MerkleProof {
    /// Recompute the root value this proof commits `leaf` to.
    ///
    /// An empty proof returns `leaf` itself (the single-leaf tree).
    pub fn compute_root<H: PairHasher>(&self, leaf: &NodeValue, hasher: &H) -> Result<NodeValue> {
        if self.values.len() != self.indices.len() {
            return Err(Error::InvalidProof(format!(
                "{} sibling values but {} side markers",
                self.values.len(),
                self.indices.len()
            )));
        }

        let mut current = *leaf;
        for (sibling, side) in self.values.iter().zip(&self.indices) {
            current = match side {
                Side::Left => hasher.hash_pair(&current, sibling)?,
                Side::Right => hasher.hash_pair(sibling, &current)?,
            };
        }
        Ok(current)
    }

    /// Verify the proof ties `leaf` to `expected_root` under `hasher`.
    pub fn verify<H: PairHasher>(
        &self,
        leaf: &NodeValue,
        expected_root: &NodeValue,
        hasher: &H,
    ) -> Result<()> {
        let computed = self.compute_root(leaf, hasher)?;
        if computed != *expected_root {
            return Err(Error::InvalidProof(format!(
                "root mismatch: expected {}, got {}",
                expected_root, computed
            )));
        }
        Ok(())
    }
}
