use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from linked Merkle tree operations.
///
/// All errors propagate synchronously to the immediate caller; no operation
/// retries or recovers partially, and a failed construction or
/// deserialization leaves no partially-built tree behind.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A storage-string level does not contain exactly twice as many values
    /// as the row above it, or the input is empty.
    #[error("malformed tree: {0}")]
    MalformedTree(String),
    /// A proof was requested for a value that matches no stored leaf.
    #[error("leaf not found: {0}")]
    LeafNotFound(String),
    /// During proof ascent a node turned out to be neither child of its
    /// parent. This is a violated construction invariant, not an input
    /// error.
    #[error("inconsistent tree: {0}")]
    InconsistentTree(String),
    /// A level had an odd node count during construction, leaving its last
    /// node without a sibling.
    #[error("unpaired level: level {level} has {len} nodes, no partner for the last one")]
    UnpairedLevel {
        /// Level index, counted from the leaves (leaf level = 0).
        level: usize,
        /// Node count at that level.
        len: usize,
    },
    /// A node value could not be parsed from its hex rendering.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Invalid input parameters.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Invalid proof: verification mismatch or codec failure.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
    /// The hash collaborator failed; the whole operation aborts.
    #[error("hash backend error: {0}")]
    HashBackend(String),
}
