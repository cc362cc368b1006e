//! 256-bit node values and their fixed-width hex rendering.
//!
//! The storage format writes every value as `0x` + 64 lowercase hex digits
//! (32 bytes, zero-padded), so values are modeled as 256-bit unsigned
//! integers in big-endian byte order. That width covers the BN254-style
//! field elements the tree is built over.

use core::fmt;

use bincode::{Decode, Encode};

use crate::{Error, Result};

/// Width of a node value in bytes.
pub const VALUE_WIDTH: usize = 32;

/// A node's hash or leaf value: a 256-bit unsigned integer, big-endian.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode)]
pub struct NodeValue([u8; VALUE_WIDTH]);

impl NodeValue {
    /// The all-zero value.
    pub const ZERO: NodeValue = NodeValue([0u8; VALUE_WIDTH]);

    /// Wrap 32 big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; VALUE_WIDTH]) -> Self {
        NodeValue(bytes)
    }

    /// The value as 32 big-endian bytes.
    pub const fn to_be_bytes(&self) -> [u8; VALUE_WIDTH] {
        self.0
    }

    /// Widen a `u64` into a node value.
    pub fn from_u64(v: u64) -> Self {
        let mut bytes = [0u8; VALUE_WIDTH];
        bytes[VALUE_WIDTH - 8..].copy_from_slice(&v.to_be_bytes());
        NodeValue(bytes)
    }

    /// Render as `0x` followed by exactly 64 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from hex: optional `0x`/`0X` prefix, 1..=64 digits, shorter
    /// inputs are left-zero-padded.
    pub fn from_hex(input: &str) -> Result<Self> {
        let digits = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);
        if digits.is_empty() {
            return Err(Error::InvalidValue(format!("empty value {:?}", input)));
        }
        if digits.len() > 2 * VALUE_WIDTH {
            return Err(Error::InvalidValue(format!(
                "value {:?} has {} hex digits, max is {}",
                input,
                digits.len(),
                2 * VALUE_WIDTH
            )));
        }
        let mut padded = String::with_capacity(2 * VALUE_WIDTH);
        for _ in digits.len()..2 * VALUE_WIDTH {
            padded.push('0');
        }
        padded.push_str(digits);

        let decoded = hex::decode(&padded)
            .map_err(|e| Error::InvalidValue(format!("value {:?} is not hex: {}", input, e)))?;
        let mut bytes = [0u8; VALUE_WIDTH];
        bytes.copy_from_slice(&decoded);
        Ok(NodeValue(bytes))
    }
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeValue({})", self.to_hex())
    }
}

impl From<[u8; VALUE_WIDTH]> for NodeValue {
    fn from(bytes: [u8; VALUE_WIDTH]) -> Self {
        NodeValue(bytes)
    }
}

impl From<u64> for NodeValue {
    fn from(v: u64) -> Self {
        NodeValue::from_u64(v)
    }
}
