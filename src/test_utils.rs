//! Test helpers: small-integer values and an additive stand-in hasher.

use crate::{Error, NodeValue, PairHasher, Result, VALUE_WIDTH};

/// Shorthand for a small-integer node value.
pub(crate) fn v(n: u64) -> NodeValue {
    NodeValue::from_u64(n)
}

/// Small-integer leaf sequences.
pub(crate) fn vals(ns: &[u64]) -> Vec<NodeValue> {
    ns.iter().copied().map(v).collect()
}

/// Stand-in hasher: `hash_pair(a, b) = a + b` over 256-bit big-endian
/// integers. Commutative, so unsuitable for order-sensitivity tests, but
/// it makes every internal value readable in examples.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct AddPairHasher;

impl PairHasher for AddPairHasher {
    fn hash_pair(&self, left: &NodeValue, right: &NodeValue) -> Result<NodeValue> {
        let (l, r) = (left.to_be_bytes(), right.to_be_bytes());
        let mut out = [0u8; VALUE_WIDTH];
        let mut carry = 0u16;
        for i in (0..VALUE_WIDTH).rev() {
            let sum = l[i] as u16 + r[i] as u16 + carry;
            out[i] = sum as u8;
            carry = sum >> 8;
        }
        if carry != 0 {
            return Err(Error::HashBackend("additive overflow".to_string()));
        }
        Ok(NodeValue::from_be_bytes(out))
    }
}

/// A hasher that always fails, for abort-propagation tests.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FailingHasher;

impl PairHasher for FailingHasher {
    fn hash_pair(&self, _left: &NodeValue, _right: &NodeValue) -> Result<NodeValue> {
        Err(Error::HashBackend("backend unavailable".to_string()))
    }
}

/// `0x` + 64-digit hex rendering of a small integer, as the storage format
/// writes it.
pub(crate) fn hex64(n: u64) -> String {
    format!("0x{:064x}", n)
}
