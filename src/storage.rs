//! Line-oriented text storage for a tree.
//!
//! One line per level, root first, leaves last. Values within a level are
//! written left-to-right, each as `0x` + 64 zero-padded hex digits,
//! comma-separated. Lines are joined with `\n` and there is no trailing
//! newline. For the tree
//!
//! ```text
//!          A
//!        /   \
//!       B     C
//!      / \   / \
//!     D   E F   G
//! ```
//!
//! the storage string is `"A\nB,C\nD,E,F,G"` (with each letter in hex).
//!
//! Deserialization trusts the stored values; it rebuilds the links but
//! does not re-hash, matching the write side which only ever persists
//! trees that were valid in memory.

use crate::{Error, MerkleTree, NodeValue, Result, TreeNode};

impl MerkleTree {
    /// Serialize to the storage string, root line first.
    pub fn to_storage_string(&self) -> String {
        let mut lines = Vec::new();
        let mut row = vec![self.root];
        while !row.is_empty() {
            let line = row
                .iter()
                .map(|&ix| self.nodes[ix].value.to_hex())
                .collect::<Vec<_>>()
                .join(",");
            lines.push(line);
            row = self.child_row(&row);
        }
        lines.join("\n")
    }

    /// The concatenated children of a row of nodes; empty for a leaf row.
    fn child_row(&self, row: &[usize]) -> Vec<usize> {
        let mut children = Vec::with_capacity(row.len() * 2);
        for &ix in row {
            if let Some((left, right)) = self.nodes[ix].children {
                children.push(left);
                children.push(right);
            }
        }
        children
    }

    /// Deserialize a storage string back into a tree.
    ///
    /// Line 0 is the root. Every following line must split into exactly
    /// twice as many comma-separated values as the row above it — each
    /// parent gets exactly two children — otherwise
    /// [`Error::MalformedTree`]. The final row becomes the leaf set.
    ///
    /// The result is value-equivalent to the serialized tree (same root,
    /// same ordered leaves, same parent/child value relationships); arena
    /// layout is not preserved.
    pub fn from_storage_string(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::MalformedTree("empty storage string".to_string()));
        }

        let mut lines = input.split('\n');
        // Non-empty input always has a first line.
        let root_line = lines.next().unwrap_or_default();
        let mut nodes = vec![TreeNode::leaf(NodeValue::from_hex(root_line)?)];
        let root = 0usize;

        let mut row = vec![root];
        for line in lines {
            let vals: Vec<&str> = line.split(',').collect();
            if vals.len() != 2 * row.len() {
                return Err(Error::MalformedTree(format!(
                    "level has {} values for {} parents, expected {}",
                    vals.len(),
                    row.len(),
                    2 * row.len()
                )));
            }

            let mut next_row = Vec::with_capacity(vals.len());
            for (i, &parent) in row.iter().enumerate() {
                let left_value = NodeValue::from_hex(vals[2 * i])?;
                let right_value = NodeValue::from_hex(vals[2 * i + 1])?;

                let left = nodes.len();
                nodes.push(TreeNode {
                    value: left_value,
                    children: None,
                    parent: Some(parent),
                });
                let right = nodes.len();
                nodes.push(TreeNode {
                    value: right_value,
                    children: None,
                    parent: Some(parent),
                });

                nodes[parent].children = Some((left, right));
                next_row.push(left);
                next_row.push(right);
            }
            row = next_row;
        }

        Ok(MerkleTree {
            nodes,
            root,
            leaves: row,
        })
    }
}
