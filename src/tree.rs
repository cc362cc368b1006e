//! Tree construction, proof generation, and membership.

use crate::{Error, MerkleProof, NodeValue, PairHasher, Result, Side, TreeNode};

/// A binary Merkle tree with explicit parent/child links.
///
/// Built once from an ordered leaf sequence (or read back from its storage
/// string) and immutable thereafter. The leaf count must be a power of two;
/// levels are formed by hashing adjacent pairs bottom-up until a single
/// root remains.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// Flat arena; links inside [`TreeNode`] are indices into this vec.
    pub(crate) nodes: Vec<TreeNode>,
    /// Arena index of the root.
    pub(crate) root: usize,
    /// Arena indices of the leaves, in original supply order.
    pub(crate) leaves: Vec<usize>,
}

impl MerkleTree {
    /// Build a tree over `leaves` in order, hashing adjacent pairs with
    /// `hasher` level by level.
    ///
    /// `hash_pair(left, right)` is applied exactly as paired, never
    /// commuted. A single leaf yields a tree whose root is that leaf.
    ///
    /// Errors: [`Error::InvalidInput`] on an empty sequence,
    /// [`Error::UnpairedLevel`] when any level has an odd node count (the
    /// unpaired node is never dropped or duplicated), and any hasher
    /// failure aborts the build.
    pub fn from_leaves<H: PairHasher>(leaves: &[NodeValue], hasher: &H) -> Result<Self> {
        if leaves.is_empty() {
            return Err(Error::InvalidInput(
                "cannot build a tree over zero leaves".to_string(),
            ));
        }

        let mut nodes: Vec<TreeNode> = leaves.iter().copied().map(TreeNode::leaf).collect();
        let leaf_indices: Vec<usize> = (0..leaves.len()).collect();

        let mut level = leaf_indices.clone();
        let mut level_no = 0usize;
        while level.len() > 1 {
            if level.len() % 2 != 0 {
                return Err(Error::UnpairedLevel {
                    level: level_no,
                    len: level.len(),
                });
            }
            let mut parents = Vec::with_capacity(level.len() / 2);
            for pair in level.chunks_exact(2) {
                let (left, right) = (pair[0], pair[1]);
                let value = hasher.hash_pair(&nodes[left].value, &nodes[right].value)?;
                let parent = nodes.len();
                nodes.push(TreeNode::internal(value, left, right));
                nodes[left].parent = Some(parent);
                nodes[right].parent = Some(parent);
                parents.push(parent);
            }
            level = parents;
            level_no += 1;
        }

        Ok(MerkleTree {
            root: level[0],
            nodes,
            leaves: leaf_indices,
        })
    }

    /// The root value, committing to the whole leaf sequence.
    pub fn root_value(&self) -> NodeValue {
        self.nodes[self.root].value
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Leaf values in original supply order.
    pub fn leaf_values(&self) -> impl ExactSizeIterator<Item = NodeValue> + '_ {
        self.leaves.iter().map(|&ix| self.nodes[ix].value)
    }

    /// The node at an arena index, if it exists.
    pub fn node(&self, index: usize) -> Option<&TreeNode> {
        self.nodes.get(index)
    }

    /// Total node count across all levels.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges from any leaf up to the root: `log2(leaf_count)`.
    /// Zero for a single-leaf tree.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.leaves[0];
        while let Some(parent) = self.nodes[current].parent {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Whether `value` equals the value of at least one stored leaf.
    ///
    /// Linear scan; leaves are not sorted.
    pub fn leaf_exists(&self, value: &NodeValue) -> bool {
        self.leaf_values().any(|leaf| leaf == *value)
    }

    /// Inclusion proof for the first leaf whose value equals `value`.
    ///
    /// Lookup is by value equality, first match wins; with duplicate leaf
    /// values use [`proof_at`](Self::proof_at) to pick a position
    /// explicitly. Errors with [`Error::LeafNotFound`] when nothing
    /// matches.
    pub fn proof(&self, value: &NodeValue) -> Result<MerkleProof> {
        let position = self
            .leaves
            .iter()
            .position(|&ix| self.nodes[ix].value == *value)
            .ok_or_else(|| Error::LeafNotFound(format!("no leaf with value {}", value)))?;
        self.proof_at(position)
    }

    /// Inclusion proof for the leaf at `leaf_index` (supply order).
    ///
    /// Walks leaf-to-root, recording at each step the sibling's value and
    /// which side the current node occupied. The ascent terminates when
    /// the current node's VALUE equals the root's value, so the
    /// single-leaf tree yields an empty proof.
    pub fn proof_at(&self, leaf_index: usize) -> Result<MerkleProof> {
        let mut current = *self.leaves.get(leaf_index).ok_or_else(|| {
            Error::InvalidInput(format!(
                "leaf index {} out of range for {} leaves",
                leaf_index,
                self.leaves.len()
            ))
        })?;

        let root_value = self.root_value();
        let mut values = Vec::new();
        let mut indices = Vec::new();

        while self.nodes[current].value != root_value {
            let parent = self.nodes[current].parent.ok_or_else(|| {
                Error::InconsistentTree(format!(
                    "node {} below the root has no parent link",
                    current
                ))
            })?;
            let (left, right) = self.nodes[parent].children.ok_or_else(|| {
                Error::InconsistentTree(format!("parent node {} has no children", parent))
            })?;

            if current == left {
                values.push(self.nodes[right].value);
                indices.push(Side::Left);
            } else if current == right {
                values.push(self.nodes[left].value);
                indices.push(Side::Right);
            } else {
                return Err(Error::InconsistentTree(format!(
                    "node {} is neither child of its parent {}",
                    current, parent
                )));
            }
            current = parent;
        }

        Ok(MerkleProof { values, indices })
    }
}
