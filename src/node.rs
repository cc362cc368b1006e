//! Arena nodes.
//!
//! Nodes live in a flat `Vec` owned by the tree; parent and child links
//! are indices into that arena, so the child→parent back-references never
//! form an ownership cycle.

use crate::NodeValue;

/// A node in the linked tree.
///
/// Either both children are present or neither is; no node has exactly one
/// child. `parent` is `None` only for the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeNode {
    pub(crate) value: NodeValue,
    pub(crate) children: Option<(usize, usize)>,
    pub(crate) parent: Option<usize>,
}

impl TreeNode {
    /// A childless node with no parent linked yet.
    pub(crate) fn leaf(value: NodeValue) -> Self {
        TreeNode {
            value,
            children: None,
            parent: None,
        }
    }

    /// An internal node over the given child indices.
    pub(crate) fn internal(value: NodeValue, left: usize, right: usize) -> Self {
        TreeNode {
            value,
            children: Some((left, right)),
            parent: None,
        }
    }

    /// The node's hash or leaf value.
    pub fn value(&self) -> NodeValue {
        self.value
    }

    /// Arena indices of the left and right children, `None` for a leaf.
    pub fn children(&self) -> Option<(usize, usize)> {
        self.children
    }

    /// Arena index of the parent, `None` for the root.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}
