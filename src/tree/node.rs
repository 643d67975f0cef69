//! Tree node type

use crate::classify::{ValueCategory, format_value};
use crate::value::Value;

/// Address of the root node.
pub const ROOT_ADDRESS: &str = "root";

/// One node of a value tree.
///
/// `children` is `Some` exactly when the value was expandable. An expandable
/// container whose entries were all hidden keeps `Some(vec![])`, which is
/// different from a leaf (`None`).
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Dot-separated path of labels from the root, e.g. `root.user.0`.
    pub address: String,
    /// Display key; `None` for the root.
    pub label: Option<String>,
    pub category: ValueCategory,
    pub depth: usize,
    /// The source value. Shares data with the input; never mutated.
    pub value: Value,
    /// Number of direct entries before hidden functions were dropped.
    pub item_count: Option<usize>,
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn is_branch(&self) -> bool {
        self.children.is_some()
    }

    /// Formatted text for the node's value.
    pub fn display(&self) -> String {
        format_value(&self.value, self.category)
    }

    /// Children of a branch, empty for a leaf.
    pub fn child_nodes(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Find the node with the given address in this subtree.
    pub fn find(&self, address: &str) -> Option<&TreeNode> {
        if self.address == address {
            return Some(self);
        }
        // Addresses of descendants extend ours
        if !address.starts_with(self.address.as_str()) {
            return None;
        }
        self.child_nodes().iter().find_map(|child| child.find(address))
    }

    /// Pre-order iterator over this node and all descendants.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    pub fn branch_count(&self) -> usize {
        self.iter().filter(|n| n.is_branch()).count()
    }

    pub fn leaf_count(&self) -> usize {
        self.iter().filter(|n| !n.is_branch()).count()
    }
}

/// Pre-order traversal of a [`TreeNode`] subtree.
pub struct PreOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.child_nodes().iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(address: &str, depth: usize, n: i32) -> TreeNode {
        TreeNode {
            address: address.to_string(),
            label: address.rsplit('.').next().map(str::to_string),
            category: ValueCategory::Number,
            depth,
            value: Value::from(n),
            item_count: None,
            children: None,
        }
    }

    fn sample() -> TreeNode {
        let inner = TreeNode {
            address: "root.b".to_string(),
            label: Some("b".to_string()),
            category: ValueCategory::Array,
            depth: 1,
            value: Value::array([Value::from(2)]),
            item_count: Some(1),
            children: Some(vec![leaf("root.b.0", 2, 2)]),
        };
        TreeNode {
            address: ROOT_ADDRESS.to_string(),
            label: None,
            category: ValueCategory::Object,
            depth: 0,
            value: Value::Null,
            item_count: Some(3),
            children: Some(vec![leaf("root.a", 1, 1), inner, leaf("root.c", 1, 3)]),
        }
    }

    #[test]
    fn test_pre_order_iteration() {
        let tree = sample();
        let addresses: Vec<&str> = tree.iter().map(|n| n.address.as_str()).collect();
        assert_eq!(addresses, vec!["root", "root.a", "root.b", "root.b.0", "root.c"]);
    }

    #[test]
    fn test_find_by_address() {
        let tree = sample();
        assert_eq!(tree.find("root.b.0").map(|n| n.display()), Some("2".to_string()));
        assert!(tree.find("root.z").is_none());
        assert!(tree.find("elsewhere").is_none());
    }

    #[test]
    fn test_counts() {
        let tree = sample();
        assert_eq!(tree.branch_count(), 2);
        assert_eq!(tree.leaf_count(), 3);
    }
}
