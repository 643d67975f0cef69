//! Initial expansion planning

use std::collections::BTreeSet;

use tracing::debug;

use super::config::{DepthLimit, ExpansionConfig};
use super::node::TreeNode;

/// Compute the addresses of the branches that start expanded.
///
/// Nothing is expanded unless `default_expanded` is set. Otherwise the tree
/// is walked in pre-order: a branch is included when its depth is within
/// `max_depth`, and the walk only descends into branches it included.
/// Leaves are never included.
pub fn plan_expansion(
    root: &TreeNode,
    default_expanded: bool,
    max_depth: DepthLimit,
) -> BTreeSet<String> {
    let mut expanded = BTreeSet::new();
    if default_expanded {
        collect(root, max_depth, &mut expanded);
    }
    debug!(count = expanded.len(), max_depth = %max_depth, "planned expansion");
    expanded
}

fn collect(node: &TreeNode, max_depth: DepthLimit, expanded: &mut BTreeSet<String>) {
    if !node.is_branch() || !max_depth.allows(node.depth) {
        return;
    }
    expanded.insert(node.address.clone());
    for child in node.child_nodes() {
        collect(child, max_depth, expanded);
    }
}

impl ExpansionConfig {
    pub fn plan(&self, root: &TreeNode) -> BTreeSet<String> {
        plan_expansion(root, self.default_expanded, self.max_depth)
    }
}
