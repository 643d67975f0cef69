//! TreeBuilder - converts a value into an addressed tree of nodes

use tracing::{debug, trace, warn};

use crate::classify::{ValueCategory, classify, is_expandable, item_count};
use crate::error::BuildError;
use crate::value::{Shared, Value, to_js_string};

use super::config::{BuildConfig, FunctionDisplay};
use super::node::{ROOT_ADDRESS, TreeNode};

/// Builds a [`TreeNode`] tree from a value.
///
/// The walk is depth-first and pre-order. Containers currently being expanded
/// are tracked by identity; reaching one of them again fails with
/// [`BuildError::CyclicStructure`] instead of recursing forever. The same
/// container may still appear at several places in an acyclic value.
pub struct TreeBuilder {
    config: BuildConfig,
}

/// Containers open on the current recursion path: identity and address.
type OpenPath = Vec<(usize, String)>;

impl TreeBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build the tree for `value` rooted at `root`.
    ///
    /// Returns `Ok(None)` only when the root itself is a hidden function.
    pub fn build(&self, value: &Value) -> Result<Option<TreeNode>, BuildError> {
        let tree = self.build_at(value, None, ROOT_ADDRESS, 0)?;
        if let Some(root) = &tree {
            debug!(
                branches = root.branch_count(),
                leaves = root.leaf_count(),
                "built value tree"
            );
        }
        Ok(tree)
    }

    /// Build a subtree with an explicit label, address and depth.
    pub fn build_at(
        &self,
        value: &Value,
        label: Option<&str>,
        address: &str,
        depth: usize,
    ) -> Result<Option<TreeNode>, BuildError> {
        let mut open = OpenPath::new();
        self.build_node(value, label.map(str::to_string), address.to_string(), depth, &mut open)
    }

    fn build_node(
        &self,
        value: &Value,
        label: Option<String>,
        address: String,
        depth: usize,
        open: &mut OpenPath,
    ) -> Result<Option<TreeNode>, BuildError> {
        let category = classify(value);

        if category.is_always_leaf() {
            return Ok(Some(leaf(value, category, label, address, depth)));
        }

        if let Value::Function(function) = value {
            return match self.config.function_display {
                FunctionDisplay::Hide => Ok(None),
                FunctionDisplay::AsString => Ok(Some(leaf(value, category, label, address, depth))),
                FunctionDisplay::AsObject => {
                    enter(open, function.id(), &address)?;
                    let props = function.read().props.clone();
                    let as_object = Value::Object(Shared::new(props));
                    let node = self.build_node(&as_object, label, address, depth, open);
                    open.pop();
                    node
                }
            };
        }

        if !is_expandable(value) {
            return Ok(Some(leaf(value, category, label, address, depth)));
        }

        // Expandable values are containers and always have an identity
        let id = value.identity().unwrap_or_default();
        enter(open, id, &address)?;
        trace!(address = %address, category = %category, "expanding container");

        let entries = entries(value, category);
        let mut children = Vec::with_capacity(entries.len());
        for (key, child) in &entries {
            let child_address = format!("{}.{}", address, key);
            let built = self.build_node(child, Some(key.clone()), child_address, depth + 1, open);
            match built {
                Ok(Some(node)) => children.push(node),
                Ok(None) => {}
                Err(e) => {
                    open.pop();
                    return Err(e);
                }
            }
        }
        open.pop();

        Ok(Some(TreeNode {
            address,
            label,
            category,
            depth,
            value: value.clone(),
            item_count: item_count(value),
            children: Some(children),
        }))
    }
}

fn leaf(
    value: &Value,
    category: ValueCategory,
    label: Option<String>,
    address: String,
    depth: usize,
) -> TreeNode {
    TreeNode {
        address,
        label,
        category,
        depth,
        value: value.clone(),
        item_count: None,
        children: None,
    }
}

/// Push a container onto the open path, failing if it is already open.
fn enter(open: &mut OpenPath, id: usize, address: &str) -> Result<(), BuildError> {
    if let Some((_, ancestor)) = open.iter().find(|(open_id, _)| *open_id == id) {
        warn!(address, ancestor = %ancestor, "cyclic structure");
        return Err(BuildError::CyclicStructure {
            address: address.to_string(),
            ancestor: ancestor.clone(),
        });
    }
    open.push((id, address.to_string()));
    Ok(())
}

/// Snapshot the labelled entries of a container.
///
/// The read lock is released before children are visited.
fn entries(value: &Value, category: ValueCategory) -> Vec<(String, Value)> {
    match (category, value) {
        (ValueCategory::Array, Value::Array(items)) => items
            .read()
            .iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item.clone()))
            .collect(),
        (ValueCategory::Map, Value::Map(map)) => map
            .read()
            .iter()
            .enumerate()
            .map(|(i, (k, v))| (format!("[{}] {}", i, to_js_string(k)), v.clone()))
            .collect(),
        (ValueCategory::Set, Value::Set(set)) => set
            .read()
            .iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item.clone()))
            .collect(),
        (ValueCategory::Object, Value::Object(object)) => object
            .read()
            .entries()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
        _ => Vec::new(),
    }
}

/// Build a tree with the given configuration.
pub fn build_tree(value: &Value, config: &BuildConfig) -> Result<Option<TreeNode>, BuildError> {
    TreeBuilder::new(config.clone()).build(value)
}
