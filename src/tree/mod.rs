//! Value tree building and expansion planning
//!
//! - `TreeBuilder`: converts a value into an addressed [`TreeNode`] tree
//! - `plan_expansion`: computes which branches start expanded for a depth budget

mod builder;
mod config;
mod expansion;
mod node;

// Re-export public types
pub use builder::{TreeBuilder, build_tree};
pub use config::{BuildConfig, DepthLimit, ExpansionConfig, FunctionDisplay};
pub use expansion::plan_expansion;
pub use node::{PreOrder, ROOT_ADDRESS, TreeNode};
