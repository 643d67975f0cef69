//! Valtree - inspect arbitrary values as a collapsible tree

pub mod classify;
pub mod config;
pub mod copy;
pub mod decode;
pub mod error;
pub mod output;
pub mod tree;
pub mod value;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use classify::{ValueCategory, classify, format_value, is_expandable, item_count};
pub use config::Settings;
pub use copy::{Clipboard, MemoryClipboard, StdoutClipboard, copy_node, copy_text};
pub use decode::Decoder;
pub use error::{BuildError, ConfigError, CopyError, DecodeError, ValueError};
pub use output::{RenderConfig, TreeFormatter};
pub use tree::{
    BuildConfig, DepthLimit, ExpansionConfig, FunctionDisplay, ROOT_ADDRESS, TreeBuilder, TreeNode,
    build_tree, plan_expansion,
};
pub use value::Value;
