//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `config` - Render configuration
//! - `utils` - Connectors, brackets and colour styles
//! - `tree` - Console formatter driven by an expansion set

mod config;
mod tree;
mod utils;

pub use config::RenderConfig;
pub use tree::TreeFormatter;
pub use utils::{brackets, child_prefix, connector};
