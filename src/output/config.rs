//! Output configuration types

use serde::{Deserialize, Serialize};

/// Configuration for rendering a value tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub use_color: bool,
    /// Show the item count next to collapsed branches
    pub show_items_count: bool,
    /// Draw `├──`/`│` guides instead of plain indentation
    pub show_indent_guides: bool,
    /// Header line printed above the tree
    pub title: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_items_count: false,
            show_indent_guides: false,
            title: None,
        }
    }
}
