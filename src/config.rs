//! Settings file
//!
//! A JSON document with optional `build`, `expansion` and `render` sections.
//! Missing sections and fields take their defaults:
//!
//! ```json
//! {
//!   "build": { "function_display": "hide" },
//!   "expansion": { "default_expanded": true, "max_depth": -1 },
//!   "render": { "show_items_count": true }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::output::RenderConfig;
use crate::tree::{BuildConfig, ExpansionConfig};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub build: BuildConfig,
    pub expansion: ExpansionConfig,
    pub render: RenderConfig,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
