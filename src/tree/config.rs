//! Configuration types for tree building and expansion planning

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How callable values appear in the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FunctionDisplay {
    /// Show as a `[Function: name]` leaf
    #[default]
    AsString,
    /// Leave functions out of the tree
    Hide,
    /// Show the function's own properties as if it were a plain object
    AsObject,
}

/// Configuration for tree building.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub function_display: FunctionDisplay,
}

/// Depth budget for initial expansion.
///
/// Built from the integer convention used at the outer interface: `-1` means
/// unbounded, `0` keeps everything collapsed and `n` expands branches whose
/// depth is below `n`. Other negative numbers expand nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum DepthLimit {
    Unbounded,
    Levels(usize),
}

impl DepthLimit {
    /// Whether a branch at `depth` falls inside the budget.
    pub fn allows(self, depth: usize) -> bool {
        match self {
            DepthLimit::Unbounded => true,
            DepthLimit::Levels(max) => depth < max,
        }
    }
}

impl Default for DepthLimit {
    fn default() -> Self {
        DepthLimit::Levels(2)
    }
}

impl From<i64> for DepthLimit {
    fn from(raw: i64) -> Self {
        match raw {
            -1 => DepthLimit::Unbounded,
            n if n < 0 => DepthLimit::Levels(0),
            n => DepthLimit::Levels(usize::try_from(n).unwrap_or(usize::MAX)),
        }
    }
}

impl From<DepthLimit> for i64 {
    fn from(limit: DepthLimit) -> Self {
        match limit {
            DepthLimit::Unbounded => -1,
            DepthLimit::Levels(n) => i64::try_from(n).unwrap_or(i64::MAX),
        }
    }
}

impl FromStr for DepthLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "unbounded" => Ok(DepthLimit::Unbounded),
            other => other
                .parse::<i64>()
                .map(DepthLimit::from)
                .map_err(|_| format!("invalid depth '{}': expected an integer or 'all'", other)),
        }
    }
}

impl fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthLimit::Unbounded => f.write_str("-1"),
            DepthLimit::Levels(n) => write!(f, "{}", n),
        }
    }
}

/// Configuration for the initial expansion state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Whether any node starts expanded
    pub default_expanded: bool,
    pub max_depth: DepthLimit,
}
