//! Shared utility functions for output formatting

use termcolor::{Color, ColorSpec};

use crate::classify::ValueCategory;

pub const EXPANDED_MARKER: &str = "▾ ";
pub const COLLAPSED_MARKER: &str = "▸ ";

/// Connector drawn before a non-root node.
pub fn connector(is_last: bool, guides: bool) -> &'static str {
    match (guides, is_last) {
        (false, _) => "    ",
        (true, true) => "└── ",
        (true, false) => "├── ",
    }
}

/// Prefix for the children of a node.
pub fn child_prefix(prefix: &str, is_last: bool, is_root: bool, guides: bool) -> String {
    if is_root {
        String::new()
    } else if guides && !is_last {
        format!("{}│   ", prefix)
    } else {
        format!("{}    ", prefix)
    }
}

/// Opening and closing brackets for a branch.
pub fn brackets(category: ValueCategory) -> (&'static str, &'static str) {
    match category {
        ValueCategory::Array => ("[", "]"),
        _ => ("{", "}"),
    }
}

pub fn key_style() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Blue));
    spec
}

pub fn dimmed_style() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_dimmed(true);
    spec
}

/// Colour for a leaf value by category.
pub fn value_style(category: ValueCategory) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match category {
        ValueCategory::String => {
            spec.set_fg(Some(Color::Green));
        }
        ValueCategory::Number | ValueCategory::BigInt => {
            spec.set_fg(Some(Color::Magenta));
        }
        ValueCategory::Boolean => {
            spec.set_fg(Some(Color::Yellow));
        }
        ValueCategory::Null
        | ValueCategory::Undefined
        | ValueCategory::NaN
        | ValueCategory::Infinity => {
            spec.set_dimmed(true);
        }
        ValueCategory::Date | ValueCategory::RegExp | ValueCategory::Symbol => {
            spec.set_fg(Some(Color::Cyan));
        }
        ValueCategory::Function | ValueCategory::UiElement => {
            spec.set_fg(Some(Color::Red)).set_italic(true);
        }
        ValueCategory::Object | ValueCategory::Array | ValueCategory::Map | ValueCategory::Set => {}
    }
    spec
}
