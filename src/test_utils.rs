//! Fixture values and temporary input files for tests.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::value::{Element, Function, Object, Value};

/// The user profile used throughout the examples:
/// `{name: "John", age: 30, tags: ["a", "b"]}`.
pub fn profile() -> Value {
    Value::object([
        ("name", Value::from("John")),
        ("age", Value::from(30)),
        ("tags", Value::array([Value::from("a"), Value::from("b")])),
    ])
}

/// A value touching every category at least once.
pub fn kitchen_sink() -> Value {
    Value::object([
        ("text", Value::from("hello")),
        ("count", Value::from(42)),
        ("ratio", Value::from(0.5)),
        ("flag", Value::from(true)),
        ("nothing", Value::Null),
        ("missing", Value::Undefined),
        ("nan", Value::from(f64::NAN)),
        ("inf", Value::from(f64::NEG_INFINITY)),
        ("list", Value::array([Value::from(1), Value::from(2)])),
        (
            "lookup",
            Value::map([(Value::from("user1"), Value::from("Alice"))]),
        ),
        ("unique", Value::set([Value::from("x"), Value::from("y")])),
        ("handler", Value::function(Function::named("onClick"))),
        (
            "icon",
            Value::element(Element::intrinsic("svg", Object::new())),
        ),
        ("id", Value::symbol("id")),
    ])
}

/// An object with `width` numeric properties.
pub fn wide(width: usize) -> Value {
    Value::object((0..width).map(|i| (format!("key{}", i), Value::from(i as f64))))
}

/// Arrays nested `depth` levels deep around a single number.
pub fn deep(depth: usize) -> Value {
    let mut value = Value::from(0);
    for _ in 0..depth {
        value = Value::array([value]);
    }
    value
}

/// A temporary directory holding input and settings files.
///
/// Cleaned up when dropped.
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

impl Default for FixtureDir {
    fn default() -> Self {
        Self::new()
    }
}
