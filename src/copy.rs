//! Copy-to-clipboard text for tree nodes
//!
//! Copy text is the value serialized as pretty-printed JSON with two-space
//! indentation, following the host `JSON.stringify` rules rather than a
//! lossless encoding: absent values and functions disappear from objects,
//! non-finite numbers become `null`, and maps and sets collapse to `{}`.
//!
//! Writing the text somewhere is a capability the caller injects through the
//! [`Clipboard`] trait.

use std::cell::RefCell;
use std::io::{self, Write};

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::CopyError;
use crate::tree::TreeNode;
use crate::value::{Value, to_iso_string};

/// Integral numbers below this print in full; larger ones use exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Destination for copied text.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), CopyError>;
}

/// Writes copied text to stdout, one copy per line block.
#[derive(Debug, Default)]
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), CopyError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        Ok(())
    }
}

/// Keeps every copied text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub copies: Vec<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), CopyError> {
        self.copies.push(text.to_string());
        Ok(())
    }
}

/// Serialize a value as copy text.
///
/// Returns `Ok(None)` for values that have no JSON form at the top level
/// (`undefined`, functions and symbols).
pub fn copy_text(value: &Value) -> Result<Option<String>, CopyError> {
    if !has_json_form(value) {
        return Ok(None);
    }
    let open = RefCell::new(Vec::new());
    let view = JsonView { value, open: &open };
    serde_json::to_string_pretty(&view)
        .map(Some)
        .map_err(|e| classify_error(&e.to_string()))
}

/// Copy a node's value to the clipboard.
///
/// Returns the copied text so the caller can hand `(text, node.value)` to its
/// own copy callback; `None` when the value has no JSON form and nothing was
/// written.
pub fn copy_node<C: Clipboard + ?Sized>(
    node: &TreeNode,
    clipboard: &mut C,
) -> Result<Option<String>, CopyError> {
    let text = copy_text(&node.value)?;
    if let Some(text) = &text {
        clipboard.write_text(text)?;
    }
    Ok(text)
}

fn has_json_form(value: &Value) -> bool {
    !matches!(value, Value::Undefined | Value::Function(_) | Value::Symbol(_))
}

const CIRCULAR: &str = "circular structure";
const BIGINT: &str = "BigInt value";

fn classify_error(message: &str) -> CopyError {
    if message.contains(CIRCULAR) {
        CopyError::Circular
    } else if message.contains(BIGINT) {
        CopyError::BigInt
    } else {
        CopyError::Serialize(message.to_string())
    }
}

/// Serializable view of a value with host JSON semantics.
struct JsonView<'a> {
    value: &'a Value,
    /// Identities of containers currently being serialized.
    open: &'a RefCell<Vec<usize>>,
}

impl<'a> JsonView<'a> {
    fn child<'b>(&'b self, value: &'b Value) -> JsonView<'b> {
        JsonView {
            value,
            open: self.open,
        }
    }

    fn enter<E: serde::ser::Error>(&self) -> Result<Option<usize>, E> {
        let Some(id) = self.value.identity() else {
            return Ok(None);
        };
        let mut open = self.open.borrow_mut();
        if open.contains(&id) {
            return Err(E::custom(CIRCULAR));
        }
        open.push(id);
        Ok(Some(id))
    }

    fn leave(&self, id: Option<usize>) {
        if id.is_some() {
            self.open.borrow_mut().pop();
        }
    }
}

impl Serialize for JsonView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Null | Value::Undefined | Value::Function(_) | Value::Symbol(_) => {
                serializer.serialize_unit()
            }
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if !n.is_finite() => serializer.serialize_unit(),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < EXPONENT_THRESHOLD => {
                serializer.serialize_i128(*n as i128)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::BigInt(_) => Err(S::Error::custom(BIGINT)),
            Value::String(s) => serializer.serialize_str(s),
            Value::Date(d) => serializer.serialize_str(&to_iso_string(d)),
            Value::RegExp(_) | Value::Map(_) | Value::Set(_) => {
                serializer.serialize_map(Some(0))?.end()
            }
            Value::Array(items) => {
                let id = self.enter::<S::Error>()?;
                let items = items.read().clone();
                let result = (|| -> Result<S::Ok, S::Error> {
                    let mut seq = serializer.serialize_seq(Some(items.len()))?;
                    for item in &items {
                        seq.serialize_element(&self.child(item))?;
                    }
                    seq.end()
                })();
                self.leave(id);
                result
            }
            Value::Object(object) => {
                let id = self.enter::<S::Error>()?;
                let entries: Vec<(String, Value)> = object
                    .read()
                    .entries()
                    .into_iter()
                    .filter(|(_, v)| has_json_form(v))
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect();
                let result = (|| -> Result<S::Ok, S::Error> {
                    let mut map = serializer.serialize_map(Some(entries.len()))?;
                    for (key, value) in &entries {
                        map.serialize_entry(key, &self.child(value))?;
                    }
                    map.end()
                })();
                self.leave(id);
                result
            }
            Value::Element(element) => {
                let id = self.enter::<S::Error>()?;
                let props = Value::object(
                    element
                        .props
                        .entries()
                        .into_iter()
                        .map(|(k, v)| (k.to_string(), v.clone())),
                );
                let key = element.key.clone().map_or(Value::Null, Value::from);
                let result = (|| -> Result<S::Ok, S::Error> {
                    let mut map = serializer.serialize_map(None)?;
                    if has_json_form(&element.element_type) {
                        map.serialize_entry("type", &self.child(&element.element_type))?;
                    }
                    map.serialize_entry("key", &self.child(&key))?;
                    map.serialize_entry("props", &self.child(&props))?;
                    map.end()
                })();
                self.leave(id);
                result
            }
        }
    }
}
