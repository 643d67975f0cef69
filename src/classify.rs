//! Value classification and leaf formatting
//!
//! Every [`Value`] maps to exactly one [`ValueCategory`]. Categories overlap in
//! representation (a UI element is structurally an object, NaN is a number),
//! so [`classify`] checks them in a fixed order and the first match wins:
//!
//! 1. `null`, then `undefined`
//! 2. numbers, split into `nan`, `infinity` and `number`
//! 3. UI elements, including plain objects shaped like one
//! 4. dates, patterns, maps and sets
//! 5. big integers and symbols
//! 6. arrays, then functions
//! 7. strings and booleans, and `object` for everything else

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::{Object, Value, to_iso_string, to_js_string};

/// Display category of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueCategory {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    Function,
    UiElement,
    Date,
    #[serde(rename = "bigint")]
    BigInt,
    Symbol,
    #[serde(rename = "regexp")]
    RegExp,
    Map,
    Set,
    #[serde(rename = "nan")]
    NaN,
    Infinity,
}

impl ValueCategory {
    pub const ALL: [ValueCategory; 17] = [
        ValueCategory::Object,
        ValueCategory::Array,
        ValueCategory::String,
        ValueCategory::Number,
        ValueCategory::Boolean,
        ValueCategory::Null,
        ValueCategory::Undefined,
        ValueCategory::Function,
        ValueCategory::UiElement,
        ValueCategory::Date,
        ValueCategory::BigInt,
        ValueCategory::Symbol,
        ValueCategory::RegExp,
        ValueCategory::Map,
        ValueCategory::Set,
        ValueCategory::NaN,
        ValueCategory::Infinity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ValueCategory::Object => "object",
            ValueCategory::Array => "array",
            ValueCategory::String => "string",
            ValueCategory::Number => "number",
            ValueCategory::Boolean => "boolean",
            ValueCategory::Null => "null",
            ValueCategory::Undefined => "undefined",
            ValueCategory::Function => "function",
            ValueCategory::UiElement => "ui-element",
            ValueCategory::Date => "date",
            ValueCategory::BigInt => "bigint",
            ValueCategory::Symbol => "symbol",
            ValueCategory::RegExp => "regexp",
            ValueCategory::Map => "map",
            ValueCategory::Set => "set",
            ValueCategory::NaN => "nan",
            ValueCategory::Infinity => "infinity",
        }
    }

    /// Categories whose values can have children.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            ValueCategory::Object | ValueCategory::Array | ValueCategory::Map | ValueCategory::Set
        )
    }

    /// Categories rendered as leaves even though some are object-shaped.
    pub fn is_always_leaf(self) -> bool {
        matches!(
            self,
            ValueCategory::UiElement
                | ValueCategory::Date
                | ValueCategory::BigInt
                | ValueCategory::Symbol
                | ValueCategory::RegExp
                | ValueCategory::NaN
                | ValueCategory::Infinity
        )
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered symbol keys that mark an object as a UI element.
const ELEMENT_MARKERS: [&str; 2] = ["react.element", "react.transitional.element"];

/// Structural UI-element test for plain objects.
fn is_element_shaped(object: &Object) -> bool {
    let defined = |key: &str| object.get(key).is_some_and(|v| !matches!(v, Value::Undefined));
    let marked = matches!(
        object.get("$$typeof"),
        Some(Value::Symbol(s)) if s.is_registered()
            && s.description().is_some_and(|d| ELEMENT_MARKERS.contains(&d))
    );
    marked || (defined("type") && defined("props"))
}

/// Classify a value. Total and pure.
pub fn classify(value: &Value) -> ValueCategory {
    match value {
        Value::Null => ValueCategory::Null,
        Value::Undefined => ValueCategory::Undefined,
        Value::Number(n) if n.is_nan() => ValueCategory::NaN,
        Value::Number(n) if n.is_infinite() => ValueCategory::Infinity,
        Value::Number(_) => ValueCategory::Number,
        Value::Element(_) => ValueCategory::UiElement,
        Value::Object(o) if is_element_shaped(&o.read()) => ValueCategory::UiElement,
        Value::Date(_) => ValueCategory::Date,
        Value::RegExp(_) => ValueCategory::RegExp,
        Value::Map(_) => ValueCategory::Map,
        Value::Set(_) => ValueCategory::Set,
        Value::BigInt(_) => ValueCategory::BigInt,
        Value::Symbol(_) => ValueCategory::Symbol,
        Value::Array(_) => ValueCategory::Array,
        Value::Function(_) => ValueCategory::Function,
        Value::String(_) => ValueCategory::String,
        Value::Bool(_) => ValueCategory::Boolean,
        Value::Object(_) => ValueCategory::Object,
    }
}

/// Number of direct entries of a container, `None` for other categories.
pub fn item_count(value: &Value) -> Option<usize> {
    match (classify(value), value) {
        (ValueCategory::Array, Value::Array(items)) => Some(items.read().len()),
        (ValueCategory::Map, Value::Map(map)) => Some(map.read().len()),
        (ValueCategory::Set, Value::Set(set)) => Some(set.read().len()),
        (ValueCategory::Object, Value::Object(object)) => Some(object.read().len()),
        _ => None,
    }
}

/// True iff the value is a container with at least one entry.
pub fn is_expandable(value: &Value) -> bool {
    item_count(value).is_some_and(|n| n > 0)
}

/// Format a value for display as a leaf.
pub fn format_value(value: &Value, category: ValueCategory) -> String {
    match (category, value) {
        (ValueCategory::String, Value::String(s)) => format!("\"{}\"", s),
        (ValueCategory::Null, _) => "null".to_string(),
        (ValueCategory::Undefined, _) => "undefined".to_string(),
        (ValueCategory::NaN, _) => "NaN".to_string(),
        (ValueCategory::Infinity, Value::Number(n)) if *n < 0.0 => "-Infinity".to_string(),
        (ValueCategory::Infinity, _) => "Infinity".to_string(),
        (ValueCategory::Function, Value::Function(f)) => match f.read().name() {
            Some(name) => format!("[Function: {}]", name),
            None => "[Function]".to_string(),
        },
        (ValueCategory::UiElement, _) => format!("<{} />", component_name(value)),
        (ValueCategory::Date, Value::Date(d)) => to_iso_string(d),
        (ValueCategory::BigInt, Value::BigInt(n)) => format!("{}n", n),
        (ValueCategory::Symbol, Value::Symbol(s)) => s.to_string(),
        (ValueCategory::RegExp, Value::RegExp(r)) => r.to_string(),
        (ValueCategory::Map, Value::Map(m)) => format!("Map({})", m.read().len()),
        (ValueCategory::Set, Value::Set(s)) => format!("Set({})", s.read().len()),
        _ => to_js_string(value),
    }
}

/// Display name of a UI element: the first truthy of the element type's
/// `displayName`, its `name`, and the type itself, used only if it is text.
fn component_name(value: &Value) -> String {
    let element_type = match value {
        Value::Element(element) => element.element_type.clone(),
        other => other.property("type").unwrap_or(Value::Undefined),
    };
    let candidate = [
        element_type.property("displayName"),
        element_type.property("name"),
    ]
    .into_iter()
    .flatten()
    .find(Value::is_truthy)
    .unwrap_or(element_type);

    match candidate {
        Value::String(name) => name,
        _ => "Component".to_string(),
    }
}
