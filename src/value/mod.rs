//! Host value model
//!
//! [`Value`] is a closed set of variants covering everything the inspector can
//! be handed: scalars, the two absent values, exotic scalars (big integers,
//! symbols, dates, patterns), reference-typed containers and UI elements.
//!
//! Containers and functions are held through [`Shared`] handles, so cloning a
//! `Value` is cheap and never copies the underlying data.

mod exotic;
mod object;
mod shared;
mod string;

use chrono::{DateTime, Utc};

pub use exotic::{BigInt, Element, Function, RegExp, Symbol};
pub use object::{Object, ValueMap, ValueSet};
pub use shared::Shared;
pub use string::{format_number, to_iso_string, to_js_string};

use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(BigInt),
    String(String),
    Symbol(Symbol),
    Array(Shared<Vec<Value>>),
    Object(Shared<Object>),
    Map(Shared<ValueMap>),
    Set(Shared<ValueSet>),
    Date(DateTime<Utc>),
    RegExp(RegExp),
    Function(Shared<Function>),
    Element(Arc<Element>),
}

impl Value {
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(Shared::new(items.into_iter().collect()))
    }

    pub fn object<K: Into<String>>(props: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(Shared::new(props.into_iter().collect()))
    }

    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Map(Shared::new(entries.into_iter().collect()))
    }

    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Set(Shared::new(items.into_iter().collect()))
    }

    pub fn function(function: Function) -> Self {
        Value::Function(Shared::new(function))
    }

    pub fn element(element: Element) -> Self {
        Value::Element(Arc::new(element))
    }

    pub fn symbol(description: &str) -> Self {
        Value::Symbol(Symbol::new(Some(description)))
    }

    /// Identity of a reference-typed value, `None` for scalars.
    pub fn identity(&self) -> Option<usize> {
        match self {
            Value::Array(a) => Some(a.id()),
            Value::Object(o) => Some(o.id()),
            Value::Map(m) => Some(m.id()),
            Value::Set(s) => Some(s.id()),
            Value::Function(f) => Some(f.id()),
            Value::Element(e) => Some(Arc::as_ptr(e) as usize),
            _ => None,
        }
    }

    /// Host truthiness: false for `undefined`, `null`, `false`, `0`, `NaN`,
    /// the empty string and the zero big integer.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::BigInt(n) => !n.is_zero(),
            _ => true,
        }
    }

    /// SameValueZero equality, as used for map keys and set members.
    ///
    /// Scalars compare by value with `NaN` equal to itself and `+0` equal to
    /// `-0`; containers, functions and elements compare by identity.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::RegExp(a), Value::RegExp(b)) => a == b,
            _ => match (self.identity(), other.identity()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Look up an own property on an object or function.
    pub fn property(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(o) => o.read().get(key).cloned(),
            Value::Function(f) => {
                let function = f.read();
                match (key, function.props.get(key)) {
                    (_, Some(v)) => Some(v.clone()),
                    ("name", None) => Some(Value::from(function.name.clone().unwrap_or_default())),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl From<RegExp> for Value {
    fn from(r: RegExp) -> Self {
        Value::RegExp(r)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Plain JSON maps onto the JSON-compatible subset of [`Value`].
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::array(items.into_iter().map(Value::from)),
            serde_json::Value::Object(props) => {
                Value::object(props.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}
