//! Scalar-like host values that need more than a Rust primitive

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::ValueError;

use super::{Object, Value};

/// An arbitrary-precision integer, kept as normalized decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    digits: String,
}

impl BigInt {
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }
}

impl FromStr for BigInt {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValueError::InvalidBigInt(s.to_string()));
        }
        let digits = body.trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };
        Ok(Self {
            negative: negative && digits != "0",
            digits: digits.to_string(),
        })
    }
}

impl From<i64> for BigInt {
    fn from(n: i64) -> Self {
        Self::from(n as i128)
    }
}

impl From<i128> for BigInt {
    fn from(n: i128) -> Self {
        Self {
            negative: n < 0,
            digits: n.unsigned_abs().to_string(),
        }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.digits)
        } else {
            f.write_str(&self.digits)
        }
    }
}

#[derive(Debug)]
struct SymbolInner {
    description: Option<String>,
    registered: bool,
}

/// A unique symbol.
///
/// Every [`Symbol::new`] call creates a distinct symbol, even for equal
/// descriptions. [`Symbol::registered`] models the global registry: symbols
/// registered under the same key are equal.
#[derive(Debug, Clone)]
pub struct Symbol(Arc<SymbolInner>);

impl Symbol {
    pub fn new(description: Option<&str>) -> Self {
        Self(Arc::new(SymbolInner {
            description: description.map(str::to_string),
            registered: false,
        }))
    }

    pub fn registered(key: &str) -> Self {
        Self(Arc::new(SymbolInner {
            description: Some(key.to_string()),
            registered: true,
        }))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    pub fn is_registered(&self) -> bool {
        self.0.registered
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.registered && other.0.registered && self.0.description == other.0.description)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// Flags in canonical output order.
const REGEXP_FLAGS: &str = "dgimsuvy";

/// A regular expression pattern with flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegExp {
    source: String,
    flags: String,
}

impl RegExp {
    /// Build from a raw pattern and flag string.
    ///
    /// Unescaped `/` outside character classes and line terminators are
    /// escaped in the stored source; flags are reordered canonically.
    pub fn new(pattern: &str, flags: &str) -> Result<Self, ValueError> {
        let mut seen = [false; REGEXP_FLAGS.len()];
        for flag in flags.chars() {
            let pos = REGEXP_FLAGS
                .find(flag)
                .ok_or_else(|| ValueError::InvalidRegExpFlags(flags.to_string()))?;
            if seen[pos] {
                return Err(ValueError::InvalidRegExpFlags(flags.to_string()));
            }
            seen[pos] = true;
        }
        // `u` and `v` are mutually exclusive
        if seen[5] && seen[6] {
            return Err(ValueError::InvalidRegExpFlags(flags.to_string()));
        }
        let flags = REGEXP_FLAGS
            .chars()
            .zip(seen)
            .filter_map(|(c, on)| on.then_some(c))
            .collect();

        Ok(Self {
            source: escape_source(pattern),
            flags,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }
}

fn escape_source(pattern: &str) -> String {
    if pattern.is_empty() {
        return "(?:)".to_string();
    }
    let mut out = String::with_capacity(pattern.len());
    let mut in_class = false;
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push('\\');
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '[' => {
                in_class = true;
                out.push(c);
            }
            ']' => {
                in_class = false;
                out.push(c);
            }
            '/' if !in_class => out.push_str("\\/"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// A callable: its name and its own enumerable properties.
#[derive(Debug, Clone, Default)]
pub struct Function {
    pub name: Option<String>,
    pub props: Object,
}

impl Function {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            props: Object::new(),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_prop(mut self, key: &str, value: Value) -> Self {
        self.props.insert(key, value);
        self
    }

    /// The declared name, if non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// A UI-component handle: an element type plus the props it was created with.
///
/// The element type is either a tag name (`Value::String`) or a component
/// value, typically a function carrying `displayName`.
#[derive(Debug, Clone)]
pub struct Element {
    pub element_type: Value,
    pub props: Object,
    pub key: Option<String>,
}

impl Element {
    pub fn new(element_type: Value, props: Object) -> Self {
        Self {
            element_type,
            props,
            key: None,
        }
    }

    /// An element for a built-in tag such as `button`.
    pub fn intrinsic(tag: &str, props: Object) -> Self {
        Self::new(Value::from(tag), props)
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }
}
