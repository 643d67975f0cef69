//! Decoding JSON text into values
//!
//! Plain JSON covers only part of the value model, so tagged mode recognises
//! single-key objects whose key is one of the tags below and turns them into
//! the matching exotic value:
//!
//! | tag          | payload                                   |
//! |--------------|-------------------------------------------|
//! | `$undefined` | anything                                  |
//! | `$number`    | `"NaN"`, `"Infinity"`, `"-Infinity"`, digits |
//! | `$bigint`    | decimal digits as a string                |
//! | `$date`      | RFC 3339 timestamp                        |
//! | `$regexp`    | `"/source/flags"` or `{source, flags}`    |
//! | `$symbol`    | description or `null`                     |
//! | `$symbolFor` | registry key                              |
//! | `$map`       | list of `[key, value]` pairs              |
//! | `$set`       | list of values                            |
//! | `$function`  | name, `null`, or `{name, props}`          |
//! | `$element`   | `{type, props, key}`                      |
//! | `$object`    | an object taken literally                 |
//!
//! Objects with any other shape decode as plain objects.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::{Map as JsonMap, Value as Json};

use crate::error::DecodeError;
use crate::value::{
    BigInt, Element, Function, Object, RegExp, Shared, Symbol, Value, ValueMap, ValueSet,
};

static REGEXP_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^/(.*)/([a-z]*)$").expect("REGEXP_LITERAL regex is invalid")
});

/// Decoder for JSON input.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    tagged: bool,
}

impl Default for Decoder {
    fn default() -> Self {
        Self { tagged: true }
    }
}

impl Decoder {
    /// A decoder that recognises `$`-tags.
    pub fn tagged() -> Self {
        Self { tagged: true }
    }

    /// A decoder that reads plain JSON only.
    pub fn plain() -> Self {
        Self { tagged: false }
    }

    /// Parse and decode JSON text.
    pub fn decode_str(&self, text: &str) -> Result<Value, DecodeError> {
        let json: Json = serde_json::from_str(text)?;
        self.decode(&json)
    }

    /// Decode an already-parsed JSON document.
    pub fn decode(&self, json: &Json) -> Result<Value, DecodeError> {
        if self.tagged {
            decode_tagged(json, "")
        } else {
            Ok(Value::from(json.clone()))
        }
    }
}

fn decode_tagged(json: &Json, pointer: &str) -> Result<Value, DecodeError> {
    match json {
        Json::Array(items) => {
            let values = items
                .iter()
                .enumerate()
                .map(|(i, item)| decode_tagged(item, &child_pointer(pointer, &i.to_string())))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::array(values))
        }
        Json::Object(props) => {
            if props.len() == 1 {
                if let Some((tag, payload)) = props.iter().next() {
                    if let Some(value) = decode_tag(tag, payload, pointer)? {
                        return Ok(value);
                    }
                }
            }
            decode_object(props, pointer).map(|o| Value::Object(Shared::new(o)))
        }
        scalar => Ok(Value::from(scalar.clone())),
    }
}

fn decode_object(props: &JsonMap<String, Json>, pointer: &str) -> Result<Object, DecodeError> {
    let mut object = Object::new();
    for (key, value) in props {
        object.insert(key.clone(), decode_tagged(value, &child_pointer(pointer, key))?);
    }
    Ok(object)
}

/// Decode a tagged value; `Ok(None)` if `tag` is not a known tag.
fn decode_tag(tag: &str, payload: &Json, pointer: &str) -> Result<Option<Value>, DecodeError> {
    let inner = child_pointer(pointer, tag);
    let invalid = |reason: &str| DecodeError::InvalidTag {
        tag: tag.to_string(),
        pointer: display_pointer(pointer),
        reason: reason.to_string(),
    };

    let value = match tag {
        "$undefined" => Value::Undefined,
        "$number" => match payload {
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => match s.trim() {
                "NaN" => Value::Number(f64::NAN),
                "Infinity" | "+Infinity" => Value::Number(f64::INFINITY),
                "-Infinity" => Value::Number(f64::NEG_INFINITY),
                other => Value::Number(other.parse().map_err(|_| invalid("not a number"))?),
            },
            _ => return Err(invalid("expected a string or number")),
        },
        "$bigint" => {
            let text = match payload {
                Json::String(s) => s.clone(),
                Json::Number(n) => n.to_string(),
                _ => return Err(invalid("expected a string of digits")),
            };
            let n: BigInt = text.parse().map_err(|source| DecodeError::Value {
                pointer: display_pointer(pointer),
                source,
            })?;
            Value::BigInt(n)
        }
        "$date" => {
            let text = payload.as_str().ok_or_else(|| invalid("expected a timestamp string"))?;
            let date = DateTime::parse_from_rfc3339(text).map_err(|e| invalid(&e.to_string()))?;
            Value::Date(date.with_timezone(&Utc))
        }
        "$regexp" => {
            let (source, flags) = match payload {
                Json::String(literal) => {
                    let caps = REGEXP_LITERAL
                        .captures(literal)
                        .ok_or_else(|| invalid("expected /source/flags"))?;
                    (caps[1].to_string(), caps[2].to_string())
                }
                Json::Object(parts) => (
                    parts.get("source").and_then(Json::as_str).unwrap_or_default().to_string(),
                    parts.get("flags").and_then(Json::as_str).unwrap_or_default().to_string(),
                ),
                _ => return Err(invalid("expected a literal or {source, flags}")),
            };
            let regexp = RegExp::new(&source, &flags).map_err(|source| DecodeError::Value {
                pointer: display_pointer(pointer),
                source,
            })?;
            Value::RegExp(regexp)
        }
        "$symbol" => match payload {
            Json::Null => Value::Symbol(Symbol::new(None)),
            Json::String(s) => Value::Symbol(Symbol::new(Some(s.as_str()))),
            _ => return Err(invalid("expected a description or null")),
        },
        "$symbolFor" => {
            let key = payload.as_str().ok_or_else(|| invalid("expected a registry key"))?;
            Value::Symbol(Symbol::registered(key))
        }
        "$map" => {
            let pairs = payload.as_array().ok_or_else(|| invalid("expected a list of pairs"))?;
            let mut map = ValueMap::new();
            for (i, pair) in pairs.iter().enumerate() {
                let at = child_pointer(&inner, &i.to_string());
                match pair.as_array().map(Vec::as_slice) {
                    Some([k, v]) => map.insert(
                        decode_tagged(k, &child_pointer(&at, "0"))?,
                        decode_tagged(v, &child_pointer(&at, "1"))?,
                    ),
                    _ => return Err(invalid("every entry must be a [key, value] pair")),
                }
            }
            Value::Map(Shared::new(map))
        }
        "$set" => {
            let items = payload.as_array().ok_or_else(|| invalid("expected a list"))?;
            let mut set = ValueSet::new();
            for (i, item) in items.iter().enumerate() {
                set.insert(decode_tagged(item, &child_pointer(&inner, &i.to_string()))?);
            }
            Value::Set(Shared::new(set))
        }
        "$function" => match payload {
            Json::Null => Value::function(Function::anonymous()),
            Json::String(name) => Value::function(Function::named(name)),
            Json::Object(parts) => {
                let name = parts.get("name").and_then(Json::as_str).map(str::to_string);
                let props = match parts.get("props") {
                    Some(Json::Object(props)) => decode_object(props, &child_pointer(&inner, "props"))?,
                    None | Some(Json::Null) => Object::new(),
                    Some(_) => return Err(invalid("props must be an object")),
                };
                Value::function(Function { name, props })
            }
            _ => return Err(invalid("expected a name, null or {name, props}")),
        },
        "$element" => {
            let parts = payload.as_object().ok_or_else(|| invalid("expected {type, props}"))?;
            let element_type = match parts.get("type") {
                Some(t) => decode_tagged(t, &child_pointer(&inner, "type"))?,
                None => return Err(invalid("missing type")),
            };
            let props = match parts.get("props") {
                Some(Json::Object(props)) => decode_object(props, &child_pointer(&inner, "props"))?,
                None | Some(Json::Null) => Object::new(),
                Some(_) => return Err(invalid("props must be an object")),
            };
            let element = Element::new(element_type, props);
            match parts.get("key").and_then(Json::as_str) {
                Some(key) => Value::element(element.with_key(key)),
                None => Value::element(element),
            }
        }
        "$object" => {
            let props = payload.as_object().ok_or_else(|| invalid("expected an object"))?;
            let object = props
                .iter()
                .map(|(k, v)| Ok((k.clone(), decode_tagged(v, &child_pointer(&inner, k))?)))
                .collect::<Result<Vec<(String, Value)>, DecodeError>>()?;
            Value::object(object)
        }
        _ => return Ok(None),
    };
    Ok(Some(value))
}

/// Extend a JSON pointer with one reference token.
fn child_pointer(pointer: &str, token: &str) -> String {
    format!("{}/{}", pointer, token.replace('~', "~0").replace('/', "~1"))
}

fn display_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{ValueCategory, classify, format_value};

    fn decode(text: &str) -> Value {
        Decoder::tagged().decode_str(text).unwrap()
    }

    fn shown(value: &Value) -> (ValueCategory, String) {
        let category = classify(value);
        (category, format_value(value, category))
    }

    #[test]
    fn test_plain_json() {
        let value = decode(r#"{"b": [1, 2.5, "x"], "a": null}"#);
        let Value::Object(object) = &value else {
            panic!("expected object");
        };
        assert_eq!(object.read().keys(), vec!["b", "a"]);
    }

    #[test]
    fn test_special_numbers() {
        assert_eq!(shown(&decode(r#"{"$number": "NaN"}"#)).0, ValueCategory::NaN);
        assert_eq!(
            shown(&decode(r#"{"$number": "-Infinity"}"#)),
            (ValueCategory::Infinity, "-Infinity".to_string())
        );
        assert_eq!(shown(&decode(r#"{"$number": "1.5"}"#)).1, "1.5");
    }

    #[test]
    fn test_exotic_scalars() {
        assert_eq!(
            shown(&decode(r#"{"$bigint": "9007199254740993"}"#)),
            (ValueCategory::BigInt, "9007199254740993n".to_string())
        );
        assert_eq!(
            shown(&decode(r#"{"$date": "2024-01-15T10:30:00Z"}"#)),
            (ValueCategory::Date, "2024-01-15T10:30:00.000Z".to_string())
        );
        assert_eq!(
            shown(&decode(r#"{"$regexp": "/test/ig"}"#)),
            (ValueCategory::RegExp, "/test/gi".to_string())
        );
        assert_eq!(
            shown(&decode(r#"{"$regexp": {"source": "a/b", "flags": "m"}}"#)).1,
            "/a\\/b/m"
        );
        assert_eq!(shown(&decode(r#"{"$symbol": "id"}"#)).1, "Symbol(id)");
        assert_eq!(shown(&decode(r#"{"$undefined": null}"#)).0, ValueCategory::Undefined);
    }

    #[test]
    fn test_containers() {
        let map = decode(r#"{"$map": [["user1", "Alice"], [{"$number": "NaN"}, "Bob"]]}"#);
        assert_eq!(shown(&map), (ValueCategory::Map, "Map(2)".to_string()));

        let set = decode(r#"{"$set": ["a", "b", "a"]}"#);
        assert_eq!(shown(&set), (ValueCategory::Set, "Set(2)".to_string()));
    }

    #[test]
    fn test_functions_and_elements() {
        assert_eq!(shown(&decode(r#"{"$function": "calc"}"#)).1, "[Function: calc]");
        assert_eq!(shown(&decode(r#"{"$function": null}"#)).1, "[Function]");

        let element = decode(
            r#"{"$element": {"type": {"$function": {"name": "LoaderImpl", "props": {"displayName": "Loader"}}}, "props": {"size": "xs"}}}"#,
        );
        assert_eq!(shown(&element), (ValueCategory::UiElement, "<Loader />".to_string()));
    }

    #[test]
    fn test_element_key() {
        let keyed = decode(r#"{"$element": {"type": "li", "props": {}, "key": "row-1"}}"#);
        let Value::Element(element) = &keyed else {
            panic!("expected an element, got {:?}", keyed);
        };
        assert_eq!(element.key.as_deref(), Some("row-1"));

        let unkeyed = decode(r#"{"$element": {"type": "li"}}"#);
        let Value::Element(element) = &unkeyed else {
            panic!("expected an element, got {:?}", unkeyed);
        };
        assert_eq!(element.key, None);
    }

    #[test]
    fn test_escape_and_unknown_tags() {
        let literal = decode(r#"{"$object": {"$date": "not a date"}}"#);
        assert_eq!(classify(&literal), ValueCategory::Object);

        let unknown = decode(r#"{"$custom": 1}"#);
        assert_eq!(classify(&unknown), ValueCategory::Object);
    }

    #[test]
    fn test_plain_decoder_ignores_tags() {
        let value = Decoder::plain().decode_str(r#"{"$number": "NaN"}"#).unwrap();
        assert_eq!(classify(&value), ValueCategory::Object);
    }

    #[test]
    fn test_errors_carry_pointer() {
        let err = Decoder::tagged()
            .decode_str(r#"{"when": [{"$date": "yesterday"}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("/when/0"), "{}", err);

        let err = Decoder::tagged().decode_str(r#"{"$bigint": "12x"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Value { .. }));

        assert!(matches!(
            Decoder::tagged().decode_str("{not json"),
            Err(DecodeError::Json(_))
        ));
    }
}
