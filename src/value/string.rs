//! Host string conversion (`String(value)`)

use chrono::{DateTime, Datelike, Utc};

use super::Value;

/// Format a number the way the host prints it: integral values without a
/// fraction, exponent notation outside `[1e-6, 1e21)`, and `-0` as `0`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }
    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

/// ISO-8601 timestamp with millisecond precision, as the host's
/// `toISOString` writes it. Years outside `0..=9999` use the six-digit
/// extended form with an explicit sign (`+010000-01-01T00:00:00.000Z`).
pub fn to_iso_string(date: &DateTime<Utc>) -> String {
    let year = date.year();
    let rest = date.format("%m-%dT%H:%M:%S%.3fZ");
    if (0..=9999).contains(&year) {
        format!("{:04}-{}", year, rest)
    } else {
        let sign = if year < 0 { '-' } else { '+' };
        format!("{}{:06}-{}", sign, year.unsigned_abs(), rest)
    }
}

/// Convert any value to its host string form.
///
/// Arrays join their items with `,` (absent items join as empty text, and an
/// array reached again while joining itself contributes nothing), plain
/// objects print as `[object Object]`, and functions print a placeholder
/// body since no source text is available.
pub fn to_js_string(value: &Value) -> String {
    let mut joining = Vec::new();
    stringify(value, &mut joining)
}

fn stringify(value: &Value, joining: &mut Vec<usize>) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::BigInt(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Symbol(s) => s.to_string(),
        Value::Array(items) => {
            let id = items.id();
            if joining.contains(&id) {
                return String::new();
            }
            joining.push(id);
            let parts: Vec<String> = items
                .read()
                .iter()
                .map(|item| match item {
                    Value::Undefined | Value::Null => String::new(),
                    other => stringify(other, joining),
                })
                .collect();
            joining.pop();
            parts.join(",")
        }
        Value::Object(_) | Value::Element(_) => "[object Object]".to_string(),
        Value::Map(_) => "[object Map]".to_string(),
        Value::Set(_) => "[object Set]".to_string(),
        Value::Date(d) => d
            .format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
            .to_string(),
        Value::RegExp(r) => r.to_string(),
        Value::Function(f) => {
            let name = f.read().name().unwrap_or_default().to_string();
            format!("function {}() {{ [native code] }}", name)
        }
    }
}
