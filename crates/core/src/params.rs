//! Lenient helpers for pulling typed fields out of raw `serde_json::Value` input.
//!
//! Gradients and stops arrive from the host as loosely typed JSON. These
//! helpers never fail: a missing or unusable field yields the caller's
//! default, so numeric garbage is coerced instead of rejected.

use serde_json::Value;

/// Interprets a JSON value as a finite number.
///
/// Accepts JSON numbers and numeric strings (`"42"`, `" 1.5 "`). Anything
/// else, including NaN and infinities, yields `None`.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Truthiness of a loosely typed flag.
///
/// `null`, `false`, `0`, and `""` are false; everything else is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Extracts a finite `f64` from `params[name]`, returning `default` if missing or unusable.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(coerce_f64).unwrap_or(default)
}

/// Extracts the truthiness of `params[name]`; a missing key is `false`.
pub fn param_flag(params: &Value, name: &str) -> bool {
    params.get(name).is_some_and(is_truthy)
}

/// Extracts a string slice from `params[name]`, if present and a string.
pub fn param_str<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(Value::as_str)
}
