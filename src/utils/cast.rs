//! Best-effort scalar coercion for open configuration values.
//!
//! Menu definitions arrive as loosely typed maps (TOML tables, JSON objects).
//! Scalars are coerced leniently: a value of the wrong shape falls back to
//! the type's empty value instead of failing.
//!
//! | Input              | `to_string` | `to_int` |
//! |--------------------|-------------|----------|
//! | `"10"`             | `"10"`      | `10`     |
//! | `10` / `10.9`      | `"10"` / `"10.9"` | `10` |
//! | `true`             | `"true"`    | `1`      |
//! | `null`, `[..]`, `{..}` | `""`    | `0`      |
//! | `"ten"`            | `"ten"`     | `0`      |

use serde_json::Value;

/// Coerce a value to a string.
pub fn to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Coerce a value to an `i32`, saturating out-of-range numbers.
///
/// Floats are truncated toward zero. Strings must hold an integer, or a
/// float with no fractional part (`"3.0"`).
pub fn to_int(value: &Value) -> i32 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .map_or(0, saturate),
        Value::String(s) => parse_int(s.trim()),
        Value::Bool(b) => i32::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}

fn parse_int(s: &str) -> i32 {
    if let Ok(v) = s.parse::<i64>() {
        return saturate(v);
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 => saturate(f as i64),
        _ => 0,
    }
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Short type name of a value, used in error messages.
pub const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_string() {
        assert_eq!(to_string(&json!("about")), "about");
        assert_eq!(to_string(&json!(42)), "42");
        assert_eq!(to_string(&json!(true)), "true");
        assert_eq!(to_string(&json!(null)), "");
        assert_eq!(to_string(&json!(["a"])), "");
    }

    #[test]
    fn test_to_int_numbers() {
        assert_eq!(to_int(&json!(10)), 10);
        assert_eq!(to_int(&json!(-3)), -3);
        assert_eq!(to_int(&json!(10.9)), 10);
        assert_eq!(to_int(&json!(-2.5)), -2);
    }

    #[test]
    fn test_to_int_strings() {
        assert_eq!(to_int(&json!("15")), 15);
        assert_eq!(to_int(&json!(" 7 ")), 7);
        assert_eq!(to_int(&json!("3.0")), 3);
        assert_eq!(to_int(&json!("3.5")), 0);
        assert_eq!(to_int(&json!("heavy")), 0);
    }

    #[test]
    fn test_to_int_other() {
        assert_eq!(to_int(&json!(true)), 1);
        assert_eq!(to_int(&json!(false)), 0);
        assert_eq!(to_int(&json!(null)), 0);
        assert_eq!(to_int(&json!({"a": 1})), 0);
    }

    #[test]
    fn test_to_int_saturates() {
        assert_eq!(to_int(&json!(9_999_999_999_i64)), i32::MAX);
        assert_eq!(to_int(&json!(-9_999_999_999_i64)), i32::MIN);
    }

    #[test]
    fn test_kind() {
        assert_eq!(kind(&json!("x")), "string");
        assert_eq!(kind(&json!([1])), "array");
        assert_eq!(kind(&json!(null)), "null");
    }
}
