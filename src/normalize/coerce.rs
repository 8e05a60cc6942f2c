//! Lenient scalar coercion applied after field resolution.
//!
//! Each function returns `None` when the value cannot be read as the target
//! type; callers decide the default.

use serde_json::Value;

use crate::constants::TRUTHY_STRINGS;

/// Text form of a scalar. Containers and `null` have none.
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Numeric reading with JavaScript `Number(...)` leniency: surrounding
/// whitespace is ignored, booleans count as 0/1, and anything that would be
/// `NaN` or infinite is `None`.
pub fn to_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::String(s) => parse_number(s)?,
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    Some(number).filter(|n| n.is_finite())
}

/// Integer reading; fractional values are truncated toward zero
pub fn to_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) if n.is_i64() => n.as_i64(),
        _ => {
            let number = to_number(value)?.trunc();
            if number >= i64::MIN as f64 && number <= i64::MAX as f64 {
                Some(number as i64)
            } else {
                None
            }
        }
    }
}

/// Boolean reading: `true`, any non-zero number, or one of the truthy strings
pub fn to_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => {
            let lowered = s.trim().to_lowercase();
            TRUTHY_STRINGS.contains(&lowered.as_str())
        }
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        // Number("   ") is 0 in JavaScript
        return Some(0.0);
    }
    if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        return i64::from_str_radix(hex, 16).ok().map(|n| n as f64);
    }
    // Rust accepts "inf" and "nan" spellings that Number() rejects
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(&json!("12B")), Some("12B".to_string()));
        assert_eq!(to_text(&json!(12)), Some("12".to_string()));
        assert_eq!(to_text(&json!(true)), Some("true".to_string()));
        assert_eq!(to_text(&json!({"a": 1})), None);
        assert_eq!(to_text(&Value::Null), None);
    }

    #[test]
    fn test_to_number_follows_number_semantics() {
        assert_eq!(to_number(&json!("47")), Some(47.0));
        assert_eq!(to_number(&json!(" 36.6 ")), Some(36.6));
        assert_eq!(to_number(&json!("1e2")), Some(100.0));
        assert_eq!(to_number(&json!("0x1A")), Some(26.0));
        assert_eq!(to_number(&json!("   ")), Some(0.0));
        assert_eq!(to_number(&json!(false)), Some(0.0));
        assert_eq!(to_number(&json!("47 years")), None);
        assert_eq!(to_number(&json!("NaN")), None);
        assert_eq!(to_number(&json!("inf")), None);
        assert_eq!(to_number(&json!([1])), None);
    }

    #[test]
    fn test_to_integer_truncates() {
        assert_eq!(to_integer(&json!(47)), Some(47));
        assert_eq!(to_integer(&json!("47.9")), Some(47));
        assert_eq!(to_integer(&json!(-3.5)), Some(-3));
        assert_eq!(to_integer(&json!("1e30")), None);
        assert_eq!(to_integer(&json!("abc")), None);
    }

    #[test]
    fn test_to_flag() {
        for truthy in [json!(true), json!(1), json!("Yes"), json!(" y "), json!("TRUE"), json!("1"), json!("on")] {
            assert!(to_flag(&truthy), "{truthy} should be truthy");
        }
        for falsy in [json!(false), json!(0), json!("No"), json!("0"), json!("maybe"), json!(null), json!({})] {
            assert!(!to_flag(&falsy), "{falsy} should be falsy");
        }
    }
}
