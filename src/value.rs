//! The dynamically typed value tree consumed by the renderer.

use serde_json::Number;

/// A node in the tree being rendered.
///
/// Covers everything a decoded JSON document can hold, plus the handful of
/// runtime shapes callers can construct directly: dates, errors, functions
/// and undefined.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    /// A missing value. Skipped during rendering unless
    /// `render_undefined` is enabled.
    Undefined,
    Bool(bool),
    Number(Number),
    /// A string with no embedded newline.
    String(String),
    /// A string containing at least one embedded newline. Rendered as an
    /// indented block between `"""` delimiters.
    MultilineString(String),
    /// An opaque, pre-formatted instant. Rendered verbatim, never styled.
    Date(String),
    /// An error with a message and its stack frames, one string per frame.
    Error { message: String, stack: Vec<String> },
    /// Opaque callable. Rendered as the fixed literal `function() {}`.
    Function,
    Sequence(Vec<Value>),
    /// Ordered key/value pairs; keys are unique and keep enumeration order.
    Mapping(Vec<(String, Value)>),
}

impl Value {
    /// Builds a string value, picking the multiline variant when the text
    /// contains an embedded newline.
    pub fn string(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.contains('\n') {
            Value::MultilineString(s)
        } else {
            Value::String(s)
        }
    }

    /// Builds a date value from its pre-formatted textual form.
    pub fn date(s: impl Into<String>) -> Self {
        Value::Date(s.into())
    }

    /// Builds an error value from a message and its stack frames.
    pub fn error(message: impl Into<String>, stack: Vec<String>) -> Self {
        Value::Error {
            message: message.into(),
            stack,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::string(s),
            serde_json::Value::Array(elements) => {
                Value::Sequence(elements.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        // Non-finite numbers have no JSON form
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_constructor_splits_on_newline() {
        assert_eq!(Value::string("one line"), Value::String("one line".into()));
        assert_eq!(
            Value::string("two\nlines"),
            Value::MultilineString("two\nlines".into())
        );
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(true)), Value::Bool(true));
        assert_eq!(Value::from(json!("text")), Value::String("text".into()));
        assert_eq!(Value::from(json!(42)), Value::from(42i64));
    }

    #[test]
    fn test_from_json_preserves_key_order() {
        let value = Value::from(json!({"zebra": 1, "apple": 2, "mango": 3}));
        let Value::Mapping(entries) = value else {
            panic!("expected a mapping");
        };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_from_json_nested() {
        let value = Value::from(json!({"items": [1, "a\nb"]}));
        assert_eq!(
            value,
            Value::Mapping(vec![(
                "items".into(),
                Value::Sequence(vec![
                    Value::from(1i64),
                    Value::MultilineString("a\nb".into())
                ])
            )])
        );
    }

    #[test]
    fn test_from_non_finite_float() {
        assert_eq!(Value::from(f64::NAN), Value::Null);
    }
}
