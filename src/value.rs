//! Dynamically typed list elements
//!
//!     A `SimpleLinkedList<Value>` accepts any variant for its first element and
//!     from then on only that variant, which is how the runner reproduces the
//!     "one kind per list" rule for values read from the command line.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::list::{Element, ElementKind};

pub const INT: ElementKind = ElementKind::new("int");
pub const FLOAT: ElementKind = ElementKind::new("float");
pub const BOOL: ElementKind = ElementKind::new("bool");
pub const STR: ElementKind = ElementKind::new("str");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl Element for Value {
    fn kind(&self) -> ElementKind {
        match self {
            Value::Int(_) => INT,
            Value::Float(_) => FLOAT,
            Value::Bool(_) => BOOL,
            Value::Str(_) => STR,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            // Debug keeps the fractional part, so 1.0 does not render as 1
            Value::Float(value) => write!(f, "{:?}", value),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Str(value) => f.write_str(value),
        }
    }
}

/// Parses integers, then finite floats, then `true`/`false`; anything else is
/// kept as a string.
impl FromStr for Value {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.parse::<i64>() {
            return Ok(Value::Int(value));
        }
        if let Ok(value) = s.parse::<f64>() {
            if value.is_finite() {
                return Ok(Value::Float(value));
            }
        }
        Ok(match s {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::Str(s.to_string()),
        })
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Value {
        match s.parse() {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    #[test]
    fn parses_in_priority_order() {
        assert_eq!(parse("5"), Value::Int(5));
        assert_eq!(parse("-12"), Value::Int(-12));
        assert_eq!(parse("2.5"), Value::Float(2.5));
        assert_eq!(parse("true"), Value::Bool(true));
        assert_eq!(parse("apple"), Value::Str("apple".into()));
        assert_eq!(parse("inf"), Value::Str("inf".into()));
    }

    #[test]
    fn kind_follows_variant() {
        assert_eq!(Value::from(1_i64).kind(), INT);
        assert_eq!(Value::from("a").kind(), STR);
        assert_ne!(Value::from(1.5_f64).kind(), Value::from(1_i64).kind());
    }

    #[test]
    fn display_is_bare() {
        assert_eq!(Value::from("apple").to_string(), "apple");
        assert_eq!(Value::from(1.0_f64).to_string(), "1.0");
        assert_eq!(Value::from(false).to_string(), "false");
    }

    #[test]
    fn serializes_untagged() {
        let values = vec![Value::from(1_i64), Value::from("a")];
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"[1,"a"]"#);
    }
}
