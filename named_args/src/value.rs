use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A scalar argument value.
///
/// Values are replaced, never mutated, when a key is reassigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Real(f64),
    Bool(bool),
    Str(String),
}

/// The tag of a [`Value`], without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Real,
    Bool,
    Str,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Real(_) => ValueKind::Real,
            Value::Bool(_) => ValueKind::Bool,
            Value::Str(_) => ValueKind::Str,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r:?}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Int => "integer",
            ValueKind::Real => "real",
            ValueKind::Bool => "boolean",
            ValueKind::Str => "string",
        };
        write!(f, "{name}")
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Real(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

/// Scalar types a typed accessor can return.
///
/// Conversion is exact: an integer is never handed out as a real, and no
/// value is formatted into a string.
pub trait FromValue: Sized {
    const KIND: ValueKind;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    const KIND: ValueKind = ValueKind::Real;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }
}

impl FromValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromValue for String {
    const KIND: ValueKind = ValueKind::Str;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_implicit_conversions() {
        assert_eq!(f64::from_value(&Value::Int(3)), None);
        assert_eq!(i64::from_value(&Value::Real(3.0)), None);
        assert_eq!(String::from_value(&Value::Bool(true)), None);
        assert_eq!(bool::from_value(&Value::Str("true".to_string())), None);
        assert_eq!(i64::from_value(&Value::from(7u32)), Some(7));
    }

    #[test]
    fn kinds() {
        assert_eq!(Value::from(1).kind(), ValueKind::Int);
        assert_eq!(Value::from(1.5f32).kind(), ValueKind::Real);
        assert_eq!(Value::from(false).kind(), ValueKind::Bool);
        assert_eq!(Value::from("x").kind(), ValueKind::Str);
        assert_eq!(ValueKind::Bool.to_string(), "boolean");
    }

    #[test]
    fn displays() {
        assert_eq!(Value::Int(-4).to_string(), "-4");
        assert_eq!(Value::Real(2.0).to_string(), "2.0");
        assert_eq!(Value::Real(1E-10).to_string(), "1e-10");
        assert_eq!(Value::Str("a b".to_string()).to_string(), "a b");
    }
}
