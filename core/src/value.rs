//! Constant values for predicate operands.
//!
//! Predicates compare a variable against either another variable or one of
//! these constants: booleans, longs, doubles, strings and date-times.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A constant operand.
#[derive(Debug, Clone)]
pub enum Value {
    /// Boolean value.
    Boolean(bool),
    /// 64-bit signed integer.
    Long(i64),
    /// 64-bit floating point.
    Double(f64),
    /// UTF-8 string.
    String(String),
    /// Date-time as milliseconds since Unix epoch.
    DateTime(i64),
}

// Doubles compare by bit pattern so that Value can be used as a hash key.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Boolean(b) => b.hash(state),
            Value::Long(i) | Value::DateTime(i) => i.hash(state),
            Value::Double(d) => d.to_bits().hash(state),
            Value::String(s) => s.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Long(i) => write!(f, "{}", i),
            Value::Double(d) => write!(f, "{:?}", d),
            Value::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            Value::DateTime(t) => write!(f, "{}", t),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Long(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Long(i as i64)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
