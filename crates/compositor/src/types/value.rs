use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::Fragment;

/// An already-resolved argument or result of a text function.
///
/// The template engine resolves every argument before calling a function,
/// so a function only ever sees booleans, numbers, and text.
///
/// # Example
///
/// ```
/// use compositor::Value;
///
/// let count: Value = 42.into();
/// let rate: Value = 1.5.into();
/// let name: Value = "Inbox".into();
///
/// assert_eq!(count.as_integer(), Some(42));
/// assert_eq!(rate.as_number(), Some(1.5));
/// assert_eq!(name.as_text(), Some("Inbox"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),

    /// A whole number (window ids, rounded percentages).
    Integer(i64),

    /// A floating-point number (speech rate, progress).
    Number(f64),

    /// Text, possibly carrying separator markers.
    Text(Fragment),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float; integers widen.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(fragment) => Some(fragment.text()),
            _ => None,
        }
    }

    pub fn as_fragment(&self) -> Option<&Fragment> {
        match self {
            Value::Text(fragment) => Some(fragment),
            _ => None,
        }
    }

    /// Short type name used in argument errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(fragment) => write!(f, "{fragment}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(Fragment::from(s))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(Fragment::from(s))
    }
}

impl From<Fragment> for Value {
    fn from(fragment: Fragment) -> Self {
        Value::Text(fragment)
    }
}

/// Serialized form of a value in scenario files and JSON output.
///
/// JSON has no separate integer type, so whole numbers become `Integer`
/// and everything else with a decimal point becomes `Number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlainValue {
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl From<PlainValue> for Value {
    fn from(value: PlainValue) -> Self {
        match value {
            PlainValue::Bool(b) => Value::Bool(b),
            PlainValue::Integer(n) => Value::Integer(n),
            PlainValue::Number(n) => Value::Number(n),
            PlainValue::Text(s) => Value::from(s),
        }
    }
}

impl From<&Value> for PlainValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => PlainValue::Bool(*b),
            Value::Integer(n) => PlainValue::Integer(*n),
            Value::Number(n) => PlainValue::Number(*n),
            Value::Text(fragment) => PlainValue::Text(fragment.text().to_string()),
        }
    }
}
