use ahash::AHashMap;
use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single form field value at runtime.
///
/// Variant order matters for untagged deserialization: booleans and numbers
/// are tried before dates, and dates before plain text, so `"2024-05-01"`
/// loads as a date while `"lorem"` stays text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Date(NaiveDate),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// Loose emptiness check used by the `isempty`/`isnull` operator family.
    ///
    /// Caveat: `0`, NaN and `false` count as empty, exactly like the empty
    /// string. Dates and lists are never empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Date(_) => true,
            Value::Text(s) => !s.is_empty(),
            Value::List(_) => true,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Date(d) => write!(f, "{}", d),
            Value::Text(s) => write!(f, "{}", s),
            Value::List(values) => write!(f, "[{}]", values.iter().join(", ")),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

/// One node of the nested (structured) value representation.
///
/// Objects nest as branches; everything else, including lists and dates, is a
/// leaf the codec never descends into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueNode {
    Branch(ValueTree),
    Leaf(Value),
}

impl ValueNode {
    pub fn leaf(value: impl Into<Value>) -> Self {
        ValueNode::Leaf(value.into())
    }

    pub fn branch(children: ValueTree) -> Self {
        ValueNode::Branch(children)
    }

    /// Returns the leaf value, or `None` for a branch.
    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            ValueNode::Leaf(value) => Some(value),
            ValueNode::Branch(_) => None,
        }
    }
}

/// Nested value mapping, the shape callers supply and receive at the boundary.
pub type ValueTree = AHashMap<String, ValueNode>;

/// Dotted-path keyed value state, the canonical runtime representation.
///
/// A path absent from the map is "undefined" and is distinct from an explicit
/// [`Value::Null`] entry; equality conditions can tell the two apart.
pub type FlatValues = AHashMap<String, Value>;

/// Dotted-path keyed validation messages for currently-invalid visible fields.
pub type ErrorMap = AHashMap<String, String>;
