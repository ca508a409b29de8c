use crate::value::Value;
use serde::{Deserialize, Serialize};

/// How the rules of a [`Condition`] combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionMode {
    #[default]
    And,
    Or,
}

/// Comparison applied by a single [`ConditionRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionOperator {
    Equal,
    NotEqual,
    IsNull,
    IsNotNull,
    IsEmpty,
    IsNotEmpty,
    /// Any operator this version does not recognize. Evaluates permissively
    /// to `true` so a newer operator never hides fields unexpectedly.
    #[serde(other)]
    Unrecognized,
}

/// A single comparison against the flat value map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRule {
    /// Dotted path of the field whose live value is inspected.
    pub field: String,
    pub operator: ConditionOperator,
    /// Literal to compare against, or a `"{{path}}"` reference resolved
    /// against the flat value map at evaluation time.
    #[serde(default)]
    pub value: Value,
}

impl ConditionRule {
    pub fn new(
        field: impl Into<String>,
        operator: ConditionOperator,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

/// Boolean visibility expression over current form values.
///
/// A node carrying no condition at all is always visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default, rename = "condition")]
    pub mode: ConditionMode,
    pub rules: Vec<ConditionRule>,
}

impl Condition {
    /// True iff every rule matches.
    pub fn all(rules: Vec<ConditionRule>) -> Self {
        Self {
            mode: ConditionMode::And,
            rules,
        }
    }

    /// True iff at least one rule matches.
    pub fn any(rules: Vec<ConditionRule>) -> Self {
        Self {
            mode: ConditionMode::Or,
            rules,
        }
    }
}
