//! Visibility condition evaluation: pure functions over a rule and the flat
//! value environment.

use crate::schema::{Condition, ConditionMode, ConditionOperator, ConditionRule};
use crate::value::{FlatValues, Value};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a `{{path}}` dynamic reference anywhere inside a string literal.
static DYNAMIC_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^}]*)\}\}").expect("dynamic reference pattern is valid"));

/// Resolves a rule's comparison operand.
///
/// A string literal containing a `{{path}}` reference reads the live value at
/// that path (inner path trimmed of whitespace); a reference to an absent
/// path resolves to absent. Anything else is the literal itself.
pub fn resolve_comparison<'a>(value: &'a Value, flat: &'a FlatValues) -> Option<&'a Value> {
    if let Value::Text(text) = value {
        if let Some(inner) = DYNAMIC_REF.captures(text).and_then(|captures| captures.get(1)) {
            return flat.get(inner.as_str().trim());
        }
    }
    Some(value)
}

/// Evaluates a single rule against the flat value map.
///
/// Equality compares the looked-up value with the resolved operand; an absent
/// value only equals another absent value, never an explicit null. The
/// null/empty operator family applies the loose truthiness check of
/// [`Value::is_truthy`].
pub fn rule_matches(rule: &ConditionRule, flat: &FlatValues) -> bool {
    let current = flat.get(&rule.field);
    match rule.operator {
        ConditionOperator::Equal => current == resolve_comparison(&rule.value, flat),
        ConditionOperator::NotEqual => current != resolve_comparison(&rule.value, flat),
        ConditionOperator::IsNull | ConditionOperator::IsEmpty => {
            !current.is_some_and(Value::is_truthy)
        }
        ConditionOperator::IsNotNull | ConditionOperator::IsNotEmpty => {
            current.is_some_and(Value::is_truthy)
        }
        // Fail open: an operator this version does not know must not hide fields.
        ConditionOperator::Unrecognized => true,
    }
}

/// Evaluates a full condition against the flat value map.
pub fn condition_matches(condition: &Condition, flat: &FlatValues) -> bool {
    match condition.mode {
        ConditionMode::Or => condition.rules.iter().any(|rule| rule_matches(rule, flat)),
        ConditionMode::And => condition.rules.iter().all(|rule| rule_matches(rule, flat)),
    }
}
