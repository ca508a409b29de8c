//! Common test utilities for building declaration trees, values and
//! collaborators.
use dynaform::prelude::*;
use serde_json::json;

/// A `username` field plus a `password` field gated on username being
/// non-empty.
#[allow(dead_code)]
pub fn gated_password_fields() -> Vec<SchemaNode> {
    vec![
        FieldNode::new("username", FieldKind::Text).into(),
        FieldNode::new("password", FieldKind::Password)
            .with_condition(Condition::all(vec![ConditionRule::new(
                "username",
                ConditionOperator::IsNotEmpty,
                Value::Null,
            )]))
            .into(),
    ]
}

/// A top-level `password` field plus a named `privacy` group holding
/// `username` and `date`.
#[allow(dead_code)]
pub fn privacy_group_fields() -> Vec<SchemaNode> {
    vec![
        FieldNode::new("password", FieldKind::Password).into(),
        GroupNode::named(
            "privacy",
            vec![
                FieldNode::new("username", FieldKind::Text).into(),
                FieldNode::new("date", FieldKind::Date).into(),
            ],
        )
        .into(),
    ]
}

/// A validator enforcing `{"required": true}` descriptors: a required field
/// whose value is empty (per the loose truthiness check) gets an error.
#[allow(dead_code)]
pub fn required_validator() -> impl Fn(&FlatValues, &RuleSet) -> Validation + 'static {
    |values, rules| {
        let mut errors = ErrorMap::new();
        for (path, rule) in rules.iter() {
            let required = rule
                .get("required")
                .and_then(|flag| flag.as_bool())
                .unwrap_or(false);
            if required && !values.get(path).is_some_and(Value::is_truthy) {
                errors.insert(path.clone(), format!("{} is required", path));
            }
        }
        Validation::from_errors(errors)
    }
}

/// The opaque descriptor consumed by [`required_validator`].
#[allow(dead_code)]
pub fn required_rule() -> serde_json::Value {
    json!({ "required": true })
}

/// Builds a value tree from string keys.
#[allow(dead_code)]
pub fn tree(entries: Vec<(&str, ValueNode)>) -> ValueTree {
    entries
        .into_iter()
        .map(|(key, node)| (key.to_string(), node))
        .collect()
}

/// Builds a flat value map from string keys.
#[allow(dead_code)]
pub fn flat(entries: Vec<(&str, Value)>) -> FlatValues {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
