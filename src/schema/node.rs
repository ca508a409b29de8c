use super::{Condition, FieldNode, GroupNode, SeparatorNode};
use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One node of the form declaration tree.
///
/// Deserialization discriminates structurally: a node carrying `fields` is a
/// group, a node carrying `name` and `type` is a field, anything else is a
/// separator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Group(GroupNode),
    Field(FieldNode),
    Separator(SeparatorNode),
}

impl SchemaNode {
    /// The node's visibility condition, if it declares one.
    pub fn condition(&self) -> Option<&Condition> {
        match self {
            SchemaNode::Group(group) => group.condition.as_ref(),
            SchemaNode::Field(field) => field.condition.as_ref(),
            SchemaNode::Separator(separator) => separator.condition.as_ref(),
        }
    }
}

impl From<FieldNode> for SchemaNode {
    fn from(field: FieldNode) -> Self {
        SchemaNode::Field(field)
    }
}

impl From<GroupNode> for SchemaNode {
    fn from(group: GroupNode) -> Self {
        SchemaNode::Group(group)
    }
}

impl From<SeparatorNode> for SchemaNode {
    fn from(separator: SeparatorNode) -> Self {
        SchemaNode::Separator(separator)
    }
}

/// Checks sibling-name uniqueness across a declaration tree.
///
/// An unnamed group does not open a scope of its own: its children share the
/// enclosing scope's namespace, because their flat paths carry no extra
/// segment. Duplicates are reported with the dotted scope they collide in.
pub fn validate_declaration(nodes: &[SchemaNode]) -> Result<(), SchemaError> {
    check_scope(nodes, "(root)")
}

fn check_scope(nodes: &[SchemaNode], scope: &str) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    collect_names(nodes, scope, &mut seen)
}

fn collect_names(
    nodes: &[SchemaNode],
    scope: &str,
    seen: &mut HashSet<String>,
) -> Result<(), SchemaError> {
    for node in nodes {
        match node {
            SchemaNode::Separator(_) => {}
            SchemaNode::Field(field) => claim(&field.name, scope, seen)?,
            SchemaNode::Group(group) => match &group.name {
                Some(name) => {
                    claim(name, scope, seen)?;
                    let child_scope = if scope == "(root)" {
                        name.clone()
                    } else {
                        format!("{}.{}", scope, name)
                    };
                    check_scope(&group.fields, &child_scope)?;
                }
                // Transparent wrapper: children stay in this scope.
                None => collect_names(&group.fields, scope, seen)?,
            },
        }
    }
    Ok(())
}

fn claim(name: &str, scope: &str, seen: &mut HashSet<String>) -> Result<(), SchemaError> {
    if !seen.insert(name.to_string()) {
        return Err(SchemaError::DuplicateSiblingName {
            name: name.to_string(),
            scope: scope.to_string(),
        });
    }
    Ok(())
}
