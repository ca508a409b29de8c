use super::{Condition, SchemaNode};
use serde::{Deserialize, Serialize};

/// Display-only caption attached to a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupText {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_class: Option<String>,
}

impl GroupText {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style_class: None,
        }
    }
}

/// A nested container of fields, groups and separators.
///
/// An unnamed group is a transparent wrapper: its children keep the parent
/// scope's path prefix. Named siblings at the same depth must be unique or
/// their flat paths collide (see [`validate_declaration`]).
///
/// [`validate_declaration`]: super::validate_declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<GroupText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<GroupText>,
    pub fields: Vec<SchemaNode>,
    #[serde(default, rename = "conditions", skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_class: Option<String>,
}

impl GroupNode {
    /// Creates a transparent (unnamed) group.
    pub fn new(fields: Vec<SchemaNode>) -> Self {
        Self {
            name: None,
            title: None,
            description: None,
            fields,
            condition: None,
            style_class: None,
        }
    }

    /// Creates a named group whose children are prefixed with `name`.
    pub fn named(name: impl Into<String>, fields: Vec<SchemaNode>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(fields)
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_title(mut self, title: GroupText) -> Self {
        self.title = Some(title);
        self
    }
}
