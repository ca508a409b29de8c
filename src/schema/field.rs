use super::Condition;
use serde::{Deserialize, Serialize};

/// Kinds of data-bearing input widgets a field can request.
///
/// The engine never interprets the kind itself; it is handed to the rendering
/// collaborator untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldKind {
    Text,
    TextArea,
    Password,
    Number,
    Date,
    DateRange,
    Email,
    Select,
    MultiSelect,
    Checkbox,
}

/// A leaf input declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldNode {
    /// Identifier, unique within the immediate parent scope.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Opaque validation descriptor, passed through to the validation
    /// collaborator without interpretation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validations: Option<serde_json::Value>,
    #[serde(default, rename = "conditions", skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_class: Option<String>,
}

impl FieldNode {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            validations: None,
            condition: None,
            placeholder: None,
            help_text: None,
            style_class: None,
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_validations(mut self, validations: serde_json::Value) -> Self {
        self.validations = Some(validations);
        self
    }
}
