use super::Condition;
use serde::{Deserialize, Serialize};

/// A decorative marker between fields.
///
/// Never carries a value or a validation rule, but is still subject to its
/// visibility condition like any other node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeparatorNode {
    #[serde(default, rename = "conditions", skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_class: Option<String>,
}

impl SeparatorNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }
}
