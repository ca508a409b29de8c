//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! dynaform crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust
//! use dynaform::prelude::*;
//!
//! let fields = vec![
//!     FieldNode::new("username", FieldKind::Text).into(),
//!     FieldNode::new("password", FieldKind::Password)
//!         .with_condition(Condition::all(vec![ConditionRule::new(
//!             "username",
//!             ConditionOperator::IsNotEmpty,
//!             Value::Null,
//!         )]))
//!         .into(),
//! ];
//!
//! let mut session = FormSession::builder(fields).build();
//! assert_eq!(session.visible_fields().len(), 1);
//!
//! session.set_field("username", "lorem");
//! assert_eq!(session.visible_fields().len(), 2);
//! ```

// Session controller and collaborators
pub use crate::session::{
    FormSession, SessionBuilder, SessionOptions, SessionState, SubmitDisposition, SubmitHandler,
    SubmitOutcome, Validation, Validator,
};

// Declaration tree model
pub use crate::schema::{
    Condition, ConditionMode, ConditionOperator, ConditionRule, FieldKind, FieldNode, GroupNode,
    GroupText, SchemaNode, SeparatorNode, validate_declaration,
};

// Values and derived-state building blocks
pub use crate::eval::{RuleSet, compile_rules, condition_matches, filter_visible, rule_matches};
pub use crate::path::{PATH_SEPARATOR, flatten, join_path, structure};
pub use crate::value::{ErrorMap, FlatValues, Value, ValueNode, ValueTree};

// Rendering seam
pub use crate::render::{FieldContext, FormRenderer};

// Error types
pub use crate::error::{SchemaError, SessionError};
