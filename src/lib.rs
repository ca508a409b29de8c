//! # Dynaform - Declarative Form Evaluation Engine
//!
//! **Dynaform** is the evaluation core of a dynamic form: given a tree of
//! field and group declarations (with conditional visibility rules,
//! validation rules and nesting), it derives the currently-visible tree, the
//! validation rule set and the structured output on every value change, and
//! drives the caller's collaborators for validation, submit, change
//! notification and widget rendering. It draws nothing itself: what a "text
//! field" looks like is entirely the rendering collaborator's business.
//!
//! ## Core Workflow
//!
//! 1. **Declare the form**: build a `Vec<SchemaNode>` of fields, groups and
//!    separators (or load one from JSON; the whole model derives serde).
//! 2. **Build a session**: `FormSession::builder(fields)` takes the initial
//!    structured values, the options, and the collaborators, then `build()`
//!    flattens the values and computes the first derived state.
//! 3. **React to edits**: each widget edit goes through `set_field(path,
//!    value)`; the session recomputes visibility, rules and validity, and
//!    notifies the changes callback (guarded against caller feedback loops).
//! 4. **Submit**: `submit()` validates, structures the values (defaulting
//!    absent visible fields to null) and hands them to the submit handler.
//!
//! ## Quick Start
//!
//! ```rust
//! use dynaform::prelude::*;
//! use serde_json::json;
//!
//! // 1. Declare the form: username gates the password field.
//! let fields: Vec<SchemaNode> = vec![
//!     FieldNode::new("username", FieldKind::Text)
//!         .with_validations(json!({ "required": true }))
//!         .into(),
//!     FieldNode::new("password", FieldKind::Password)
//!         .with_condition(Condition::all(vec![ConditionRule::new(
//!             "username",
//!             ConditionOperator::IsNotEmpty,
//!             Value::Null,
//!         )]))
//!         .into(),
//! ];
//!
//! // 2. Collaborators: a required-field validator and a submit handler.
//! let validator = |values: &FlatValues, rules: &RuleSet| {
//!     let mut errors = ErrorMap::new();
//!     for (path, rule) in rules.iter() {
//!         let required = rule.get("required").and_then(|r| r.as_bool()).unwrap_or(false);
//!         if required && !values.get(path).is_some_and(Value::is_truthy) {
//!             errors.insert(path.clone(), format!("{} is required", path));
//!         }
//!     }
//!     Validation::from_errors(errors)
//! };
//!
//! let mut session = FormSession::builder(fields)
//!     .validator(validator)
//!     .on_submit(|values: ValueTree| {
//!         println!("submitted {} field(s)", values.len());
//!         SubmitDisposition::Completed
//!     })
//!     .build();
//!
//! // 3. React to edits: the password field appears once username is set.
//! assert_eq!(session.visible_fields().len(), 1);
//! session.set_field("username", "lorem");
//! assert_eq!(session.visible_fields().len(), 2);
//!
//! // 4. Submit: validation passes, the handler runs synchronously.
//! let outcome = session.submit().unwrap();
//! assert_eq!(outcome, SubmitOutcome::Submitted);
//! ```

pub mod error;
pub mod eval;
pub mod path;
pub mod prelude;
pub mod render;
pub mod schema;
pub mod session;
pub mod value;
