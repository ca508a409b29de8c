//! Caller-supplied collaborators driven by the form session.

use crate::eval::RuleSet;
use crate::value::{ErrorMap, FlatValues, ValueTree};

/// Result of one validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub errors: ErrorMap,
    pub is_valid: bool,
}

impl Validation {
    /// A pass with no findings.
    pub fn valid() -> Self {
        Self {
            errors: ErrorMap::new(),
            is_valid: true,
        }
    }

    /// A pass whose validity follows from the collected messages.
    pub fn from_errors(errors: ErrorMap) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// External validation collaborator: checks the flat values against the
/// compiled rule set.
///
/// Must be pure with respect to its inputs; the session re-runs it on every
/// value change.
pub trait Validator {
    fn validate(&self, values: &FlatValues, rules: &RuleSet) -> Validation;
}

impl<F> Validator for F
where
    F: Fn(&FlatValues, &RuleSet) -> Validation,
{
    fn validate(&self, values: &FlatValues, rules: &RuleSet) -> Validation {
        self(values, rules)
    }
}

/// What a submit handler did with the structured values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDisposition {
    /// The handler finished synchronously.
    Completed,
    /// The handler started asynchronous work; the session stays in
    /// [`SessionState::Submitting`](super::SessionState::Submitting) until
    /// [`FormSession::finish_submit`](super::FormSession::finish_submit) is
    /// called.
    Pending,
}

/// External submit collaborator, invoked only when validation passes.
pub trait SubmitHandler {
    fn on_submit(&mut self, values: ValueTree) -> SubmitDisposition;
}

impl<F> SubmitHandler for F
where
    F: FnMut(ValueTree) -> SubmitDisposition,
{
    fn on_submit(&mut self, values: ValueTree) -> SubmitDisposition {
        self(values)
    }
}

pub(crate) type ChangesCallback = Box<dyn FnMut(&ValueTree, bool)>;
pub(crate) type CancelCallback = Box<dyn FnMut()>;
