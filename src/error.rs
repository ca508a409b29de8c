use thiserror::Error;

/// Errors reported when sanity-checking a field declaration tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Duplicate sibling name '{name}' in scope '{scope}' collides in the flat value map")]
    DuplicateSiblingName { name: String, scope: String },
}

/// Errors surfaced by the form session state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("A submit is already in flight; the session must return to idle first")]
    SubmitInFlight,
}
