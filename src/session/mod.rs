//! Form session controller: owns the flat value state and error map for one
//! form instance and orchestrates filtering, rule compilation, validation and
//! the submit/cancel lifecycle on every value change.

mod handlers;

pub use handlers::{SubmitDisposition, SubmitHandler, Validation, Validator};
use handlers::{CancelCallback, ChangesCallback};

use crate::error::SessionError;
use crate::eval::{RuleSet, compile_rules, filter_visible};
use crate::path::{flatten, structure};
use crate::render::{FormRenderer, walk_nodes};
use crate::schema::{SchemaNode, validate_declaration};
use crate::value::{ErrorMap, FlatValues, Value, ValueTree};

/// Recognized configuration flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Default visible fields absent from the values to null in structured
    /// output.
    pub null_on_undefined: bool,
    /// Clear all values after a successful submit.
    pub clear_on_submit: bool,
    /// Submit the cleared, null-filled state when the form is cancelled.
    pub submit_on_clear: bool,
    /// Run one validation pass and fire the changes callback on build.
    pub validate_on_init: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            null_on_undefined: true,
            clear_on_submit: false,
            submit_on_clear: false,
            validate_on_init: false,
        }
    }
}

/// Submit lifecycle of one form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No submit pending.
    Idle,
    /// Synchronous validation in progress.
    Validating,
    /// Waiting for an asynchronous submit collaborator to resolve.
    Submitting,
}

/// Outcome of a submit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the handler completed synchronously.
    Submitted,
    /// Validation passed; the handler reported pending asynchronous work.
    Pending,
    /// Validation failed; the error map carries the per-field messages.
    Rejected,
    /// No submit handler is configured. Logged as a warning, not an error.
    Skipped,
}

/// Builder for [`FormSession`], mirroring the declaration/collaborator split
/// at the crate boundary.
pub struct SessionBuilder {
    fields: Vec<SchemaNode>,
    options: SessionOptions,
    initial: Option<ValueTree>,
    validator: Option<Box<dyn Validator>>,
    submit_handler: Option<Box<dyn SubmitHandler>>,
    changes_callback: Option<ChangesCallback>,
    cancel_callback: Option<CancelCallback>,
}

impl SessionBuilder {
    pub fn new(fields: Vec<SchemaNode>) -> Self {
        Self {
            fields,
            options: SessionOptions::default(),
            initial: None,
            validator: None,
            submit_handler: None,
            changes_callback: None,
            cancel_callback: None,
        }
    }

    /// Initial structured values; absent means an empty value state.
    pub fn values(mut self, initial: ValueTree) -> Self {
        self.initial = Some(initial);
        self
    }

    pub fn options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn on_submit(mut self, handler: impl SubmitHandler + 'static) -> Self {
        self.submit_handler = Some(Box::new(handler));
        self
    }

    pub fn on_changes(mut self, callback: impl FnMut(&ValueTree, bool) + 'static) -> Self {
        self.changes_callback = Some(Box::new(callback));
        self
    }

    pub fn on_cancel(mut self, callback: impl FnMut() + 'static) -> Self {
        self.cancel_callback = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> FormSession {
        if cfg!(debug_assertions) {
            if let Err(error) = validate_declaration(&self.fields) {
                log::warn!("declaration tree failed sanity check: {}", error);
            }
        }

        let values = self.initial.as_ref().map(flatten).unwrap_or_default();
        let mut session = FormSession {
            fields: self.fields,
            options: self.options,
            external_values: values.clone(),
            values,
            visible: Vec::new(),
            rules: RuleSet::new(),
            errors: ErrorMap::new(),
            is_valid: true,
            state: SessionState::Idle,
            validator: self.validator,
            submit_handler: self.submit_handler,
            changes_callback: self.changes_callback,
            cancel_callback: self.cancel_callback,
        };
        session.refresh();
        if session.options.validate_on_init {
            // Fires exactly once per session; later edits go through the
            // guarded notification path.
            session.notify_changes();
        }
        session
    }
}

/// A live form instance.
///
/// Owns the flat value map and error map exclusively; derived state (visible
/// tree, rule set, validity) is recomputed on every change and never
/// invalidated manually.
pub struct FormSession {
    fields: Vec<SchemaNode>,
    options: SessionOptions,
    values: FlatValues,
    /// Flattened snapshot of the last externally supplied values; the notify
    /// guard compares against this to break caller feedback loops.
    external_values: FlatValues,
    visible: Vec<SchemaNode>,
    rules: RuleSet,
    errors: ErrorMap,
    is_valid: bool,
    state: SessionState,
    validator: Option<Box<dyn Validator>>,
    submit_handler: Option<Box<dyn SubmitHandler>>,
    changes_callback: Option<ChangesCallback>,
    cancel_callback: Option<CancelCallback>,
}

impl FormSession {
    pub fn builder(fields: Vec<SchemaNode>) -> SessionBuilder {
        SessionBuilder::new(fields)
    }

    /// Merges a single field edit into the flat value state.
    ///
    /// Recomputes all derived state, then fires the changes callback unless
    /// the result is deep-equal to the externally supplied values.
    pub fn set_field(&mut self, path: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(path.into(), value.into());
        self.refresh();
        if self.values != self.external_values {
            self.notify_changes();
        }
    }

    /// Replaces the whole value state from a caller-supplied structured tree.
    ///
    /// This is the external-values path, distinct from user edits: state is
    /// replaced wholesale and the notify guard snapshot moves with it, so no
    /// changes callback fires.
    pub fn set_values(&mut self, structured: &ValueTree) {
        self.values = flatten(structured);
        self.external_values = self.values.clone();
        self.refresh();
    }

    /// Validates the current values and, on success, hands the structured
    /// output to the submit handler.
    ///
    /// Only invocable while idle; a pending asynchronous submit must resolve
    /// via [`FormSession::finish_submit`] first.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SessionError> {
        self.submit_values(None)
    }

    /// Like [`FormSession::submit`], but validates and submits `values`
    /// instead of the live state.
    pub fn submit_with(&mut self, values: &ValueTree) -> Result<SubmitOutcome, SessionError> {
        self.submit_values(Some(flatten(values)))
    }

    /// Marks a pending asynchronous submit as resolved.
    ///
    /// A no-op unless a submit is actually in flight.
    pub fn finish_submit(&mut self) {
        if self.state != SessionState::Submitting {
            return;
        }
        self.state = SessionState::Idle;
        if self.options.clear_on_submit {
            self.clear();
        }
    }

    /// Resets all values to empty.
    ///
    /// With `submit_on_clear`, the cleared state is submitted with an empty
    /// override map, producing a null-filled final submission. The cancel
    /// callback fires last.
    pub fn cancel(&mut self) {
        self.values.clear();
        self.refresh();
        if self.options.submit_on_clear {
            // The submit may be skipped or rejected; the clear still stands.
            let _ = self.submit_values(Some(FlatValues::new()));
        }
        if let Some(callback) = self.cancel_callback.as_mut() {
            callback();
        }
    }

    /// Walks the currently visible tree in declaration order, handing each
    /// field its dotted path, current value and current error.
    pub fn render(&self, renderer: &mut dyn FormRenderer) {
        walk_nodes(&self.visible, None, &self.values, &self.errors, renderer);
    }

    pub fn values(&self) -> &FlatValues {
        &self.values
    }

    pub fn value(&self, path: &str) -> Option<&Value> {
        self.values.get(path)
    }

    /// The pruned tree of currently-visible nodes.
    pub fn visible_fields(&self) -> &[SchemaNode] {
        &self.visible
    }

    /// The rule set compiled from the visible tree.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, path: &str) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Structured snapshot of the current values, null-defaulted per options.
    pub fn structured_values(&self) -> ValueTree {
        structure(&self.visible, &self.values, self.options.null_on_undefined)
    }

    fn refresh(&mut self) {
        self.visible = filter_visible(&self.fields, &self.values);
        self.rules = compile_rules(&self.visible);
        let validation = match &self.validator {
            Some(validator) => validator.validate(&self.values, &self.rules),
            None => Validation::valid(),
        };
        self.is_valid = validation.is_valid;
        self.errors = validation.errors;
        log::debug!(
            "derived state: {} visible node(s), {} rule(s), valid={}",
            self.visible.len(),
            self.rules.len(),
            self.is_valid
        );
    }

    fn notify_changes(&mut self) {
        if self.changes_callback.is_none() {
            return;
        }
        let structured = structure(&self.visible, &self.values, self.options.null_on_undefined);
        if let Some(callback) = self.changes_callback.as_mut() {
            callback(&structured, self.is_valid);
        }
    }

    fn submit_values(
        &mut self,
        override_values: Option<FlatValues>,
    ) -> Result<SubmitOutcome, SessionError> {
        if self.state != SessionState::Idle {
            return Err(SessionError::SubmitInFlight);
        }
        let Some(mut handler) = self.submit_handler.take() else {
            log::warn!("submit requested but no submit handler is configured");
            return Ok(SubmitOutcome::Skipped);
        };

        let values = override_values.unwrap_or_else(|| self.values.clone());

        self.state = SessionState::Validating;
        let validation = match &self.validator {
            Some(validator) => validator.validate(&values, &self.rules),
            None => Validation::valid(),
        };
        self.is_valid = validation.is_valid;
        self.errors = validation.errors;

        if !self.is_valid {
            self.state = SessionState::Idle;
            self.submit_handler = Some(handler);
            log::debug!("submit rejected with {} field error(s)", self.errors.len());
            return Ok(SubmitOutcome::Rejected);
        }

        let structured = structure(&self.visible, &values, self.options.null_on_undefined);
        self.state = SessionState::Submitting;
        let disposition = handler.on_submit(structured);
        self.submit_handler = Some(handler);

        match disposition {
            SubmitDisposition::Completed => {
                self.state = SessionState::Idle;
                if self.options.clear_on_submit {
                    self.clear();
                }
                Ok(SubmitOutcome::Submitted)
            }
            SubmitDisposition::Pending => Ok(SubmitOutcome::Pending),
        }
    }

    /// Clear performed after a successful submit. Unlike [`FormSession::cancel`]
    /// it never re-enters submit, so `clear_on_submit` + `submit_on_clear`
    /// cannot loop.
    fn clear(&mut self) {
        self.values.clear();
        self.refresh();
        if let Some(callback) = self.cancel_callback.as_mut() {
            callback();
        }
    }
}
