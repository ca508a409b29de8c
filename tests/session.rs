//! Tests for the form session controller lifecycle.
mod common;
use common::*;
use dynaform::error::SessionError;
use dynaform::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_visibility_reacts_to_field_changes() {
    let mut session = FormSession::builder(gated_password_fields()).build();
    assert_eq!(session.visible_fields().len(), 1);

    session.set_field("username", "x");
    assert_eq!(session.visible_fields().len(), 2);

    session.set_field("username", "");
    assert_eq!(session.visible_fields().len(), 1);
}

#[test]
fn test_submit_structures_and_defaults_values() {
    let submitted: Rc<RefCell<Vec<ValueTree>>> = Rc::new(RefCell::new(Vec::new()));
    let captured = Rc::clone(&submitted);

    let mut session = FormSession::builder(privacy_group_fields())
        .on_submit(move |values: ValueTree| {
            captured.borrow_mut().push(values);
            SubmitDisposition::Completed
        })
        .build();

    session.set_field("privacy___username", "lorem ipsum");
    assert_eq!(session.submit().unwrap(), SubmitOutcome::Submitted);

    let submissions = submitted.borrow();
    assert_eq!(submissions.len(), 1);
    let output = &submissions[0];
    assert_eq!(output["password"], ValueNode::Leaf(Value::Null));
    let ValueNode::Branch(privacy) = &output["privacy"] else {
        panic!("expected branch at 'privacy'");
    };
    assert_eq!(privacy["username"], ValueNode::leaf("lorem ipsum"));
    assert_eq!(privacy["date"], ValueNode::Leaf(Value::Null));
}

#[test]
fn test_submit_on_clear_produces_null_filled_submission() {
    let submitted: Rc<RefCell<Vec<ValueTree>>> = Rc::new(RefCell::new(Vec::new()));
    let captured = Rc::clone(&submitted);
    let cancelled = Rc::new(RefCell::new(0));
    let cancel_count = Rc::clone(&cancelled);

    let fields: Vec<SchemaNode> = vec![FieldNode::new("username", FieldKind::Text).into()];
    let mut session = FormSession::builder(fields)
        .options(SessionOptions {
            submit_on_clear: true,
            ..SessionOptions::default()
        })
        .on_submit(move |values: ValueTree| {
            captured.borrow_mut().push(values);
            SubmitDisposition::Completed
        })
        .on_cancel(move || *cancel_count.borrow_mut() += 1)
        .build();

    session.set_field("username", "lorem");
    session.cancel();

    let submissions = submitted.borrow();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0]["username"], ValueNode::Leaf(Value::Null));
    assert!(session.values().is_empty());
    assert_eq!(*cancelled.borrow(), 1);
}

#[test]
fn test_unnamed_group_paths_have_no_prefix() {
    let fields: Vec<SchemaNode> = vec![
        GroupNode::new(vec![FieldNode::new("address", FieldKind::Text).into()]).into(),
    ];
    let mut session = FormSession::builder(fields).build();

    session.set_field("address", "downtown");
    let structured = session.structured_values();
    assert_eq!(structured["address"], ValueNode::leaf("downtown"));
    assert_eq!(structured.len(), 1);
}

#[test]
fn test_no_op_change_does_not_notify() {
    let notified = Rc::new(RefCell::new(0));
    let count = Rc::clone(&notified);

    let fields: Vec<SchemaNode> = vec![FieldNode::new("username", FieldKind::Text).into()];
    let mut session = FormSession::builder(fields)
        .values(tree(vec![("username", ValueNode::leaf("x"))]))
        .on_changes(move |_values, _is_valid| *count.borrow_mut() += 1)
        .build();

    // Settles back to exactly the externally supplied state: guarded.
    session.set_field("username", "x");
    assert_eq!(*notified.borrow(), 0);

    session.set_field("username", "y");
    assert_eq!(*notified.borrow(), 1);
}

#[test]
fn test_set_values_replaces_state_without_notifying() {
    let notified = Rc::new(RefCell::new(0));
    let count = Rc::clone(&notified);

    let fields: Vec<SchemaNode> = vec![FieldNode::new("username", FieldKind::Text).into()];
    let mut session = FormSession::builder(fields)
        .on_changes(move |_values, _is_valid| *count.borrow_mut() += 1)
        .build();

    session.set_field("username", "draft");
    assert_eq!(*notified.borrow(), 1);

    session.set_values(&tree(vec![("username", ValueNode::leaf("saved"))]));
    assert_eq!(session.value("username"), Some(&Value::Text("saved".to_string())));
    assert_eq!(*notified.borrow(), 1);

    // Editing back to the new external state is a no-op notify again.
    session.set_field("username", "saved");
    assert_eq!(*notified.borrow(), 1);
}

#[test]
fn test_validate_on_init_fires_changes_exactly_once() {
    let observed: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&observed);

    let fields: Vec<SchemaNode> = vec![
        FieldNode::new("username", FieldKind::Text)
            .with_validations(required_rule())
            .into(),
    ];
    let session = FormSession::builder(fields)
        .options(SessionOptions {
            validate_on_init: true,
            ..SessionOptions::default()
        })
        .validator(required_validator())
        .on_changes(move |_values, is_valid| log.borrow_mut().push(is_valid))
        .build();

    assert_eq!(observed.borrow().as_slice(), &[false]);
    assert!(!session.is_valid());
    assert!(session.error("username").is_some());
}

#[test]
fn test_clear_on_submit_resets_values() {
    let cancelled = Rc::new(RefCell::new(0));
    let cancel_count = Rc::clone(&cancelled);

    let fields: Vec<SchemaNode> = vec![FieldNode::new("username", FieldKind::Text).into()];
    let mut session = FormSession::builder(fields)
        .options(SessionOptions {
            clear_on_submit: true,
            ..SessionOptions::default()
        })
        .on_submit(|_values: ValueTree| SubmitDisposition::Completed)
        .on_cancel(move || *cancel_count.borrow_mut() += 1)
        .build();

    session.set_field("username", "lorem");
    assert_eq!(session.submit().unwrap(), SubmitOutcome::Submitted);
    assert!(session.values().is_empty());
    assert_eq!(*cancelled.borrow(), 1);
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn test_submit_without_handler_is_skipped() {
    let fields: Vec<SchemaNode> = vec![FieldNode::new("username", FieldKind::Text).into()];
    let mut session = FormSession::builder(fields).build();
    assert_eq!(session.submit().unwrap(), SubmitOutcome::Skipped);
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn test_pending_submit_blocks_until_finished() {
    let calls = Rc::new(RefCell::new(0));
    let call_count = Rc::clone(&calls);

    let fields: Vec<SchemaNode> = vec![FieldNode::new("username", FieldKind::Text).into()];
    let mut session = FormSession::builder(fields)
        .on_submit(move |_values: ValueTree| {
            *call_count.borrow_mut() += 1;
            SubmitDisposition::Pending
        })
        .build();

    assert_eq!(session.submit().unwrap(), SubmitOutcome::Pending);
    assert_eq!(session.state(), SessionState::Submitting);

    // A second submit while one is in flight is refused.
    assert_eq!(session.submit().unwrap_err(), SessionError::SubmitInFlight);
    assert_eq!(*calls.borrow(), 1);

    session.finish_submit();
    assert_eq!(session.state(), SessionState::Idle);

    assert_eq!(session.submit().unwrap(), SubmitOutcome::Pending);
    assert_eq!(*calls.borrow(), 2);
}

#[test]
fn test_finish_submit_honors_clear_on_submit() {
    let fields: Vec<SchemaNode> = vec![FieldNode::new("username", FieldKind::Text).into()];
    let mut session = FormSession::builder(fields)
        .options(SessionOptions {
            clear_on_submit: true,
            ..SessionOptions::default()
        })
        .on_submit(|_values: ValueTree| SubmitDisposition::Pending)
        .build();

    session.set_field("username", "lorem");
    assert_eq!(session.submit().unwrap(), SubmitOutcome::Pending);
    // Values survive while the submit is in flight.
    assert!(!session.values().is_empty());

    session.finish_submit();
    assert!(session.values().is_empty());
}

#[test]
fn test_failed_validation_rejects_without_submitting() {
    let calls = Rc::new(RefCell::new(0));
    let call_count = Rc::clone(&calls);

    let fields: Vec<SchemaNode> = vec![
        FieldNode::new("username", FieldKind::Text)
            .with_validations(required_rule())
            .into(),
    ];
    let mut session = FormSession::builder(fields)
        .validator(required_validator())
        .on_submit(move |_values: ValueTree| {
            *call_count.borrow_mut() += 1;
            SubmitDisposition::Completed
        })
        .build();

    assert_eq!(session.submit().unwrap(), SubmitOutcome::Rejected);
    assert_eq!(*calls.borrow(), 0);
    assert!(session.error("username").is_some());
    assert_eq!(session.state(), SessionState::Idle);

    session.set_field("username", "lorem");
    assert_eq!(session.submit().unwrap(), SubmitOutcome::Submitted);
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_errors_route_to_nested_paths() {
    let fields: Vec<SchemaNode> = vec![
        GroupNode::named(
            "privacy",
            vec![
                FieldNode::new("email", FieldKind::Email)
                    .with_validations(required_rule())
                    .into(),
            ],
        )
        .into(),
    ];
    let mut session = FormSession::builder(fields)
        .validator(required_validator())
        .on_submit(|_values: ValueTree| SubmitDisposition::Completed)
        .build();

    assert_eq!(session.submit().unwrap(), SubmitOutcome::Rejected);
    assert!(session.error("privacy___email").is_some());

    session.set_field("privacy___email", "a@b.c");
    assert!(session.error("privacy___email").is_none());
    assert_eq!(session.submit().unwrap(), SubmitOutcome::Submitted);
}

#[test]
fn test_hidden_fields_stop_validating() {
    // The rule set is compiled from the pruned tree, so a hidden required
    // field cannot fail validation.
    let fields: Vec<SchemaNode> = vec![
        FieldNode::new("username", FieldKind::Text).into(),
        FieldNode::new("password", FieldKind::Password)
            .with_validations(required_rule())
            .with_condition(Condition::all(vec![ConditionRule::new(
                "username",
                ConditionOperator::IsNotEmpty,
                Value::Null,
            )]))
            .into(),
    ];
    let mut session = FormSession::builder(fields)
        .validator(required_validator())
        .build();

    assert!(session.is_valid());

    session.set_field("username", "lorem");
    assert!(!session.is_valid());
    assert!(session.error("password").is_some());
}

#[test]
fn test_cancel_resets_values_and_notifies() {
    let cancelled = Rc::new(RefCell::new(0));
    let cancel_count = Rc::clone(&cancelled);

    let mut session = FormSession::builder(gated_password_fields())
        .on_cancel(move || *cancel_count.borrow_mut() += 1)
        .build();

    session.set_field("username", "lorem");
    session.cancel();

    assert!(session.values().is_empty());
    assert_eq!(session.visible_fields().len(), 1);
    assert_eq!(*cancelled.borrow(), 1);
}

#[derive(Default)]
struct CollectingRenderer {
    fields: Vec<(String, Option<Value>, bool)>,
    groups: Vec<Option<String>>,
    separators: usize,
}

impl FormRenderer for CollectingRenderer {
    fn field(&mut self, _field: &FieldNode, context: FieldContext<'_>) {
        self.fields.push((
            context.path.to_string(),
            context.value.cloned(),
            context.error.is_some(),
        ));
    }

    fn group_start(&mut self, group: &GroupNode) {
        self.groups.push(group.name.clone());
    }

    fn separator(&mut self, _separator: &SeparatorNode) {
        self.separators += 1;
    }
}

#[test]
fn test_render_walks_visible_tree_with_paths() {
    let fields: Vec<SchemaNode> = vec![
        FieldNode::new("username", FieldKind::Text)
            .with_validations(required_rule())
            .into(),
        SeparatorNode::new().into(),
        GroupNode::named(
            "privacy",
            vec![FieldNode::new("email", FieldKind::Email).into()],
        )
        .into(),
    ];
    let mut session = FormSession::builder(fields)
        .validator(required_validator())
        .build();
    session.set_field("privacy___email", "a@b.c");

    let mut renderer = CollectingRenderer::default();
    session.render(&mut renderer);

    assert_eq!(renderer.separators, 1);
    assert_eq!(renderer.groups, vec![Some("privacy".to_string())]);
    assert_eq!(
        renderer.fields,
        vec![
            ("username".to_string(), None, true),
            (
                "privacy___email".to_string(),
                Some(Value::Text("a@b.c".to_string())),
                false
            ),
        ]
    );
}
