//! The widget-rendering seam: a collaborator trait the session drives for
//! every visible node, in declaration order. The engine never draws anything
//! itself.

use crate::path::{child_prefix, join_path};
use crate::schema::{FieldNode, GroupNode, SchemaNode, SeparatorNode};
use crate::value::{ErrorMap, FlatValues, Value};

/// Everything a widget needs to draw one visible field.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    /// Full dotted path; edits are fed back through
    /// [`FormSession::set_field`](crate::session::FormSession::set_field)
    /// under this key.
    pub path: &'a str,
    pub value: Option<&'a Value>,
    pub error: Option<&'a str>,
}

/// Receives the visible nodes of a form.
///
/// Non-data hooks default to no-ops so a renderer that only draws inputs
/// implements a single method.
pub trait FormRenderer {
    fn field(&mut self, field: &FieldNode, context: FieldContext<'_>);

    fn group_start(&mut self, group: &GroupNode) {
        let _ = group;
    }

    fn group_end(&mut self, group: &GroupNode) {
        let _ = group;
    }

    fn separator(&mut self, separator: &SeparatorNode) {
        let _ = separator;
    }
}

pub(crate) fn walk_nodes(
    nodes: &[SchemaNode],
    prefix: Option<&str>,
    values: &FlatValues,
    errors: &ErrorMap,
    renderer: &mut dyn FormRenderer,
) {
    for node in nodes {
        match node {
            SchemaNode::Field(field) => {
                let path = join_path(prefix, &field.name);
                renderer.field(
                    field,
                    FieldContext {
                        path: &path,
                        value: values.get(&path),
                        error: errors.get(&path).map(String::as_str),
                    },
                );
            }
            SchemaNode::Group(group) => {
                renderer.group_start(group);
                let prefix = child_prefix(prefix, group.name.as_deref());
                walk_nodes(&group.fields, prefix.as_deref(), values, errors, renderer);
                renderer.group_end(group);
            }
            SchemaNode::Separator(separator) => renderer.separator(separator),
        }
    }
}
