//! PathKey codec: bidirectional conversion between the nested value tree and
//! the flat dotted-path map, plus the null-defaulting pass over a pruned
//! declaration tree.

use crate::schema::SchemaNode;
use crate::value::{FlatValues, Value, ValueNode, ValueTree};

/// Reserved token joining nested group and field names in flat keys.
///
/// Field and group names must not contain this token.
pub const PATH_SEPARATOR: &str = "___";

/// Joins an optional parent prefix and a child name into a dotted path.
pub fn join_path(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}{}{}", prefix, PATH_SEPARATOR, name),
        None => name.to_string(),
    }
}

/// Prefix a group passes down to its children.
///
/// An unnamed group is transparent: the parent prefix flows through unchanged
/// and no extra path segment is added.
pub fn child_prefix(prefix: Option<&str>, group_name: Option<&str>) -> Option<String> {
    match group_name {
        Some(name) => Some(join_path(prefix, name)),
        None => prefix.map(str::to_string),
    }
}

/// Flattens a nested value tree into dotted-path keys.
///
/// Branches are descended into; leaves (including lists and dates) are copied
/// as-is. Round-trips with [`structure`] for any tree whose leaf values are
/// not themselves objects.
pub fn flatten(structured: &ValueTree) -> FlatValues {
    let mut flat = FlatValues::new();
    flatten_into(structured, None, &mut flat);
    flat
}

fn flatten_into(tree: &ValueTree, prefix: Option<&str>, out: &mut FlatValues) {
    for (key, node) in tree {
        let path = join_path(prefix, key);
        match node {
            ValueNode::Branch(children) => flatten_into(children, Some(&path), out),
            ValueNode::Leaf(value) => {
                out.insert(path, value.clone());
            }
        }
    }
}

/// Rebuilds the nested value tree from flat dotted keys.
///
/// Every key present in `flat` is structured into the output, whether or not
/// its field is currently declared or visible. With `null_on_undefined`, the
/// pruned tree in `fields` is walked first and every data-bearing leaf whose
/// path is absent from `flat` is defaulted to null; separators contribute
/// nothing and unnamed groups add no path segment.
pub fn structure(fields: &[SchemaNode], flat: &FlatValues, null_on_undefined: bool) -> ValueTree {
    let mut flat = flat.clone();
    if null_on_undefined {
        fill_missing_with_null(fields, None, &mut flat);
    }

    let mut structured = ValueTree::new();
    for (key, value) in flat {
        insert_nested(&mut structured, &key, value);
    }
    structured
}

fn fill_missing_with_null(nodes: &[SchemaNode], prefix: Option<&str>, flat: &mut FlatValues) {
    for node in nodes {
        match node {
            SchemaNode::Separator(_) => {}
            SchemaNode::Group(group) => {
                let prefix = child_prefix(prefix, group.name.as_deref());
                fill_missing_with_null(&group.fields, prefix.as_deref(), flat);
            }
            SchemaNode::Field(field) => {
                flat.entry(join_path(prefix, &field.name)).or_insert(Value::Null);
            }
        }
    }
}

/// Splits on the *first* separator occurrence per level, nesting the rest.
///
/// A leaf already sitting where a branch is needed is promoted to a branch;
/// sibling path collisions are caller error and resolve last-write-wins.
fn insert_nested(parent: &mut ValueTree, path: &str, value: Value) {
    match path.split_once(PATH_SEPARATOR) {
        Some((group, rest)) => {
            let entry = parent
                .entry(group.to_string())
                .or_insert_with(|| ValueNode::Branch(ValueTree::new()));
            match entry {
                ValueNode::Branch(children) => insert_nested(children, rest, value),
                ValueNode::Leaf(_) => {
                    let mut children = ValueTree::new();
                    insert_nested(&mut children, rest, value);
                    *entry = ValueNode::Branch(children);
                }
            }
        }
        None => {
            parent.insert(path.to_string(), ValueNode::Leaf(value));
        }
    }
}
