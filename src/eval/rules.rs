//! Rule-set compiler: derives the flat validation rule map from a pruned
//! declaration tree.

use crate::path::{child_prefix, join_path};
use crate::schema::SchemaNode;
use ahash::AHashMap;

/// Flat map from dotted field path to its opaque validation descriptor.
///
/// This is the exact input contract of the external validation collaborator.
pub type RuleSet = AHashMap<String, serde_json::Value>;

/// Walks a pruned tree and collects every declared validation rule under its
/// full dotted path. Groups recurse with the accumulated prefix (unnamed
/// groups add none); separators and rule-less fields contribute nothing.
pub fn compile_rules(nodes: &[SchemaNode]) -> RuleSet {
    let mut rules = RuleSet::new();
    collect_rules(nodes, None, &mut rules);
    rules
}

fn collect_rules(nodes: &[SchemaNode], prefix: Option<&str>, out: &mut RuleSet) {
    for node in nodes {
        match node {
            SchemaNode::Separator(_) => {}
            SchemaNode::Group(group) => {
                let prefix = child_prefix(prefix, group.name.as_deref());
                collect_rules(&group.fields, prefix.as_deref(), out);
            }
            SchemaNode::Field(field) => {
                if let Some(rule) = &field.validations {
                    out.insert(join_path(prefix, &field.name), rule.clone());
                }
            }
        }
    }
}
