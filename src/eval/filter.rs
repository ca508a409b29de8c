//! Field-tree filter: prunes the declaration tree down to the nodes whose
//! visibility conditions hold for the current values.

use super::condition_matches;
use crate::schema::SchemaNode;
use crate::value::FlatValues;

/// Produces the pruned tree of currently-visible nodes.
///
/// Nodes whose condition evaluates false are dropped together with their
/// descendants; conditions inside a dropped subtree are never evaluated.
/// Surviving groups are cloned with their children filtered recursively, so
/// the caller's declaration tree is never mutated. Declaration order is
/// preserved.
pub fn filter_visible(nodes: &[SchemaNode], flat: &FlatValues) -> Vec<SchemaNode> {
    nodes
        .iter()
        .filter_map(|node| {
            if let Some(condition) = node.condition() {
                if !condition_matches(condition, flat) {
                    return None;
                }
            }
            Some(match node {
                SchemaNode::Group(group) => {
                    let mut pruned = group.clone();
                    pruned.fields = filter_visible(&group.fields, flat);
                    SchemaNode::Group(pruned)
                }
                other => other.clone(),
            })
        })
        .collect()
}
