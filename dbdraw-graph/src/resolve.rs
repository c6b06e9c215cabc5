//! Binding of `ref` fields to the collections they point at.

use crate::graph::{Graph, Node};

/// Finds the collection a reference field points at.
///
/// Implementations return the display label of the referenced node, or `None`
/// when the field is not bound to anything.
pub trait ReferenceResolver {
    fn resolve(&self, graph: &Graph, node: &Node, field_index: usize) -> Option<String>;
}

/// Binds a field to the first edge targeting handle `target-{index}` on its node.
///
/// The binding is positional: reordering a node's fields without updating the
/// diagram's edges changes which field a relationship lands on.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalHandleResolver;

impl PositionalHandleResolver {
    pub fn handle_for(field_index: usize) -> String {
        format!("target-{field_index}")
    }
}

impl ReferenceResolver for PositionalHandleResolver {
    fn resolve(&self, graph: &Graph, node: &Node, field_index: usize) -> Option<String> {
        let handle = Self::handle_for(field_index);
        let edge = graph
            .edges
            .iter()
            .find(|e| e.target == node.id && e.target_handle.as_deref() == Some(handle.as_str()))?;

        match graph.node(&edge.source) {
            Some(source) => Some(source.data.label.clone()),
            None => {
                tracing::debug!(
                    node = %node.id,
                    source = %edge.source,
                    "edge source node not found, reference left unresolved"
                );
                None
            }
        }
    }
}
