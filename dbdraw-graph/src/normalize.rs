//! Graph to collection normalization.

use std::collections::HashMap;

use crate::{
    collection::{Collection, Field, FieldKind},
    graph::{Graph, Node, RawField},
    resolve::{PositionalHandleResolver, ReferenceResolver},
};

/// Normalize a graph with the positional `target-{i}` handle binding.
pub fn normalize(graph: &Graph) -> Vec<Collection> {
    normalize_with(graph, &PositionalHandleResolver)
}

/// Normalize a graph, resolving `ref` fields with `resolver`.
///
/// One collection is produced per node; node order and field order are kept.
pub fn normalize_with(graph: &Graph, resolver: &dyn ReferenceResolver) -> Vec<Collection> {
    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "normalizing schema graph"
    );

    let collections: Vec<Collection> = graph
        .nodes
        .iter()
        .map(|node| collection_for(graph, node, resolver))
        .collect();

    for name in duplicate_collection_names(&collections) {
        tracing::warn!(
            collection = %name,
            "several nodes share this label, their generated files will overwrite each other"
        );
    }

    collections
}

/// Labels used by more than one collection, in first-seen order.
pub fn duplicate_collection_names(collections: &[Collection]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for collection in collections {
        let count = counts.entry(collection.name.as_str()).or_insert(0);
        if *count == 1 {
            order.push(collection.name.clone());
        }
        *count += 1;
    }
    order
}

fn collection_for(graph: &Graph, node: &Node, resolver: &dyn ReferenceResolver) -> Collection {
    let fields = node
        .data
        .fields
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let mut field = field_from_raw(raw);
            if field.kind == FieldKind::Ref {
                field.reference = resolver.resolve(graph, node, index);
                if field.reference.is_none() {
                    tracing::debug!(
                        collection = %node.data.label,
                        field = %field.name,
                        "unresolved reference field"
                    );
                }
            }
            field
        })
        .collect();

    Collection {
        name: node.data.label.clone(),
        fields,
    }
}

fn field_from_raw(raw: &RawField) -> Field {
    let mut field = Field::new(&raw.name, &raw.field_type);
    field.required = raw.required.unwrap_or(false);
    field.unique = raw.unique.unwrap_or(false);
    field.list = raw.list.unwrap_or(false);
    field.id = raw.id.clone();
    // An empty string is what the designer stores for "no default"
    field.default = raw
        .default
        .clone()
        .filter(|value| !matches!(value, serde_json::Value::String(s) if s.is_empty()));
    field
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn graph(value: serde_json::Value) -> Graph {
        Graph::from_value(value).unwrap()
    }

    fn blog_graph(target_handle: &str) -> Graph {
        graph(json!({
            "nodes": [
                {
                    "id": "u",
                    "data": { "label": "User", "fields": [
                        { "name": "_id", "type": "primary" },
                        { "name": "email", "type": "string", "required": true }
                    ]}
                },
                {
                    "id": "p",
                    "data": { "label": "Blog_Post", "fields": [
                        { "name": "_id", "type": "primary" },
                        { "name": "title", "type": "string", "required": true },
                        { "name": "author", "type": "ref" }
                    ]}
                }
            ],
            "edges": [
                { "source": "u", "target": "p", "targetHandle": target_handle }
            ]
        }))
    }

    #[test]
    fn test_nodes_without_edges_leave_refs_unresolved() {
        let graph = graph(json!({
            "nodes": [
                { "id": "a", "data": { "label": "A", "fields": [{ "name": "b", "type": "ref" }] } },
                { "id": "b", "data": { "label": "B", "fields": [{ "name": "a", "type": "REF" }] } },
                { "id": "c", "data": { "label": "C", "fields": [] } }
            ],
            "edges": []
        }));

        let collections = normalize(&graph);

        assert_eq!(collections.len(), 3);
        for collection in &collections {
            assert!(collection.fields.iter().all(|f| f.reference.is_none()));
        }
    }

    #[test]
    fn test_matching_handle_resolves_source_label() {
        let collections = normalize(&blog_graph("target-2"));

        let author = &collections[1].fields[2];
        assert_eq!(author.name, "author");
        assert_eq!(author.reference.as_deref(), Some("User"));
    }

    #[test]
    fn test_other_handle_leaves_reference_absent() {
        let collections = normalize(&blog_graph("target-1"));
        assert_eq!(collections[1].fields[2].reference, None);
    }

    #[test]
    fn test_edge_to_other_node_is_ignored() {
        let mut graph = blog_graph("target-2");
        graph.edges[0].target = "u".to_string();
        assert_eq!(normalize(&graph)[1].fields[2].reference, None);
    }

    #[test]
    fn test_missing_source_node_leaves_reference_absent() {
        let mut graph = blog_graph("target-2");
        graph.edges[0].source = "gone".to_string();
        assert_eq!(normalize(&graph)[1].fields[2].reference, None);
    }

    #[test]
    fn test_order_and_flags_are_preserved() {
        let graph = graph(json!({
            "nodes": [
                { "id": "z", "data": { "label": "Zebra", "fields": [] } },
                { "id": "a", "data": { "label": "Ant", "fields": [
                    { "name": "legs", "type": "Number", "default": 6, "list": false },
                    { "name": "tags", "type": "string", "list": true, "unique": true },
                    { "name": "nickname", "type": "string", "default": "" }
                ]}}
            ],
            "edges": []
        }));

        let collections = normalize(&graph);
        assert_eq!(collections[0].name, "Zebra");
        assert_eq!(collections[1].name, "Ant");

        let fields = &collections[1].fields;
        assert_eq!(fields[0].type_name, "Number");
        assert_eq!(fields[0].kind, FieldKind::Number);
        assert_eq!(fields[0].default, Some(json!(6)));
        assert!(fields[1].list && fields[1].unique && !fields[1].required);
        assert_eq!(fields[2].default, None);
    }

    #[test]
    fn test_non_ref_field_is_never_resolved() {
        let graph = graph(json!({
            "nodes": [
                { "id": "a", "data": { "label": "A", "fields": [{ "name": "x", "type": "string" }] } },
                { "id": "b", "data": { "label": "B", "fields": [] } }
            ],
            "edges": [{ "source": "b", "target": "a", "targetHandle": "target-0" }]
        }));
        assert_eq!(normalize(&graph)[0].fields[0].reference, None);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let graph = graph(json!({
            "nodes": [
                { "id": "1", "data": { "label": "User", "fields": [] } },
                { "id": "2", "data": { "label": "User", "fields": [] } },
                { "id": "3", "data": { "label": "User", "fields": [] } },
                { "id": "4", "data": { "label": "Post", "fields": [] } }
            ],
            "edges": []
        }));

        let collections = normalize(&graph);
        assert_eq!(collections.len(), 4);
        assert_eq!(duplicate_collection_names(&collections), ["User"]);
    }

    struct ByFieldName;

    impl ReferenceResolver for ByFieldName {
        fn resolve(&self, graph: &Graph, node: &Node, field_index: usize) -> Option<String> {
            let name = &node.data.fields[field_index].name;
            graph
                .nodes
                .iter()
                .find(|n| n.data.label.eq_ignore_ascii_case(name))
                .map(|n| n.data.label.clone())
        }
    }

    #[test]
    fn test_custom_resolver() {
        let graph = graph(json!({
            "nodes": [
                { "id": "1", "data": { "label": "User", "fields": [] } },
                { "id": "2", "data": { "label": "Post", "fields": [{ "name": "user", "type": "ref" }] } }
            ],
            "edges": []
        }));

        let collections = normalize_with(&graph, &ByFieldName);
        assert_eq!(collections[1].fields[0].reference.as_deref(), Some("User"));
    }
}
