// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Schema graph input for dbdraw.
//!
//! Parses the designer's node/edge export, normalizes it into [`Collection`]s
//! and reads/writes the project link file.

mod collection;
mod error;
mod graph;
mod link;
mod normalize;
mod resolve;

use std::path::Path;

pub use collection::{Collection, Field, FieldKind, IDENTITY_FIELD};
pub use error::{Error, Result, SourceContext};
pub use graph::{Edge, Graph, Node, NodeData, RawField};
pub use link::{
    LINK_PATH, PROJECT_ID_LEN, PROJECT_ID_PREFIX, ProjectLink, is_valid_project_id,
};
pub use normalize::{duplicate_collection_names, normalize, normalize_with};
pub use resolve::{PositionalHandleResolver, ReferenceResolver};

/// Parse graph JSON text and normalize it into collections.
pub fn collections_from_json(src: &str, filename: &str) -> Result<Vec<Collection>> {
    Ok(normalize(&Graph::from_json(src, filename)?))
}

/// Normalize an already decoded graph value, e.g. a project's `flow`.
pub fn collections_from_value(value: serde_json::Value) -> Result<Vec<Collection>> {
    Ok(normalize(&Graph::from_value(value)?))
}

/// Read a graph file and normalize it into collections.
pub fn collections_from_file(path: impl AsRef<Path>) -> Result<Vec<Collection>> {
    Ok(normalize(&Graph::from_file(path)?))
}
