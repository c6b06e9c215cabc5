//! Serialized form of the visual schema diagram.
//!
//! Nodes are entities, edges connect a source node to a field handle on a
//! target node. Unknown keys are ignored so the designer can evolve its export
//! without breaking older CLIs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, error::SourceContext};

/// A node/edge graph exported by the designer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// One entity of the diagram.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Node {
    pub id: String,
    pub data: NodeData,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeData {
    pub label: String,
    pub fields: Vec<RawField>,
}

/// A field exactly as the designer stored it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// A relationship from `source` to the field handle `target_handle` on `target`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(rename = "targetHandle", default)]
    pub target_handle: Option<String>,
}

impl Graph {
    /// Parse a graph from JSON text, reporting errors against `filename`.
    pub fn from_json(src: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(src, filename);
        serde_json::from_str(src).map_err(|e| ctx.conversion_error(e))
    }

    /// Read and parse a graph file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_json(&content, &path.display().to_string())
    }

    /// Convert an already decoded JSON value (e.g. an API response field).
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value.clone()).map_err(|e| {
            let pretty = serde_json::to_string_pretty(&value).unwrap_or_default();
            SourceContext::new(pretty, "<project flow>").conversion_error(e)
        })
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
