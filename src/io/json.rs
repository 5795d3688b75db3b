//! JSON mesh reader and view-spot writer.
//!
//! # Input format
//! ```json
//! {
//!   "nodes":    [{"id": 0, "x": 0.0, "y": 0.0}, ...],
//!   "elements": [{"id": 0, "nodes": [0, 1, 2]}, ...],
//!   "values":   [{"element_id": 0, "value": 0.5}, ...]
//! }
//! ```
//! `nodes` and `values` are required; a missing `elements` key means no
//! elements. Node coordinates are optional.
//!
//! # Output format
//! An array of `{"element_id": .., "value": ..}` objects.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algs::view_spots::ViewSpot;
use crate::config::MeshOptions;
use crate::mesh_error::MeshError;
use crate::topology::mesh::{Element, ElementValue, Mesh, Node};

const REQUIRED_KEYS: [&str; 2] = ["nodes", "values"];

/// Raw mesh collections as they appear in a JSON document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshDocument {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub elements: Vec<Element>,
    pub values: Vec<ElementValue>,
}

impl MeshDocument {
    /// Build a [`Mesh`] from the document.
    pub fn into_mesh(self, options: MeshOptions) -> Result<Mesh, MeshError> {
        Mesh::new(self.nodes, self.elements, self.values, options)
    }
}

/// Parse a document, rejecting inputs without the required top-level keys.
pub fn parse_mesh_document(json: &str) -> Result<MeshDocument, MeshError> {
    let raw: serde_json::Value =
        serde_json::from_str(json).map_err(|e| MeshError::MeshIoParse(e.to_string()))?;
    let object = raw
        .as_object()
        .ok_or_else(|| MeshError::InvalidStructure("top level must be an object".into()))?;
    if let Some(key) = REQUIRED_KEYS.iter().find(|k| !object.contains_key(**k)) {
        return Err(MeshError::InvalidStructure(format!("missing `{key}`")));
    }
    serde_json::from_value(raw).map_err(|e| MeshError::MeshIoParse(e.to_string()))
}

/// Parse a JSON string into a mesh.
pub fn mesh_from_json_str(json: &str, options: MeshOptions) -> Result<Mesh, MeshError> {
    parse_mesh_document(json)?.into_mesh(options)
}

/// Read a JSON mesh from any reader.
pub fn mesh_from_reader<R: Read>(mut reader: R, options: MeshOptions) -> Result<Mesh, MeshError> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    mesh_from_json_str(&json, options)
}

/// Read a JSON mesh file.
pub fn read_mesh_file(path: impl AsRef<Path>, options: MeshOptions) -> Result<Mesh, MeshError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| MeshError::Io(format!("cannot open {}: {e}", path.display())))?;
    log::debug!("reading mesh from {}", path.display());
    mesh_from_reader(BufReader::new(file), options)
}

/// Serialize view spots as a JSON array.
pub fn view_spots_to_json(spots: &[ViewSpot], pretty: bool) -> Result<String, MeshError> {
    let out = if pretty {
        serde_json::to_string_pretty(spots)
    } else {
        serde_json::to_string(spots)
    };
    out.map_err(|e| MeshError::MeshIoParse(e.to_string()))
}
