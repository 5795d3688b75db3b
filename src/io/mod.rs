//! Mesh input/output collaborators.
//!
//! - [`json`]: read meshes from JSON documents and write view-spot results.
//! - [`request`]: map request bodies to status codes and JSON responses.

pub mod json;
pub mod request;

pub use json::{
    MeshDocument, mesh_from_json_str, mesh_from_reader, parse_mesh_document, read_mesh_file,
    view_spots_to_json,
};
pub use request::{Response, handle_request};
