//! Transport-neutral request handling.
//!
//! Maps a request body (the JSON mesh) and an optional `n` query parameter
//! to an HTTP-style status code and JSON body. Binding this to an actual
//! server or function runtime is left to the host.

use serde_json::json;

use crate::config::MeshOptions;
use crate::io::json::{mesh_from_json_str, view_spots_to_json};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Status code and body produced by [`handle_request`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

/// Parse the `n` parameter. Absent or non-integer input means "all".
pub fn parse_count(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}

/// Compute view spots for a request.
///
/// - no body (or a blank one): 400 with an empty body
/// - invalid mesh: 400 with `{"error": "<message>"}`
/// - otherwise: 200 with the view-spot array
pub fn handle_request(body: Option<&str>, n: Option<&str>, options: MeshOptions) -> Response {
    let Some(body) = body.filter(|b| !b.trim().is_empty()) else {
        return Response {
            status_code: STATUS_BAD_REQUEST,
            body: String::new(),
        };
    };

    let result = mesh_from_json_str(body, options)
        .and_then(|mesh| view_spots_to_json(&mesh.compute_top_view_spots(parse_count(n)), false));
    match result {
        Ok(body) => Response {
            status_code: STATUS_OK,
            body,
        },
        Err(e) => {
            log::warn!("rejecting request: {e}");
            Response {
                status_code: STATUS_BAD_REQUEST,
                body: json!({ "error": e.to_string() }).to_string(),
            }
        }
    }
}
