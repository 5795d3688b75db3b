//! Re-export public algorithms.

pub mod adjacency;
pub mod view_spots;

pub use adjacency::{NodeElementIndex, Neighbourhoods};
pub use view_spots::{ViewSpot, classify, compute_top_view_spots, select_top_n};
