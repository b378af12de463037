//! Client for the what3words grid API.
//!
//! Fetches the grid section covering a bounding box and decodes the
//! starting coordinate of each grid line in the response.

pub mod bbox;
pub mod error;
pub mod fetch;
pub mod grid;

pub use bbox::BoundingBox;
pub use error::{GridError, GridResult};
pub use fetch::Fetcher;
pub use grid::Coordinate;
