//! Error types for grid requests and response decoding.

use thiserror::Error;

/// Result type alias using GridError.
pub type GridResult<T> = Result<T, GridError>;

/// Primary error type for grid operations.
///
/// All variants are terminal for the current invocation; no partial
/// results are produced once one of these is raised.
#[derive(Debug, Error)]
pub enum GridError {
    /// Network or transport failure while talking to the grid endpoint.
    #[error("Grid request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("Grid endpoint returned HTTP {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The response body was not valid JSON.
    #[error("Invalid JSON in grid response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response was valid JSON but missing the expected shape.
    #[error("Malformed grid response: {0}")]
    Schema(String),
}
