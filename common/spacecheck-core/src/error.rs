//! Error type for disk queries
//!
//! A single failure mode crosses the engine boundary: the caller's path
//! could not be resolved or statted. Insufficient space is a decision,
//! not an error, and is carried in [`CheckOutcome`](crate::CheckOutcome).

use std::io;

/// Path resolution or disk lookup failed at the OS level.
///
/// Renders as `Path '<path>' not accessible: <os error>`, with `path`
/// being the string the caller originally supplied.
#[derive(Debug, thiserror::Error)]
#[error("Path '{path}' not accessible: {source}")]
pub struct AccessError {
    pub path: String,
    #[source]
    pub source: io::Error,
}

impl AccessError {
    pub fn new(path: impl Into<String>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}
