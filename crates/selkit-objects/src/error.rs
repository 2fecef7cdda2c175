use thiserror::Error;

/// Failures from [`to_json`](crate::to_json) and [`from_json`](crate::from_json).
#[derive(Debug, Error)]
pub enum ObjectError {
    /// The text was not valid JSON, or the value could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The constructor asked for more positional values than the JSON held.
    #[error("missing positional argument {index} ({supplied} supplied)")]
    MissingArgument {
        /// Zero-based position that was requested.
        index: usize,
        /// Number of values available.
        supplied: usize,
    },

    /// A positional value did not have the shape the constructor expects.
    #[error("positional argument {index} has the wrong type: {source}")]
    Argument {
        /// Zero-based position of the offending value.
        index: usize,
        /// Why it could not be decoded.
        source: serde_json::Error,
    },
}
