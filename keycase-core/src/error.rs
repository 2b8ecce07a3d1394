//! Error types for keycase

use thiserror::Error;

/// Keycase error types
#[derive(Debug, Error)]
pub enum KeyCaseError {
    /// Input could not be used as a key or convention name.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Container nesting went deeper than the configured limit.
    #[error("Depth limit exceeded: depth {depth} (max: {max_depth})")]
    DepthLimitExceeded {
        /// Container depth at which the rewrite stopped
        depth: usize,
        /// Maximum container depth allowed
        max_depth: usize,
    },
    /// The value graph holds more nodes than the configured limit.
    #[error("Node limit exceeded: more than {max_nodes} nodes")]
    NodeLimitExceeded {
        /// Maximum number of nodes allowed
        max_nodes: usize,
    },
    /// Rewrite limits are above their hard maximums.
    #[error("Invalid limits: {0}")]
    InvalidLimits(String),
    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, KeyCaseError>;
