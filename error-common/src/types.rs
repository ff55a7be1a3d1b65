use thiserror::Error;

use crate::codes;
use crate::context::ValuePath;

/// Error enum for pruning and its configuration
#[derive(Error, Debug)]
pub enum PruneError {
    /// A container nests deeper than the depth budget allows
    #[error("Depth limit of {limit} exceeded at {path}")]
    DepthExceeded { limit: usize, path: ValuePath },

    /// JSON encoding or decoding errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PruneError {
    pub fn depth_exceeded(limit: usize, path: ValuePath) -> Self {
        Self::DepthExceeded { limit, path }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Stable code for API responses and log correlation
    pub fn code(&self) -> &'static str {
        match self {
            Self::DepthExceeded { .. } => codes::pruning::DEPTH_EXCEEDED,
            Self::Serialization(_) => codes::serialization::ENCODE_FAILED,
            Self::Config(_) => codes::configuration::INVALID_CONFIG,
            Self::Other(_) => codes::internal::UNEXPECTED,
        }
    }
}

/// Result type alias for pruning operations
pub type Result<T> = std::result::Result<T, PruneError>;

/// Log an error with its code and the operation that produced it
pub fn log_error(context: &str, error: &PruneError) {
    tracing::warn!(
        context = context,
        error_code = error.code(),
        error = %error,
        "Pruning failed"
    );
}
