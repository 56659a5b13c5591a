//! Error types for the chainparse composition layer.

use thiserror::Error;

/// Errors surfaced while resolving and constructing parser dependencies.
///
/// The composition core itself never produces these — they originate in the
/// pluggable collaborators (a config parser rejecting malformed input, a
/// storage builder failing to open a handle) and propagate unmodified.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Node error: {0}")]
    Node(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Module error in '{module}': {reason}")]
    Module { module: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl ParseError {
    /// Returns `true` if the error came from configuration parsing.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
