//! Error types for layer-tree parsing.

use dtc_core::ConfigError;
use thiserror::Error;

/// Result type alias for parse operations.
pub type Result<T> = std::result::Result<T, SketchError>;

/// Errors that can occur while parsing a design export.
#[derive(Debug, Error)]
pub enum SketchError {
    /// Fatal configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Resizing-constraint mask outside the 6-bit value space.
    #[error("invalid resizing-constraint mask {value} (expected 0..=63)")]
    InvalidConstraintMask { value: u32 },

    /// A configured keyword is not a valid match pattern.
    #[error("invalid keyword pattern {pattern:?}")]
    InvalidKeywordPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
