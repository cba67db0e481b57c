//! Error types for asset materialization.

use std::path::PathBuf;

use dtc_core::ConfigError;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, AssetError>;

/// Errors that can occur while materializing the asset catalog.
///
/// I/O failures are fatal for the current asset and propagate; a silently
/// skipped asset would leave the catalog inconsistent.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Fatal configuration error (unreadable templates and the like).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The exported file for a slice name does not exist.
    #[error("missing source asset {}", path.display())]
    MissingSource { path: PathBuf },

    /// Filesystem failure during directory creation, copy, or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The leaf metadata template failed to render.
    #[error("metadata template render failed: {0}")]
    Template(#[from] handlebars::RenderError),

    /// The leaf metadata template is not a valid template.
    #[error("invalid metadata template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// The slice manifest is not valid JSON.
    #[error("malformed slice manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
