//! Errors shared across the dtc pipeline.
//!
//! Configuration errors are fatal for the whole run; the per-stage crates wrap
//! this type into their own error enums.

use std::path::PathBuf;
use thiserror::Error;

/// Errors in the extraction configuration or its external inputs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("extraction keyword list is empty")]
    NoKeywords,

    #[error("keyword {keyword:?} does not name an element kind")]
    UnknownKeyword { keyword: String },

    #[error("metadata template {} could not be read", path.display())]
    TemplateUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
