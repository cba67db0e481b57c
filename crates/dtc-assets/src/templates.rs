//! Metadata descriptor templates.
//!
//! The catalog uses two externally supplied template documents: an
//! "intermediate" descriptor copied verbatim into every namespace directory,
//! and a "leaf" descriptor with a single `{{filename}}` slot rendered into
//! every image-set directory. Both are opaque to this crate.

use std::fs;
use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;

use dtc_core::ConfigError;

use crate::error::{AssetError, Result};

/// Template engine wrapping Handlebars.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        Self {
            handlebars: Handlebars::new(),
        }
    }

    /// Register a template under a name, rejecting malformed template text.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(AssetError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a registered template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(AssetError::Template)
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// The two metadata descriptor documents of one catalog.
#[derive(Debug, Clone)]
pub struct MetadataTemplates {
    /// Namespace-level descriptor, copied as-is.
    pub intermediate: String,
    /// Image-set descriptor with one `{{filename}}` slot.
    pub leaf: String,
}

impl MetadataTemplates {
    /// Load both templates from disk.
    ///
    /// An unreadable template is a configuration error and aborts the run.
    pub fn load(intermediate: &Path, leaf: &Path) -> std::result::Result<Self, ConfigError> {
        let read = |path: &Path| {
            fs::read_to_string(path).map_err(|source| ConfigError::TemplateUnreadable {
                path: path.to_path_buf(),
                source,
            })
        };
        Ok(Self {
            intermediate: read(intermediate)?,
            leaf: read(leaf)?,
        })
    }

    /// Build from in-memory template strings.
    pub fn from_strings(intermediate: impl Into<String>, leaf: impl Into<String>) -> Self {
        Self {
            intermediate: intermediate.into(),
            leaf: leaf.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_registered_filename_slot() {
        let mut engine = TemplateEngine::new();
        engine
            .register_template("leaf", r#"{"images":[{"filename":"{{filename}}"}]}"#)
            .unwrap();
        let out = engine
            .render("leaf", &json!({"filename": "search.pdf"}))
            .unwrap();
        assert_eq!(out, r#"{"images":[{"filename":"search.pdf"}]}"#);
    }

    #[test]
    fn malformed_template_is_rejected_at_registration() {
        let mut engine = TemplateEngine::new();
        let err = engine.register_template("leaf", "{{filename").unwrap_err();
        assert!(matches!(err, AssetError::InvalidTemplate(_)));
    }

    #[test]
    fn missing_template_file_is_a_config_error() {
        let err = MetadataTemplates::load(
            Path::new("/nonexistent/mid.json"),
            Path::new("/nonexistent/leaf.json"),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::TemplateUnreadable { .. }));
    }
}
