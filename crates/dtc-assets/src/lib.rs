//! Asset-catalog materialization.
//!
//! Turns exported image slices into the platform's nested image-set layout:
//! one directory per namespace level, one `.imageset` directory per image,
//! and exactly one metadata descriptor at every level. Two input shapes are
//! supported: flat slash-delimited slice names, and a pre-nested directory of
//! exported files.

pub mod catalog;
pub mod error;
pub mod slices;
pub mod templates;

pub use catalog::AssetCatalog;
pub use error::{AssetError, Result};
pub use slices::SliceManifest;
pub use templates::{MetadataTemplates, TemplateEngine};
