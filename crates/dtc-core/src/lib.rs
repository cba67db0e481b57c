//! Core types and configuration for the dtc engine.
//!
//! This crate provides the foundational types used across the other dtc crates:
//! - Raw design-export document types (layer tree, symbol masters, shared styles)
//! - The normalized view model produced by parsing
//! - Extraction configuration
//! - Error types shared across the pipeline

pub mod config;
pub mod document;
pub mod errors;
pub mod view;

pub use config::*;
pub use document::*;
pub use errors::*;
pub use view::*;
