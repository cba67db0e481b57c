//! Layer-tree parsing and symbol resolution for design exports.
//!
//! This crate turns the raw layer tree of a [`dtc_core::SketchDocument`] into
//! the normalized, ordered view sequence consumed by template rendering:
//! - [`constraints`] decodes the export's resizing-constraint bitmask
//! - [`symbols`] resolves symbol-instance references against the document's
//!   symbol-master index
//! - [`elements`] fills kind-specific attributes per element kind
//! - [`layer_tree`] drives the recursive, depth-bounded traversal

pub mod constraints;
mod elements;
pub mod error;
pub mod layer_tree;
pub mod symbols;

pub use constraints::decode;
pub use error::{Result, SketchError};
pub use layer_tree::LayerTreeParser;
pub use symbols::{ResolvedSymbol, SymbolResolver};
