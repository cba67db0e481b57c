//! Exported slice listing.
//!
//! The design tool's export utility lists slices as JSON, grouped per page.
//! Only the slash-delimited names matter here; they drive the name-driven
//! materialization path.

use serde::Deserialize;

use crate::error::Result;

/// Slice listing of one export, as emitted by the design tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SliceManifest {
    #[serde(default)]
    pub pages: Vec<SlicePage>,
}

/// Slices of one page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlicePage {
    #[serde(default)]
    pub slices: Vec<Slice>,
}

/// One exported slice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Slice {
    #[serde(default)]
    pub name: String,
}

impl SliceManifest {
    /// Parse a listing from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// All non-empty slice names, in listing order.
    pub fn names(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|page| page.slices.iter())
            .filter(|slice| !slice.name.is_empty())
            .map(|slice| slice.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_names_across_pages() {
        let manifest = SliceManifest::from_json(
            r#"{
                "pages": [
                    {"slices": [{"name": "icons/search"}, {"name": ""}]},
                    {"slices": [{"name": "icons/home"}]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(manifest.names(), vec!["icons/search", "icons/home"]);
    }

    #[test]
    fn malformed_listing_is_an_error() {
        assert!(SliceManifest::from_json("not json").is_err());
    }
}
