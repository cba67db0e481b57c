//! Extraction configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::document::NodeClass;
use crate::errors::ConfigError;
use crate::view::ElementKind;

/// Hierarchy depth bound used when the configuration leaves it unset.
pub const DEFAULT_MAX_HIERARCHY: u32 = 3;

/// Map from a symbol sub-layer key to the node class expected for that key.
///
/// E.g. `{"label": "text"}` on the button map: the button parser looks for a
/// sub-layer named `Label` of class `text`.
pub type SymbolElements = IndexMap<String, NodeClass>;

/// Configuration of one extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionConfig {
    /// Maximum hierarchy depth for container classification. 0 or absent means
    /// the default of 3.
    #[serde(default)]
    pub max_hierarchy: u32,
    /// Ordered classification keywords; each names an element kind and doubles
    /// as the pattern matched against a symbol instance's display name. The
    /// last matching keyword wins.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Whether per-instance overrides take precedence over shared styles.
    #[serde(default)]
    pub follow_overrides: bool,
    /// Sub-layer naming map for `Button` elements.
    #[serde(default)]
    pub button: SymbolElements,
    /// Sub-layer naming map for `TextView` elements.
    #[serde(default)]
    pub text_view: SymbolElements,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        let mut button = SymbolElements::new();
        button.insert("label".to_string(), NodeClass::Text);
        let mut text_view = SymbolElements::new();
        text_view.insert("text".to_string(), NodeClass::Text);
        Self {
            max_hierarchy: DEFAULT_MAX_HIERARCHY,
            keywords: vec![
                "View".to_string(),
                "Button".to_string(),
                "TextView".to_string(),
            ],
            follow_overrides: true,
            button,
            text_view,
        }
    }
}

impl ExtractionConfig {
    /// Check the configuration for fatal errors.
    ///
    /// An empty keyword list or a keyword that names no element kind aborts
    /// the whole run before any parsing starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keywords.is_empty() {
            return Err(ConfigError::NoKeywords);
        }
        for keyword in &self.keywords {
            if ElementKind::from_keyword(keyword).is_none() {
                return Err(ConfigError::UnknownKeyword {
                    keyword: keyword.clone(),
                });
            }
        }
        Ok(())
    }

    /// Depth bound with the unset/zero fallback applied.
    pub fn effective_max_hierarchy(&self) -> u32 {
        if self.max_hierarchy == 0 {
            DEFAULT_MAX_HIERARCHY
        } else {
            self.max_hierarchy
        }
    }

    /// Sub-layer naming map for the given element kind, if it has one.
    pub fn symbol_elements(&self, kind: ElementKind) -> Option<&SymbolElements> {
        match kind {
            ElementKind::Button => Some(&self.button),
            ElementKind::TextView => Some(&self.text_view),
            ElementKind::View | ElementKind::Container => None,
        }
    }
}
