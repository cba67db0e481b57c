//! Symbol-instance resolution.
//!
//! A `symbolInstance` node references a reusable symbol master by id. The
//! resolver looks the master up in the document's symbol index and exposes its
//! sub-layers to the element parsers. Resolution is returned as an explicit
//! value and threaded into the parsers; nothing is cached across calls.

use tracing::trace;

use dtc_core::{DesignNode, ExtractionConfig, NodeClass, SharedStyle, SketchDocument};

/// Document-scoped lookup context for element parsing.
#[derive(Debug, Clone, Copy)]
pub struct SymbolResolver<'a> {
    doc: &'a SketchDocument,
    config: &'a ExtractionConfig,
}

impl<'a> SymbolResolver<'a> {
    pub fn new(doc: &'a SketchDocument, config: &'a ExtractionConfig) -> Self {
        Self { doc, config }
    }

    /// Extraction configuration of this run.
    pub fn config(&self) -> &'a ExtractionConfig {
        self.config
    }

    /// Whether per-instance overrides take precedence over shared styles.
    pub fn follow_overrides(&self) -> bool {
        self.config.follow_overrides
    }

    /// Document-level shared style, looked up by id or name.
    pub fn shared_style(&self, key: &str) -> Option<&'a SharedStyle> {
        self.doc.style(key)
    }

    /// Resolve a symbol reference to its master's sub-layers.
    ///
    /// A missing reference or a dangling id yields an empty set, not an error.
    /// Layers of class `shapeGroup` are excluded from the resolved set; their
    /// vector content has no counterpart in the view model.
    pub fn resolve(&self, symbol_id: Option<&str>) -> ResolvedSymbol<'a> {
        let Some(id) = symbol_id else {
            return ResolvedSymbol::default();
        };
        let Some(master) = self.doc.symbol(id) else {
            trace!(symbol_id = id, "dangling symbol reference, resolving empty");
            return ResolvedSymbol::default();
        };
        let layers = master
            .layers
            .iter()
            .filter(|layer| layer.class != NodeClass::ShapeGroup)
            .collect();
        ResolvedSymbol { layers }
    }
}

/// Sub-layers of one resolved symbol master.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSymbol<'a> {
    /// Master sub-layers in document order, `shapeGroup` content excluded.
    pub layers: Vec<&'a DesignNode>,
}

impl<'a> ResolvedSymbol<'a> {
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// First sub-layer whose display name equals the title-cased key and whose
    /// class matches the expected one.
    ///
    /// The document's naming convention capitalizes the first character of
    /// sub-layer names, so the lookup key `"label"` matches a layer named
    /// `Label`.
    pub fn find(&self, key: &str, expected: NodeClass) -> Option<&'a DesignNode> {
        let name_key = upper_first(key);
        self.layers
            .iter()
            .find(|layer| layer.name == name_key && layer.class == expected)
            .copied()
    }
}

/// Uppercase only the first character, leaving the rest untouched.
fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtc_core::SymbolMaster;

    fn doc_with_button_symbol() -> SketchDocument {
        SketchDocument::default().with_symbol(
            SymbolMaster::new("SYM-1", "Button/Primary")
                .with_layer(DesignNode::new(NodeClass::ShapeGroup, "Background"))
                .with_layer(DesignNode::new(NodeClass::Text, "Label").with_text("Tap me")),
        )
    }

    #[test]
    fn shape_groups_are_excluded_from_resolution() {
        let doc = doc_with_button_symbol();
        let config = ExtractionConfig::default();
        let resolver = SymbolResolver::new(&doc, &config);

        let symbol = resolver.resolve(Some("SYM-1"));
        assert_eq!(symbol.layers.len(), 1);
        assert_eq!(symbol.layers[0].name, "Label");
    }

    #[test]
    fn dangling_reference_resolves_empty() {
        let doc = doc_with_button_symbol();
        let config = ExtractionConfig::default();
        let resolver = SymbolResolver::new(&doc, &config);

        assert!(resolver.resolve(Some("NOPE")).is_empty());
        assert!(resolver.resolve(None).is_empty());
    }

    #[test]
    fn find_title_cases_the_key_and_checks_class() {
        let doc = doc_with_button_symbol();
        let config = ExtractionConfig::default();
        let resolver = SymbolResolver::new(&doc, &config);
        let symbol = resolver.resolve(Some("SYM-1"));

        let label = symbol.find("label", NodeClass::Text).unwrap();
        assert_eq!(label.text.as_deref(), Some("Tap me"));

        // Right name, wrong class.
        assert!(symbol.find("label", NodeClass::Rectangle).is_none());
        // No such sub-layer.
        assert!(symbol.find("icon", NodeClass::Text).is_none());
    }
}
