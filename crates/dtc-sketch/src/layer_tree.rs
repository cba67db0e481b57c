//! Recursive, depth-bounded layer-tree traversal.
//!
//! Walks the exported layer tree pre-order, classifies each node, and emits
//! the normalized view sequence in source child order:
//! - a `group` with children below the depth ceiling becomes a `Container`
//!   and is descended into
//! - a `symbolInstance` whose display name matches a configured keyword
//!   becomes that element kind, last matching keyword winning
//! - everything else is scenery and dropped silently

use regex::Regex;
use tracing::trace;

use dtc_core::{DesignNode, ElementKind, ExtractionConfig, NodeClass, SketchDocument, View};

use crate::constraints;
use crate::elements;
use crate::error::{Result, SketchError};
use crate::symbols::SymbolResolver;

/// Parser over one document and one extraction configuration.
pub struct LayerTreeParser<'a> {
    resolver: SymbolResolver<'a>,
    /// Compiled classification patterns, in configured order.
    keywords: Vec<(Regex, ElementKind)>,
    max_hierarchy: u32,
}

impl<'a> LayerTreeParser<'a> {
    /// Build a parser, validating the configuration up front.
    pub fn new(doc: &'a SketchDocument, config: &'a ExtractionConfig) -> Result<Self> {
        config.validate()?;
        let mut keywords = Vec::with_capacity(config.keywords.len());
        for keyword in &config.keywords {
            let pattern =
                Regex::new(keyword).map_err(|source| SketchError::InvalidKeywordPattern {
                    pattern: keyword.clone(),
                    source,
                })?;
            // validate() already guarantees the keyword names a kind.
            let kind = ElementKind::from_keyword(keyword).ok_or_else(|| {
                dtc_core::ConfigError::UnknownKeyword {
                    keyword: keyword.clone(),
                }
            })?;
            keywords.push((pattern, kind));
        }
        Ok(Self {
            resolver: SymbolResolver::new(doc, config),
            keywords,
            max_hierarchy: config.effective_max_hierarchy(),
        })
    }

    /// Parse every page of the document into one ordered view sequence.
    pub fn parse_document(&self, doc: &SketchDocument) -> Result<Vec<View>> {
        let mut outputs = Vec::new();
        for page in &doc.pages {
            for node in &page.layers {
                self.parse_node(node, 0, None, &mut outputs)?;
            }
        }
        Ok(outputs)
    }

    /// Parse a single subtree starting at the given hierarchy depth.
    pub fn parse_layer(
        &self,
        node: &DesignNode,
        hierarchy: u32,
        outputs: &mut Vec<View>,
    ) -> Result<()> {
        self.parse_node(node, hierarchy, None, outputs)
    }

    fn parse_node(
        &self,
        node: &DesignNode,
        hierarchy: u32,
        container_id: Option<&str>,
        outputs: &mut Vec<View>,
    ) -> Result<()> {
        match node.class {
            // A group below the ceiling with at least one child becomes a
            // container; a childless group is dropped at any depth.
            NodeClass::Group
                if !node.layers.is_empty() && hierarchy <= self.max_hierarchy - 1 =>
            {
                let mut view = View::new(&node.id, &node.name, ElementKind::Container, hierarchy);
                view.constraints = constraints::decode(node.resizing_constraint)?;
                view.container_id = container_id.map(str::to_owned);
                let id = view.id.clone();
                outputs.push(view);
                for child in &node.layers {
                    self.parse_node(child, hierarchy + 1, Some(&id), outputs)?;
                }
            }
            NodeClass::SymbolInstance => {
                let Some(kind) = self.classify(&node.name) else {
                    trace!(name = %node.name, "symbol instance matches no keyword, dropped");
                    return Ok(());
                };
                let mut view = View::new(&node.id, &node.name, kind, hierarchy);
                view.constraints = constraints::decode(node.resizing_constraint)?;
                view.container_id = container_id.map(str::to_owned);
                elements::parse(&self.resolver, node, &mut view);
                outputs.push(view);
            }
            _ => {
                trace!(class = node.class.as_str(), name = %node.name, "node dropped");
            }
        }
        Ok(())
    }

    /// Kind of the last configured keyword matching the display name.
    ///
    /// Later keywords win so that the rightmost modifier of a natural-language
    /// name decides: "Final View Button" is a button, not a view.
    fn classify(&self, name: &str) -> Option<ElementKind> {
        self.keywords
            .iter()
            .filter(|(pattern, _)| pattern.is_match(name))
            .map(|(_, kind)| *kind)
            .last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtc_core::{Constraints, SymbolMaster};

    fn instance(name: &str) -> DesignNode {
        DesignNode::new(NodeClass::SymbolInstance, name).with_symbol_id("SYM")
    }

    fn group(name: &str) -> DesignNode {
        DesignNode::new(NodeClass::Group, name)
    }

    fn parse_with(
        doc: &SketchDocument,
        config: &ExtractionConfig,
        node: &DesignNode,
    ) -> Vec<View> {
        let parser = LayerTreeParser::new(doc, config).unwrap();
        let mut outputs = Vec::new();
        parser.parse_layer(node, 0, &mut outputs).unwrap();
        outputs
    }

    #[test]
    fn childless_group_emits_nothing() {
        let doc = SketchDocument::default();
        let config = ExtractionConfig::default();
        let outputs = parse_with(&doc, &config, &group("Empty"));
        assert!(outputs.is_empty());
    }

    #[test]
    fn last_matching_keyword_wins() {
        let doc = SketchDocument::default();
        let config = ExtractionConfig {
            keywords: vec!["View".into(), "Button".into()],
            ..Default::default()
        };
        let root = group("Screen").with_layer(instance("Final View Button"));

        let outputs = parse_with(&doc, &config, &root);
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[1].kind, ElementKind::Button);
    }

    #[test]
    fn unmatched_symbol_instance_is_dropped() {
        let doc = SketchDocument::default();
        let config = ExtractionConfig::default();
        let root = group("Screen").with_layer(instance("Decorative Blob"));

        let outputs = parse_with(&doc, &config, &root);
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].kind, ElementKind::Container);
    }

    #[test]
    fn unknown_classes_are_dropped_silently() {
        let doc = SketchDocument::default();
        let config = ExtractionConfig::default();
        let root = group("Screen")
            .with_layer(DesignNode::new(NodeClass::Rectangle, "Divider"))
            .with_layer(DesignNode::new(NodeClass::Unknown, "Mystery"))
            .with_layer(instance("Ok Button"));

        let outputs = parse_with(&doc, &config, &root);
        let kinds: Vec<_> = outputs.iter().map(|v| v.kind).collect();
        assert_eq!(kinds, vec![ElementKind::Container, ElementKind::Button]);
    }

    #[test]
    fn depth_bound_stops_descent() {
        let doc = SketchDocument::default();
        let config = ExtractionConfig {
            max_hierarchy: 3,
            ..Default::default()
        };
        // Root (0) -> Middle (1) -> Deep (2) -> TooDeep (3) -> fourth-level leaf.
        let root = group("Root").with_layer(
            group("Middle").with_layer(
                group("Deep")
                    .with_layer(group("TooDeep").with_layer(instance("Lost Button"))),
            ),
        );

        let outputs = parse_with(&doc, &config, &root);
        let names: Vec<_> = outputs.iter().map(|v| v.name.as_str()).collect();
        // Deep is still emitted at depth 2, but TooDeep is past the ceiling, so
        // nothing at the fourth level ever appears.
        assert_eq!(names, vec!["Root", "Middle", "Deep"]);
        assert_eq!(outputs[2].hierarchy, 2);
    }

    #[test]
    fn emitted_order_is_preorder_source_order() {
        let doc = SketchDocument::default();
        let config = ExtractionConfig::default();
        let root = group("Screen")
            .with_layer(instance("First Button"))
            .with_layer(group("Panel").with_layer(instance("Second Button")))
            .with_layer(instance("Third TextView"));

        let outputs = parse_with(&doc, &config, &root);
        let names: Vec<_> = outputs.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Screen",
                "First Button",
                "Panel",
                "Second Button",
                "Third TextView"
            ]
        );
    }

    #[test]
    fn elements_link_to_their_container() {
        let doc = SketchDocument::default();
        let config = ExtractionConfig::default();
        let root = group("Screen")
            .with_id("G1")
            .with_layer(instance("Ok Button").with_id("B1"));

        let outputs = parse_with(&doc, &config, &root);
        assert_eq!(outputs[0].container_id, None);
        assert_eq!(outputs[1].container_id.as_deref(), Some("G1"));
    }

    #[test]
    fn constraints_are_decoded_for_emitted_views() {
        let doc = SketchDocument::default();
        let config = ExtractionConfig::default();
        let root = group("Screen")
            .with_layer(instance("Ok Button").with_resizing_constraint(0));

        let outputs = parse_with(&doc, &config, &root);
        assert_eq!(outputs[0].constraints, Constraints::unconstrained());
        let c = outputs[1].constraints;
        assert!(c.top && c.right && c.bottom && c.left && c.width && c.height);
        assert!(!c.none);
    }

    #[test]
    fn invalid_mask_aborts_the_parse() {
        let doc = SketchDocument::default();
        let config = ExtractionConfig::default();
        let root = group("Screen")
            .with_layer(instance("Ok Button").with_resizing_constraint(99));
        let parser = LayerTreeParser::new(&doc, &config).unwrap();

        let mut outputs = Vec::new();
        let result = parser.parse_layer(&root, 0, &mut outputs);
        assert!(matches!(
            result,
            Err(SketchError::InvalidConstraintMask { value: 99 })
        ));
    }

    #[test]
    fn parse_document_walks_every_page() {
        let config = ExtractionConfig::default();
        let doc = SketchDocument::default()
            .with_symbol(SymbolMaster::new("SYM", "Button/Primary"))
            .with_page(
                DesignNode::new(NodeClass::Page, "Page 1")
                    .with_layer(group("Home").with_layer(instance("Login Button"))),
            )
            .with_page(
                DesignNode::new(NodeClass::Page, "Page 2")
                    .with_layer(group("Settings").with_layer(instance("Save Button"))),
            );

        let parser = LayerTreeParser::new(&doc, &config).unwrap();
        let outputs = parser.parse_document(&doc).unwrap();
        let names: Vec<_> = outputs.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Home", "Login Button", "Settings", "Save Button"]
        );
    }

    #[test]
    fn invalid_config_fails_construction() {
        let doc = SketchDocument::default();
        let config = ExtractionConfig {
            keywords: vec![],
            ..Default::default()
        };
        assert!(LayerTreeParser::new(&doc, &config).is_err());
    }
}
