//! Raw design-export document model.
//!
//! These types mirror the JSON layer tree a design tool exports: a page tree of
//! nodes, a document-wide symbol-master index, and a shared-style table. They
//! are read-only inputs for one parse pass; the normalized output lives in
//! [`crate::view`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Resizing-constraint mask value meaning "fully unconstrained".
pub const UNCONSTRAINED_MASK: u32 = 0b11_1111;

/// Class discriminator carried by every exported node (`_class` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeClass {
    Group,
    SymbolInstance,
    SymbolMaster,
    ShapeGroup,
    Text,
    Rectangle,
    Oval,
    Artboard,
    Page,
    #[serde(other)]
    Unknown,
}

impl NodeClass {
    /// Wire-format name of this class.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeClass::Group => "group",
            NodeClass::SymbolInstance => "symbolInstance",
            NodeClass::SymbolMaster => "symbolMaster",
            NodeClass::ShapeGroup => "shapeGroup",
            NodeClass::Text => "text",
            NodeClass::Rectangle => "rectangle",
            NodeClass::Oval => "oval",
            NodeClass::Artboard => "artboard",
            NodeClass::Page => "page",
            NodeClass::Unknown => "unknown",
        }
    }
}

/// One node of the exported layer tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    /// Class discriminator (`_class` on the wire).
    #[serde(rename = "_class")]
    pub class: NodeClass,
    /// Stable object id (`do_objectID` on the wire).
    #[serde(rename = "do_objectID", default)]
    pub id: String,
    /// Display name as shown in the design tool's layer list.
    pub name: String,
    /// Child nodes, empty for leaf layers.
    #[serde(default)]
    pub layers: Vec<DesignNode>,
    /// Reference to a symbol master, present on `symbolInstance` nodes.
    #[serde(rename = "symbolID", default, skip_serializing_if = "Option::is_none")]
    pub symbol_id: Option<String>,
    /// Raw resizing-constraint bitmask. 63 means no edge or dimension is pinned.
    #[serde(default = "default_resizing_constraint")]
    pub resizing_constraint: u32,
    /// Reference into the document's shared-style table.
    #[serde(rename = "sharedStyleID", default, skip_serializing_if = "Option::is_none")]
    pub shared_style_id: Option<String>,
    /// Literal text content, present on `text` layers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Per-instance override values, present on `symbolInstance` nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub override_values: Vec<OverrideValue>,
}

fn default_resizing_constraint() -> u32 {
    UNCONSTRAINED_MASK
}

impl DesignNode {
    /// Create a bare node of the given class and display name.
    pub fn new(class: NodeClass, name: impl Into<String>) -> Self {
        Self {
            class,
            id: String::new(),
            name: name.into(),
            layers: Vec::new(),
            symbol_id: None,
            resizing_constraint: UNCONSTRAINED_MASK,
            shared_style_id: None,
            text: None,
            override_values: Vec::new(),
        }
    }

    /// Set the object id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Add a child node.
    pub fn with_layer(mut self, layer: DesignNode) -> Self {
        self.layers.push(layer);
        self
    }

    /// Set the symbol-master reference.
    pub fn with_symbol_id(mut self, id: impl Into<String>) -> Self {
        self.symbol_id = Some(id.into());
        self
    }

    /// Set the raw resizing-constraint mask.
    pub fn with_resizing_constraint(mut self, mask: u32) -> Self {
        self.resizing_constraint = mask;
        self
    }

    /// Set the shared-style reference.
    pub fn with_shared_style_id(mut self, id: impl Into<String>) -> Self {
        self.shared_style_id = Some(id.into());
        self
    }

    /// Set literal text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add a per-instance override value.
    pub fn with_override(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.override_values.push(OverrideValue {
            override_name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// One per-instance override on a symbol instance.
///
/// The override name encodes the target sub-layer id and the overridden slot,
/// e.g. `"A1B2_stringValue"` or `"A1B2_layerStyle"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideValue {
    pub override_name: String,
    pub value: String,
}

/// Canonical definition of a reusable symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolMaster {
    #[serde(rename = "symbolID")]
    pub symbol_id: String,
    pub name: String,
    #[serde(default)]
    pub layers: Vec<DesignNode>,
}

impl SymbolMaster {
    /// Create a master with the given id and name.
    pub fn new(symbol_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol_id: symbol_id.into(),
            name: name.into(),
            layers: Vec::new(),
        }
    }

    /// Add a sub-layer.
    pub fn with_layer(mut self, layer: DesignNode) -> Self {
        self.layers.push(layer);
        self
    }
}

/// Text-style payload of a shared style.
///
/// Only the subset the element parsers consume; unknown fields in the export
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Hex color string, e.g. `"#1a1a1a"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One entry of the document-level shared-style table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedStyle {
    #[serde(rename = "do_objectID", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub value: TextStyle,
}

/// One exported design document: pages plus document-wide lookup tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SketchDocument {
    /// Symbol-master index, keyed by symbol id.
    #[serde(default)]
    pub symbols: IndexMap<String, SymbolMaster>,
    /// Shared-style table, keyed by style id.
    #[serde(default)]
    pub layer_styles: IndexMap<String, SharedStyle>,
    /// Page trees, traversed in order.
    #[serde(default)]
    pub pages: Vec<DesignNode>,
}

impl SketchDocument {
    /// Look up a symbol master by exact symbol id.
    pub fn symbol(&self, symbol_id: &str) -> Option<&SymbolMaster> {
        self.symbols.get(symbol_id)
    }

    /// Look up a shared style by id, falling back to the style name.
    pub fn style(&self, key: &str) -> Option<&SharedStyle> {
        self.layer_styles
            .get(key)
            .or_else(|| self.layer_styles.values().find(|s| s.name == key))
    }

    /// Register a symbol master under its own id.
    pub fn with_symbol(mut self, master: SymbolMaster) -> Self {
        self.symbols.insert(master.symbol_id.clone(), master);
        self
    }

    /// Register a shared style under its own id.
    pub fn with_style(mut self, style: SharedStyle) -> Self {
        self.layer_styles.insert(style.id.clone(), style);
        self
    }

    /// Add a page tree.
    pub fn with_page(mut self, page: DesignNode) -> Self {
        self.pages.push(page);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_class_deserializes_wire_names() {
        let class: NodeClass = serde_json::from_str("\"symbolInstance\"").unwrap();
        assert_eq!(class, NodeClass::SymbolInstance);

        let class: NodeClass = serde_json::from_str("\"shapeGroup\"").unwrap();
        assert_eq!(class, NodeClass::ShapeGroup);

        // Anything outside the known class space folds into Unknown.
        let class: NodeClass = serde_json::from_str("\"slice\"").unwrap();
        assert_eq!(class, NodeClass::Unknown);
    }

    #[test]
    fn design_node_deserializes_export_shape() {
        let node: DesignNode = serde_json::from_str(
            r##"{
                "_class": "symbolInstance",
                "do_objectID": "3F2A",
                "name": "Login Button",
                "symbolID": "SYM-1",
                "resizingConstraint": 18,
                "overrideValues": [
                    {"overrideName": "9C_stringValue", "value": "Sign in"}
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(node.class, NodeClass::SymbolInstance);
        assert_eq!(node.id, "3F2A");
        assert_eq!(node.symbol_id.as_deref(), Some("SYM-1"));
        assert_eq!(node.resizing_constraint, 18);
        assert_eq!(node.override_values.len(), 1);
        assert!(node.layers.is_empty());
    }

    #[test]
    fn missing_resizing_constraint_defaults_to_unconstrained() {
        let node: DesignNode =
            serde_json::from_str(r#"{"_class": "group", "name": "Header"}"#).unwrap();
        assert_eq!(node.resizing_constraint, UNCONSTRAINED_MASK);
    }

    #[test]
    fn style_lookup_falls_back_to_name() {
        let doc = SketchDocument::default().with_style(SharedStyle {
            id: "S1".into(),
            name: "Body/Primary".into(),
            value: TextStyle {
                font_size: Some(15.0),
                ..Default::default()
            },
        });

        assert!(doc.style("S1").is_some());
        assert!(doc.style("Body/Primary").is_some());
        assert!(doc.style("S2").is_none());
    }

    #[test]
    fn symbol_lookup_is_exact() {
        let doc = SketchDocument::default().with_symbol(SymbolMaster::new("SYM-1", "Button"));
        assert!(doc.symbol("SYM-1").is_some());
        assert!(doc.symbol("sym-1").is_none());
    }
}
