//! Normalized view model produced by the layer-tree parse.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::document::TextStyle;

/// Kind of a normalized view.
///
/// Closed set: classification either derives `Container` from a `group` node's
/// ancestry or picks an element kind from the configured keywords, never both.
/// Adding a kind means extending this enum and the exhaustive dispatch over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Container,
    View,
    Button,
    TextView,
}

impl ElementKind {
    /// Name used in configuration keywords and rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Container => "Container",
            ElementKind::View => "View",
            ElementKind::Button => "Button",
            ElementKind::TextView => "TextView",
        }
    }

    /// Map a configured classification keyword to an element kind.
    ///
    /// Keywords name element kinds, not containers; `Container` is only ever
    /// assigned from group ancestry. Case-insensitive on word boundaries, so
    /// `"textView"`, `"TextView"` and `"text_view"` all name the same kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        use convert_case::{Case, Casing};
        match keyword.to_case(Case::Pascal).as_str() {
            "View" => Some(ElementKind::View),
            "Button" => Some(ElementKind::Button),
            "TextView" => Some(ElementKind::TextView),
            _ => None,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded resizing constraints.
///
/// Derived from the export's 6-bit mask where a cleared bit marks an active
/// constraint. `none` is true iff every bit is set (fully unconstrained).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    pub none: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
    pub width: bool,
    pub height: bool,
}

impl Constraints {
    /// Fully unconstrained value (mask 63).
    pub fn unconstrained() -> Self {
        Self {
            none: true,
            ..Default::default()
        }
    }
}

/// Kind-specific attributes of a view.
///
/// Unresolved lookups leave the corresponding slot unset; a view with partial
/// attributes is still emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewAttributes {
    /// Label or body text for `Button` / `TextView` views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Resolved text style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

/// One normalized view emitted by the layer-tree parse.
///
/// Views are created during traversal, appended to the output sequence in
/// pre-order, and never mutated after the parser returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// Source node id.
    pub id: String,
    /// Display name of the source node.
    pub name: String,
    /// View kind, set exactly once at classification.
    pub kind: ElementKind,
    /// Hierarchy depth, 0 at the page root.
    pub hierarchy: u32,
    /// Decoded resizing constraints.
    pub constraints: Constraints,
    /// Id of the enclosing `Container` view, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    /// Kind-specific attribute bag.
    #[serde(default)]
    pub attributes: ViewAttributes,
}

impl View {
    /// Create a view with default constraints and no attributes.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ElementKind,
        hierarchy: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            hierarchy,
            constraints: Constraints::unconstrained(),
            container_id: None,
            attributes: ViewAttributes::default(),
        }
    }
}

/// Views directly contained by the container with the given id, in emitted order.
///
/// The external renderer groups element views per container screen with this.
pub fn views_in<'a>(views: &'a [View], container_id: &str) -> impl Iterator<Item = &'a View> {
    let container_id = container_id.to_owned();
    views
        .iter()
        .filter(move |v| v.container_id.as_deref() == Some(container_id.as_str()))
}
