//! Button element parser.

use dtc_core::{DesignNode, ElementKind, View};

use crate::symbols::SymbolResolver;

use super::{parse_overrides, parse_shared_style};

const LABEL_KEY: &str = "label";

/// Fill a button view's label text and text style.
///
/// A configuration without a `label` slot for buttons matches no sub-layer.
pub(super) fn parse(resolver: &SymbolResolver, node: &DesignNode, view: &mut View) {
    let symbol = resolver.resolve(node.symbol_id.as_deref());
    let expected = resolver
        .config()
        .symbol_elements(ElementKind::Button)
        .and_then(|elements| elements.get(LABEL_KEY))
        .copied();

    let label = expected.and_then(|class| symbol.find(LABEL_KEY, class));
    if let Some(layer) = label {
        view.attributes.text = layer.text.clone();
        parse_shared_style(resolver, layer, view);
    }
    if resolver.follow_overrides() {
        parse_overrides(resolver, node, label, view);
    }
}
