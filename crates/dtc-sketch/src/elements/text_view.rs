//! Text-view element parser.

use dtc_core::{DesignNode, ElementKind, View};

use crate::symbols::SymbolResolver;

use super::{parse_overrides, parse_shared_style};

const TEXT_KEY: &str = "text";

/// Fill a text view's content and text style.
///
/// A configuration without a `text` slot for text views matches no sub-layer.
pub(super) fn parse(resolver: &SymbolResolver, node: &DesignNode, view: &mut View) {
    let symbol = resolver.resolve(node.symbol_id.as_deref());
    let expected = resolver
        .config()
        .symbol_elements(ElementKind::TextView)
        .and_then(|elements| elements.get(TEXT_KEY))
        .copied();

    let content = expected.and_then(|class| symbol.find(TEXT_KEY, class));
    if let Some(layer) = content {
        view.attributes.text = layer.text.clone();
        parse_shared_style(resolver, layer, view);
    }
    if resolver.follow_overrides() {
        parse_overrides(resolver, node, content, view);
    }
}
