//! Element parsers, one per element kind.
//!
//! Each parser receives the raw symbol-instance node, the resolved sub-layers
//! of its master, and the document-scoped resolver context, and fills the
//! kind-specific attributes of a partially built [`View`]. Parsers never touch
//! the view's kind or hierarchy depth. The kind is dispatched exhaustively, so
//! a new element kind fails to compile until it gets a handler here.

mod button;
mod text_view;

use tracing::debug;

use dtc_core::{DesignNode, ElementKind, View};

use crate::symbols::SymbolResolver;

/// Override slot naming: `<sub-layer id>_stringValue` carries replaced text.
const STRING_OVERRIDE_SUFFIX: &str = "_stringValue";
/// Override slot naming: `<sub-layer id>_layerStyle` carries a style reference.
const STYLE_OVERRIDE_SUFFIX: &str = "_layerStyle";

/// Populate kind-specific attributes of `view` from `node`.
pub(crate) fn parse(resolver: &SymbolResolver, node: &DesignNode, view: &mut View) {
    match view.kind {
        ElementKind::Button => button::parse(resolver, node, view),
        ElementKind::TextView => text_view::parse(resolver, node, view),
        // Plain views carry no kind-specific attributes; containers are
        // classified by ancestry and never dispatched here.
        ElementKind::View | ElementKind::Container => {}
    }
}

/// Resolve the sub-layer's shared style into the view's style attribute.
///
/// An unmatched style reference leaves the attribute unset.
fn parse_shared_style(resolver: &SymbolResolver, layer: &DesignNode, view: &mut View) {
    let Some(style_id) = layer.shared_style_id.as_deref() else {
        return;
    };
    match resolver.shared_style(style_id) {
        Some(shared) => view.attributes.style = Some(shared.value.clone()),
        None => debug!(style_id, "unmatched shared style reference"),
    }
}

/// Apply per-instance overrides on top of shared-style results.
///
/// Only called when the follow-overrides flag is set; overridden values then
/// replace whatever the shared pass produced.
fn parse_overrides(
    resolver: &SymbolResolver,
    node: &DesignNode,
    target: Option<&DesignNode>,
    view: &mut View,
) {
    if let Some(text) = slot_override(node, target, STRING_OVERRIDE_SUFFIX) {
        view.attributes.text = Some(text.to_owned());
    }
    if let Some(style_key) = slot_override(node, target, STYLE_OVERRIDE_SUFFIX) {
        match resolver.shared_style(style_key) {
            Some(shared) => view.attributes.style = Some(shared.value.clone()),
            None => debug!(style_key, "unmatched style override reference"),
        }
    }
}

/// Value of the instance override addressing `target`'s slot with `suffix`.
///
/// When the target sub-layer is unknown or carries no id, the first override of
/// that slot applies.
fn slot_override<'a>(
    node: &'a DesignNode,
    target: Option<&DesignNode>,
    suffix: &str,
) -> Option<&'a str> {
    let target_id = target.map(|layer| layer.id.as_str()).unwrap_or("");
    node.override_values
        .iter()
        .find(|ov| {
            ov.override_name
                .strip_suffix(suffix)
                .is_some_and(|prefix| target_id.is_empty() || prefix == target_id)
        })
        .map(|ov| ov.value.as_str())
}
