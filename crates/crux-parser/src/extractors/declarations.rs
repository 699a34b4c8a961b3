use ast_grep_core::Node;

use super::helpers;
use crate::types::{ItemKind, ParsedItem};

/// `mod` items, inline or file-backed. The body is walked by the module
/// recursion, not here.
pub(super) fn extract_mod<D: ast_grep_core::Doc>(node: &Node<'_, D>) -> Option<ParsedItem> {
    named(ItemKind::Mod, node)
}

pub(super) fn extract_const<D: ast_grep_core::Doc>(node: &Node<'_, D>) -> Option<ParsedItem> {
    named(ItemKind::Const, node)
}

pub(super) fn extract_static<D: ast_grep_core::Doc>(node: &Node<'_, D>) -> Option<ParsedItem> {
    named(ItemKind::Static, node)
}

/// `macro_rules!` definitions.
pub(super) fn extract_macro<D: ast_grep_core::Doc>(node: &Node<'_, D>) -> Option<ParsedItem> {
    named(ItemKind::Macro, node)
}

/// `use` declarations are named by their raw import tree.
pub(super) fn extract_use<D: ast_grep_core::Doc>(node: &Node<'_, D>) -> Option<ParsedItem> {
    let tree = node.field("argument").map_or_else(
        || {
            node.text()
                .trim()
                .trim_end_matches(';')
                .rsplit_once("use ")
                .map(|(_, tree)| tree.trim().to_string())
                .unwrap_or_default()
        },
        |arg| arg.text().to_string(),
    );
    if tree.is_empty() {
        return None;
    }
    Some(helpers::base_item(ItemKind::Use, tree, node))
}

fn named<D: ast_grep_core::Doc>(kind: ItemKind, node: &Node<'_, D>) -> Option<ParsedItem> {
    let name = helpers::extract_name(node)?;
    Some(helpers::base_item(kind, name, node))
}
