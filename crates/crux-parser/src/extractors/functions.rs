use ast_grep_core::Node;

use super::helpers;
use crate::types::{ItemKind, ParsedItem};

/// `fn` items, including bodiless trait method signatures.
pub(super) fn extract_function<D: ast_grep_core::Doc>(node: &Node<'_, D>) -> Option<ParsedItem> {
    let name = helpers::extract_name(node)?;
    let mut item = helpers::base_item(ItemKind::Function, name, node);
    item.generic_parameters = helpers::extract_generics(node);
    item.signature = Some(helpers::extract_signature(node));
    item.parameters = Some(helpers::extract_parameters(node));
    item.return_type = helpers::extract_return_type(node);
    Some(item)
}
