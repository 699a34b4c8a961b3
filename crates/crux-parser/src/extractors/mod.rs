//! Per-kind item extractors and the table that dispatches to them.
//!
//! Adding a declaration kind means one entry in
//! [`crate::query::ITEM_PATTERNS`], one arm in [`extractor_for`], and one
//! extractor function.

mod declarations;
mod functions;
pub(crate) mod helpers;
mod impl_blocks;
mod types;

use ast_grep_core::Node;

use crate::query;
use crate::types::{ItemKind, ParsedItem};

/// Extractor signature shared by every declaration kind.
pub type Extractor<'r, D> = fn(&Node<'r, D>) -> Option<ParsedItem>;

/// The extractor for a capture label.
#[must_use]
pub fn extractor_for<'r, D: ast_grep_core::Doc>(kind: ItemKind) -> Extractor<'r, D> {
    match kind {
        ItemKind::Function => functions::extract_function as Extractor<'r, D>,
        ItemKind::Struct => types::extract_struct as Extractor<'r, D>,
        ItemKind::Enum => types::extract_enum as Extractor<'r, D>,
        ItemKind::TypeAlias => types::extract_type_alias as Extractor<'r, D>,
        ItemKind::Impl => impl_blocks::extract_impl as Extractor<'r, D>,
        ItemKind::Trait => impl_blocks::extract_trait as Extractor<'r, D>,
        ItemKind::Mod => declarations::extract_mod as Extractor<'r, D>,
        ItemKind::Const => declarations::extract_const as Extractor<'r, D>,
        ItemKind::Static => declarations::extract_static as Extractor<'r, D>,
        ItemKind::Use => declarations::extract_use as Extractor<'r, D>,
        ItemKind::Macro => declarations::extract_macro as Extractor<'r, D>,
    }
}

/// Extract one declaration node labeled `kind`.
///
/// Returns `None` when the node is too damaged to name.
pub fn extract_item<D: ast_grep_core::Doc>(
    kind: ItemKind,
    node: &Node<'_, D>,
) -> Option<ParsedItem> {
    extractor_for(kind)(node)
}

/// Extract every declaration that is a direct child of an impl or trait body.
pub(crate) fn extract_body_items<D: ast_grep_core::Doc>(body: &Node<'_, D>) -> Vec<ParsedItem> {
    body.children()
        .filter_map(|child| {
            let kind = query::label_for(child.kind().as_ref())?;
            extract_item(kind, &child)
        })
        .collect()
}

#[cfg(test)]
mod tests;
