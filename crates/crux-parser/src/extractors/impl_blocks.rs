use ast_grep_core::Node;

use super::helpers;
use crate::types::{ItemKind, ParsedItem};

/// `impl` blocks. The display name is `Trait for Type` or just `Type`.
pub(super) fn extract_impl<D: ast_grep_core::Doc>(node: &Node<'_, D>) -> Option<ParsedItem> {
    let (trait_name, impl_type) = extract_impl_targets(node);
    let impl_type = impl_type?;
    let name = trait_name
        .as_ref()
        .map_or_else(|| impl_type.clone(), |t| format!("{t} for {impl_type}"));

    let mut item = helpers::base_item(ItemKind::Impl, name, node);
    item.generic_parameters = helpers::extract_generics(node);
    item.trait_name = trait_name;
    item.impl_type = Some(impl_type);
    item.associated_items = Some(
        node.field("body")
            .map(|body| super::extract_body_items(&body))
            .unwrap_or_default(),
    );
    Some(item)
}

pub(super) fn extract_trait<D: ast_grep_core::Doc>(node: &Node<'_, D>) -> Option<ParsedItem> {
    let name = helpers::extract_name(node)?;
    let mut item = helpers::base_item(ItemKind::Trait, name, node);
    item.generic_parameters = helpers::extract_generics(node);
    item.associated_items = Some(
        node.field("body")
            .map(|body| super::extract_body_items(&body))
            .unwrap_or_default(),
    );
    Some(item)
}

/// `(trait, type)` of an impl block.
///
/// Reads the `trait`/`type` fields; negative impls keep their `!`. Falls
/// back to a positional scan around the `for` keyword when the grammar
/// exposes no fields.
fn extract_impl_targets<D: ast_grep_core::Doc>(
    node: &Node<'_, D>,
) -> (Option<String>, Option<String>) {
    if let Some(ty) = node.field("type") {
        let negative = node.children().any(|c| c.kind().as_ref() == "!");
        let trait_name = node.field("trait").map(|t| {
            if negative {
                format!("!{}", t.text())
            } else {
                t.text().to_string()
            }
        });
        return (trait_name, Some(ty.text().to_string()));
    }

    let children: Vec<_> = node.children().collect();
    let found_for = children.iter().any(|c| c.kind().as_ref() == "for");
    let mut trait_name = None;
    let mut impl_type = None;
    let mut past_for = false;
    for child in &children {
        let kind = child.kind();
        if kind.as_ref() == "for" {
            past_for = true;
            continue;
        }
        if !is_type_node(kind.as_ref()) {
            continue;
        }
        if found_for && !past_for {
            trait_name.get_or_insert_with(|| child.text().to_string());
        } else if impl_type.is_none() {
            impl_type = Some(child.text().to_string());
        }
    }
    (trait_name, impl_type)
}

fn is_type_node(kind: &str) -> bool {
    matches!(
        kind,
        "type_identifier"
            | "scoped_type_identifier"
            | "generic_type"
            | "scoped_identifier"
            | "reference_type"
            | "tuple_type"
            | "array_type"
            | "primitive_type"
    )
}
