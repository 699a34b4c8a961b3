use ast_grep_core::Node;

use super::helpers;
use crate::types::{EnumVariant, ItemKind, ParsedItem, StructField};

pub(super) fn extract_struct<D: ast_grep_core::Doc>(node: &Node<'_, D>) -> Option<ParsedItem> {
    let name = helpers::extract_name(node)?;
    let mut item = helpers::base_item(ItemKind::Struct, name, node);
    item.generic_parameters = helpers::extract_generics(node);
    item.fields = Some(extract_struct_fields(node));
    Some(item)
}

pub(super) fn extract_enum<D: ast_grep_core::Doc>(node: &Node<'_, D>) -> Option<ParsedItem> {
    let name = helpers::extract_name(node)?;
    let mut item = helpers::base_item(ItemKind::Enum, name, node);
    item.generic_parameters = helpers::extract_generics(node);
    item.variants = Some(extract_enum_variants(node));
    Some(item)
}

/// `type` aliases and associated types in trait bodies.
pub(super) fn extract_type_alias<D: ast_grep_core::Doc>(
    node: &Node<'_, D>,
) -> Option<ParsedItem> {
    let name = helpers::extract_name(node)?;
    let mut item = helpers::base_item(ItemKind::TypeAlias, name, node);
    item.generic_parameters = helpers::extract_generics(node);
    Some(item)
}

/// Named fields of a braced struct. Tuple and unit structs have none.
fn extract_struct_fields<D: ast_grep_core::Doc>(node: &Node<'_, D>) -> Vec<StructField> {
    let Some(body) = node
        .field("body")
        .filter(|b| b.kind().as_ref() == "field_declaration_list")
    else {
        return Vec::new();
    };
    body.children()
        .filter(|c| c.kind().as_ref() == "field_declaration")
        .filter_map(|c| {
            let name = c.field("name")?.text().to_string();
            let ty = c.field("type").map(|t| t.text().to_string()).unwrap_or_default();
            Some(StructField {
                name,
                ty,
                visibility: helpers::extract_visibility(&c),
            })
        })
        .collect()
}

fn extract_enum_variants<D: ast_grep_core::Doc>(node: &Node<'_, D>) -> Vec<EnumVariant> {
    let Some(body) = node.field("body") else {
        return Vec::new();
    };
    body.children()
        .filter(|c| c.kind().as_ref() == "enum_variant")
        .filter_map(|c| {
            let name = c.field("name")?.text().to_string();
            let discriminant = c
                .field("value")
                .or_else(|| c.field("discriminant"))
                .map(|v| v.text().to_string());
            Some(EnumVariant { name, discriminant })
        })
        .collect()
}
