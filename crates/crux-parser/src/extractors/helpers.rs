//! Shared extraction helpers used by every per-kind extractor.
//!
//! Functions for reading names, visibility, attributes, generics, doc
//! comments and signatures off declaration nodes.

use ast_grep_core::Node;

use crate::location::node_location;
use crate::types::{FunctionParameter, ItemKind, ParsedItem, Visibility};

/// An item with the fields every kind shares already filled in.
pub fn base_item<D: ast_grep_core::Doc>(
    kind: ItemKind,
    name: String,
    node: &Node<D>,
) -> ParsedItem {
    let mut item = ParsedItem::new(kind, name, node.text().to_string(), node_location(node));
    item.visibility = extract_visibility(node);
    item.attributes = extract_attributes(node);
    item.doc_comment = extract_doc_comment(node);
    item
}

/// Text of the `name` field, falling back to the first identifier child.
pub fn extract_name<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    node.field("name")
        .map(|n| n.text().to_string())
        .or_else(|| {
            node.children()
                .find(|c| {
                    let k = c.kind();
                    k.as_ref() == "identifier" || k.as_ref() == "type_identifier"
                })
                .map(|c| c.text().to_string())
        })
        .filter(|n| !n.is_empty())
}

/// Visibility from the node's own `visibility_modifier` child.
pub fn extract_visibility<D: ast_grep_core::Doc>(node: &Node<D>) -> Visibility {
    node.children()
        .find(|c| c.kind().as_ref() == "visibility_modifier")
        .map_or(Visibility::Private, |c| Visibility::classify(&c.text()))
}

/// Raw `#[...]` attributes that apply to the node, in source order.
///
/// Outer attributes are preceding siblings in the tree (comments may sit
/// between them). Attributes nested as children, and inner `#![...]`
/// attributes at the top of the node's body, follow after them.
pub fn extract_attributes<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    let mut attrs = Vec::new();
    let mut current = node.prev();
    while let Some(sibling) = current {
        let kind = sibling.kind();
        if kind.as_ref() == "attribute_item" {
            attrs.push(sibling.text().trim().to_string());
        } else if !is_comment(kind.as_ref()) {
            break;
        }
        current = sibling.prev();
    }
    attrs.reverse();

    attrs.extend(
        node.children()
            .filter(|c| is_attribute(c.kind().as_ref()))
            .map(|c| c.text().trim().to_string()),
    );
    if let Some(body) = node.field("body") {
        attrs.extend(
            body.children()
                .filter(|c| c.kind().as_ref() == "inner_attribute_item")
                .map(|c| c.text().trim().to_string()),
        );
    }
    attrs
}

/// Outer doc comment (`///` lines or a `/** */` block) directly above the node.
pub fn extract_doc_comment<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    let mut lines = Vec::new();
    let mut current = node.prev();
    while let Some(sibling) = current {
        let kind = sibling.kind();
        match kind.as_ref() {
            "line_comment" => {
                let text = sibling.text().to_string();
                let Some(doc) = text.strip_prefix("///").filter(|d| !d.starts_with('/')) else {
                    break;
                };
                lines.push(doc.trim().to_string());
            }
            "block_comment" => {
                let text = sibling.text().to_string();
                let Some(doc) = text
                    .strip_prefix("/**")
                    .filter(|d| !d.starts_with('*') && !d.starts_with('/'))
                else {
                    break;
                };
                let body = doc.trim_end_matches("*/");
                for line in body.lines().rev() {
                    let line = line.trim().trim_start_matches('*').trim();
                    lines.push(line.to_string());
                }
            }
            "attribute_item" => {}
            _ => break,
        }
        current = sibling.prev();
    }
    lines.reverse();
    let doc = lines.join("\n").trim().to_string();
    (!doc.is_empty()).then_some(doc)
}

/// Names of the generic parameters declared on the node.
///
/// Covers both the `type_parameter`/`lifetime_parameter` shape of newer
/// grammars and the `constrained_type_parameter`/bare identifier shape of
/// older ones. Lifetimes keep their leading `'`.
pub fn extract_generics<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    let Some(params) = node.field("type_parameters") else {
        return Vec::new();
    };
    params
        .children()
        .filter_map(|c| {
            let kind = c.kind();
            match kind.as_ref() {
                "type_identifier" | "lifetime" => Some(c.text().to_string()),
                "type_parameter"
                | "lifetime_parameter"
                | "const_parameter"
                | "optional_type_parameter" => c
                    .field("name")
                    .or_else(|| c.children().find(|g| is_generic_name(g.kind().as_ref())))
                    .map(|n| n.text().to_string()),
                "constrained_type_parameter" => c.field("left").map(|n| n.text().to_string()),
                _ => None,
            }
        })
        .collect()
}

/// Declaration text before the body, whitespace-normalized.
///
/// Bodiless declarations (trait method signatures) drop the trailing `;`.
pub fn extract_signature<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    let text = node.text();
    let head = node.field("body").map_or_else(
        || text.trim_end().trim_end_matches(';').to_string(),
        |body| {
            let offset = body.range().start.saturating_sub(node.range().start);
            text.get(..offset).unwrap_or(text.as_ref()).to_string()
        },
    );
    head.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Return type text after `->`, if the function declares one.
pub fn extract_return_type<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    node.field("return_type")
        .map(|rt| rt.text().trim_start_matches("->").trim().to_string())
        .filter(|rt| !rt.is_empty())
}

/// Parameters of a function node, with receivers synthesized.
pub fn extract_parameters<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<FunctionParameter> {
    let Some(params_node) = node.field("parameters") else {
        return Vec::new();
    };
    params_node
        .children()
        .filter_map(|c| {
            let kind = c.kind();
            match kind.as_ref() {
                "self_parameter" => Some(FunctionParameter::receiver(has_mutable_specifier(&c))),
                "parameter" => Some(typed_parameter(&c)),
                "variadic_parameter" => Some(FunctionParameter {
                    name: "...".to_string(),
                    ty: "...".to_string(),
                    is_self: false,
                    is_mutable: false,
                }),
                _ => None,
            }
        })
        .collect()
}

/// `pattern: Type`, including a typed receiver such as `self: Box<Self>`.
fn typed_parameter<D: ast_grep_core::Doc>(param: &Node<D>) -> FunctionParameter {
    let text = param.text();
    let name = param.field("pattern").map_or_else(
        || {
            text.split_once(':')
                .map_or(text.as_ref(), |(pattern, _)| pattern)
                .trim()
                .trim_start_matches("mut ")
                .to_string()
        },
        |p| p.text().to_string(),
    );
    let ty = param.field("type").map_or_else(
        || {
            text.split_once(':')
                .map(|(_, ty)| ty.trim().to_string())
                .unwrap_or_default()
        },
        |t| t.text().to_string(),
    );
    FunctionParameter {
        is_self: name == "self",
        is_mutable: has_mutable_specifier(param),
        name,
        ty,
    }
}

fn has_mutable_specifier<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.children()
        .any(|c| c.kind().as_ref() == "mutable_specifier")
}

fn is_generic_name(kind: &str) -> bool {
    matches!(kind, "type_identifier" | "lifetime" | "identifier")
}

fn is_comment(kind: &str) -> bool {
    kind == "line_comment" || kind == "block_comment"
}

fn is_attribute(kind: &str) -> bool {
    kind == "attribute_item" || kind == "inner_attribute_item"
}
