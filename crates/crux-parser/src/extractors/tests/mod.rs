use ast_grep_language::{LanguageExt, SupportLang};

use super::*;
pub(super) use crate::types::{EnumVariant, FunctionParameter, StructField, Visibility};

mod data_types;

/// Extract the direct children of the source file, like a module body.
fn parse_and_extract(source: &str) -> Vec<ParsedItem> {
    let root = SupportLang::Rust.ast_grep(source);
    extract_body_items(&root.root())
}

fn find_by_name<'a>(items: &'a [ParsedItem], name: &str) -> &'a ParsedItem {
    items
        .iter()
        .find(|i| i.name == name)
        .unwrap_or_else(|| panic!("no item named '{name}' found"))
}

fn sample_items() -> Vec<ParsedItem> {
    parse_and_extract(include_str!("../../../tests/fixtures/sample.rs"))
}
