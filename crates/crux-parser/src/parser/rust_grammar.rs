use std::borrow::Cow;

use ast_grep_core::language::Language;
use ast_grep_core::matcher::{Pattern, PatternBuilder, PatternError};
use ast_grep_core::tree_sitter::{LanguageExt, StrDoc, TSLanguage};

/// The `tree-sitter-rust` grammar as an ast-grep language.
#[derive(Clone, Copy, Debug)]
pub struct RustGrammar;

impl Language for RustGrammar {
    fn pre_process_pattern<'q>(&self, query: &'q str) -> Cow<'q, str> {
        Cow::Borrowed(query)
    }

    fn kind_to_id(&self, kind: &str) -> u16 {
        self.get_ts_language().id_for_node_kind(kind, true)
    }

    fn field_to_id(&self, field: &str) -> Option<u16> {
        self.get_ts_language()
            .field_id_for_name(field)
            .map(std::num::NonZero::get)
    }

    fn build_pattern(&self, builder: &PatternBuilder) -> Result<Pattern, PatternError> {
        builder.build(|src| StrDoc::try_new(src, *self))
    }
}

impl LanguageExt for RustGrammar {
    fn get_ts_language(&self) -> TSLanguage {
        tree_sitter_rust::LANGUAGE.into()
    }
}

/// Check the grammar was generated for an ABI the linked runtime accepts.
pub(super) fn check_abi() -> Result<(), String> {
    let language = tree_sitter::Language::new(tree_sitter_rust::LANGUAGE);
    let abi = language.abi_version();
    let supported = tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION..=tree_sitter::LANGUAGE_VERSION;
    if supported.contains(&abi) {
        Ok(())
    } else {
        Err(format!(
            "grammar ABI {abi} outside supported range {}..={}",
            supported.start(),
            supported.end()
        ))
    }
}
