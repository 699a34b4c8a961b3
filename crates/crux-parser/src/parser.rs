//! Grammar backends and the one place source text becomes a syntax tree.
//!
//! Two backends satisfy the same contract: the Rust grammar bundled with
//! `ast-grep-language`, and the standalone `tree-sitter-rust` grammar
//! wrapped as a custom ast-grep language. Extraction code only ever sees
//! `ast_grep_core::Node<StrDoc<L>>`, so it is written once for both.

use ast_grep_core::AstGrep;
use ast_grep_core::tree_sitter::{LanguageExt, StrDoc};
use ast_grep_language::SupportLang;

use crate::error::ParserError;

mod rust_grammar;

pub use rust_grammar::RustGrammar;

/// The concrete tree type produced by a backend language `L`.
pub type SyntaxTree<L> = AstGrep<StrDoc<L>>;

/// Root node kind every Rust grammar must produce.
const SOURCE_FILE_KIND: &str = "source_file";

/// A source of a loaded Rust grammar.
pub trait GrammarBackend {
    /// The ast-grep language handle the backend hands out once loaded.
    type Lang: LanguageExt + Clone;

    /// Short backend name for logs and error messages.
    fn name(&self) -> &'static str;

    /// Load the grammar.
    ///
    /// # Errors
    /// Returns [`ParserError::Initialization`] if the grammar cannot be used.
    fn load(&self) -> Result<Self::Lang, ParserError>;
}

/// Rust grammar compiled into `ast-grep-language`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledGrammar;

impl GrammarBackend for BundledGrammar {
    type Lang = SupportLang;

    fn name(&self) -> &'static str {
        "bundled"
    }

    fn load(&self) -> Result<Self::Lang, ParserError> {
        probe(self.name(), SupportLang::Rust)
    }
}

/// Rust grammar from the standalone `tree-sitter-rust` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandaloneGrammar;

impl GrammarBackend for StandaloneGrammar {
    type Lang = RustGrammar;

    fn name(&self) -> &'static str {
        "standalone"
    }

    fn load(&self) -> Result<Self::Lang, ParserError> {
        rust_grammar::check_abi().map_err(|message| ParserError::Initialization {
            backend: self.name().to_string(),
            message,
        })?;
        probe(self.name(), RustGrammar)
    }
}

/// Parse source text into a syntax tree.
///
/// tree-sitter recovers from malformed input, so syntax errors surface as
/// `ERROR` nodes in the tree rather than as an `Err` here.
///
/// # Errors
/// Returns [`ParserError::Backend`] if the backend refuses to build a tree.
pub fn parse_source<L: LanguageExt + Clone>(
    source: &str,
    lang: &L,
) -> Result<SyntaxTree<L>, ParserError> {
    let doc = StrDoc::try_new(source, lang.clone())
        .map_err(|e| ParserError::Backend(e.to_string()))?;
    Ok(AstGrep::doc(doc))
}

/// Parse an empty file and check the grammar yields a Rust source file.
fn probe<L: LanguageExt + Clone>(backend: &str, lang: L) -> Result<L, ParserError> {
    let tree = parse_source("", &lang).map_err(|e| ParserError::Initialization {
        backend: backend.to_string(),
        message: e.to_string(),
    })?;
    let kind = tree.root().kind().to_string();
    if kind != SOURCE_FILE_KIND {
        return Err(ParserError::Initialization {
            backend: backend.to_string(),
            message: format!("expected root kind `{SOURCE_FILE_KIND}`, grammar produced `{kind}`"),
        });
    }
    Ok(lang)
}
