//! Diagnostics for one source file.
//!
//! Two independent sources feed the list: `ERROR` nodes in the syntax tree,
//! and a raw-text pass (empty input, unterminated comments, delimiter
//! balance, keywords borrowed from other languages). Findings are data; a
//! parse with errors still produces a crate.

mod scanner;
mod syntax;
mod validation;

use ast_grep_core::Node;

use crate::types::ParseError;

/// Syntax errors from the tree, followed by raw-text findings.
pub fn collect<D: ast_grep_core::Doc>(source: &str, root: &Node<'_, D>) -> Vec<ParseError> {
    let mut findings = syntax::syntax_errors(root);
    findings.extend(validation::validate(source));
    findings
}
