//! # crux-parser
//!
//! Structural extraction of Rust source files built on ast-grep and
//! tree-sitter.
//!
//! One call turns source text into a [`ParseResult`]: a tree of modules
//! holding every declaration (functions, structs, enums, traits, impl
//! blocks, modules, constants, statics, imports, type aliases, macros)
//! with locations, visibility, attributes and kind-specific detail, plus
//! the syntax errors and validation findings met along the way.
//!
//! Two grammar backends are available: the grammar bundled with
//! `ast-grep-language` ([`BundledGrammar`]) and the standalone
//! `tree-sitter-rust` grammar ([`StandaloneGrammar`]). Extraction is
//! written once, generic over the backend's document type.

pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod extractors;
pub mod location;
pub mod modules;
pub mod parser;
pub mod query;
pub mod types;

pub use engine::{DEFAULT_CRATE_NAME, EngineState, ParserEngine, parse};
pub use error::ParserError;
pub use parser::{BundledGrammar, GrammarBackend, StandaloneGrammar};
pub use types::*;
