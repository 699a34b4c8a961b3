//! Extraction settings: which grammar to load and which items to keep.

use crux_parser::ParseOptions;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Grammar backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Grammar bundled with ast-grep.
    #[default]
    Bundled,
    /// Standalone `tree-sitter-rust` grammar.
    Standalone,
}

const fn default_true() -> bool {
    true
}

fn default_crate_name() -> String {
    crux_parser::DEFAULT_CRATE_NAME.to_string()
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParserConfig {
    #[serde(default)]
    pub backend: BackendKind,

    #[serde(default = "default_true")]
    pub include_private_items: bool,

    #[serde(default = "default_true")]
    pub include_doc_comments: bool,

    /// Accepted and passed through; ordinary comments are never extracted.
    #[serde(default)]
    pub include_comments: bool,

    /// Deepest inline-module nesting to recurse into. Unbounded when unset.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Advisory parse deadline in milliseconds.
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// Name given to the parsed crate.
    #[serde(default = "default_crate_name")]
    pub crate_name: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            include_private_items: true,
            include_doc_comments: true,
            include_comments: false,
            max_depth: None,
            timeout_ms: None,
            crate_name: default_crate_name(),
        }
    }
}

impl ParserConfig {
    /// Reject values that load fine but make no sense.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] for an empty crate name or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.crate_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "parser.crate_name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "parser.timeout_ms".to_string(),
                reason: "must be greater than zero when set".to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn to_options(&self) -> ParseOptions {
        ParseOptions {
            include_comments: self.include_comments,
            include_doc_comments: self.include_doc_comments,
            include_private_items: self.include_private_items,
            max_depth: self.max_depth,
            timeout_ms: self.timeout_ms,
        }
    }
}
