use serde::{Deserialize, Serialize};

/// Per-call extraction options.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Accepted for compatibility; ordinary comments are never extracted.
    pub include_comments: bool,
    pub include_doc_comments: bool,
    pub include_private_items: bool,
    /// Deepest inline-module nesting to recurse into; `None` is unbounded.
    pub max_depth: Option<usize>,
    /// Advisory deadline in milliseconds, enforced by the caller.
    #[serde(rename = "timeout")]
    pub timeout_ms: Option<u64>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            include_comments: false,
            include_doc_comments: true,
            include_private_items: true,
            max_depth: None,
            timeout_ms: None,
        }
    }
}
