use serde::{Deserialize, Serialize};

/// Span of a node or diagnostic in the source text.
///
/// Lines and columns are 1-based (columns count characters); byte offsets
/// are 0-based and end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub start_byte: u32,
    pub end_byte: u32,
}

impl SourceLocation {
    /// Whether the span is ordered: end never precedes start.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.end_byte >= self.start_byte
            && self.end_line >= self.start_line
            && (self.end_line != self.start_line || self.end_column >= self.start_column)
    }
}
