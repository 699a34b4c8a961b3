//! Mapping from node spans and raw byte offsets to [`SourceLocation`].

use ast_grep_core::Node;

use crate::types::SourceLocation;

/// Location of a syntax node.
pub fn node_location<D: ast_grep_core::Doc>(node: &Node<D>) -> SourceLocation {
    let range = node.range();
    let start = node.start_pos();
    let end = node.end_pos();
    SourceLocation {
        start_line: to_u32(start.line() + 1),
        start_column: to_u32(start.column(node) + 1),
        end_line: to_u32(end.line() + 1),
        end_column: to_u32(end.column(node) + 1),
        start_byte: to_u32(range.start),
        end_byte: to_u32(range.end),
    }
}

/// Byte offset to line/column lookup over raw source text.
///
/// Used for diagnostics found by scanning text rather than the tree.
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    /// 1-based line and character column of a byte offset.
    #[must_use]
    pub fn position(&self, offset: usize) -> (u32, u32) {
        let offset = offset.min(self.source.len());
        let line = self.line_starts.partition_point(|&s| s <= offset) - 1;
        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..offset)
            .map_or(offset - line_start, |s| s.chars().count());
        (to_u32(line + 1), to_u32(column + 1))
    }

    /// Location of the byte range `start..end`.
    #[must_use]
    pub fn location(&self, start: usize, end: usize) -> SourceLocation {
        let start = start.min(self.source.len());
        let end = end.clamp(start, self.source.len());
        let (start_line, start_column) = self.position(start);
        let (end_line, end_column) = self.position(end);
        SourceLocation {
            start_line,
            start_column,
            end_line,
            end_column,
            start_byte: to_u32(start),
            end_byte: to_u32(end),
        }
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast_grep_core::matcher::KindMatcher;
    use ast_grep_language::{LanguageExt, SupportLang};
    use pretty_assertions::assert_eq;

    #[test]
    fn node_location_is_one_based() {
        let source = "\n\nfn hello() {}\n";
        let root = SupportLang::Rust.ast_grep(source);
        let func = root
            .root()
            .find(KindMatcher::new("function_item", SupportLang::Rust))
            .expect("should find function");
        assert_eq!(
            node_location(&func),
            SourceLocation {
                start_line: 3,
                start_column: 1,
                end_line: 3,
                end_column: 14,
                start_byte: 2,
                end_byte: 15,
            }
        );
    }

    #[test]
    fn multi_line_node_spans_lines() {
        let source = "struct Point {\n    x: f64,\n}";
        let root = SupportLang::Rust.ast_grep(source);
        let item = root
            .root()
            .find(KindMatcher::new("struct_item", SupportLang::Rust))
            .expect("should find struct");
        let location = node_location(&item);
        assert_eq!(location.start_line, 1);
        assert_eq!(location.end_line, 3);
        assert!(location.is_well_formed());
    }

    #[test]
    fn line_index_counts_characters() {
        let index = LineIndex::new("let é = 1;\n  }");
        assert_eq!(index.position(0), (1, 1));
        // "let é" is 6 bytes but 5 characters.
        assert_eq!(index.position(6), (1, 6));
        assert_eq!(index.position(14), (2, 3));
    }

    #[test]
    fn line_index_clamps_past_end() {
        let index = LineIndex::new("ab");
        let location = index.location(1, 99);
        assert_eq!(location.end_byte, 2);
        assert!(location.is_well_formed());
    }
}
