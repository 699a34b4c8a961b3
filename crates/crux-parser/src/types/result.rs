use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ParsedCrate, SourceLocation};
use crate::error::ParserError;

/// Diagnostic severity. Only `Error` affects `ParseResult::success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A recoverable finding: a syntax error in the CST or a validation hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
    pub severity: Severity,
}

impl ParseError {
    #[must_use]
    pub fn error(message: impl Into<String>, location: Option<SourceLocation>) -> Self {
        Self {
            message: message.into(),
            location,
            severity: Severity::Error,
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>, location: Option<SourceLocation>) -> Self {
        Self {
            message: message.into(),
            location,
            severity: Severity::Warning,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Outcome of one parse call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// `None` only when extraction did not complete.
    #[serde(rename = "crate")]
    pub krate: Option<ParsedCrate>,
    pub errors: Vec<ParseError>,
    pub success: bool,
    /// Wall-clock milliseconds, never below 1.
    pub parse_time: u64,
}

impl ParseResult {
    /// Result of a completed extraction; `success` is derived from `errors`.
    #[must_use]
    pub fn completed(krate: ParsedCrate, errors: Vec<ParseError>, elapsed: Duration) -> Self {
        let success = !errors.iter().any(ParseError::is_error);
        Self {
            krate: Some(krate),
            errors,
            success,
            parse_time: parse_time_millis(elapsed),
        }
    }

    /// Fatal-shape result for boundaries that report failures as data.
    #[must_use]
    pub fn failed(error: &ParserError, elapsed: Duration) -> Self {
        Self {
            krate: None,
            errors: vec![ParseError::error(error.to_string(), None)],
            success: false,
            parse_time: parse_time_millis(elapsed),
        }
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ParseError> {
        self.errors.iter().filter(|e| e.severity == Severity::Warning)
    }
}

fn parse_time_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParsedModule;

    fn empty_crate() -> ParsedCrate {
        ParsedCrate {
            name: "unnamed".to_string(),
            root_module: ParsedModule {
                name: "unnamed".to_string(),
                path: "src/lib.rs".to_string(),
                items: Vec::new(),
                location: SourceLocation {
                    start_line: 1,
                    start_column: 1,
                    end_line: 1,
                    end_column: 1,
                    start_byte: 0,
                    end_byte: 0,
                },
                submodules: Vec::new(),
                references: Vec::new(),
            },
            errors: Vec::new(),
        }
    }

    #[test]
    fn warnings_do_not_fail_the_result() {
        let result = ParseResult::completed(
            empty_crate(),
            vec![ParseError::warning("Source is empty", None)],
            Duration::ZERO,
        );
        assert!(result.success);
        assert_eq!(result.warnings().count(), 1);
    }

    #[test]
    fn errors_fail_the_result() {
        let result = ParseResult::completed(
            empty_crate(),
            vec![ParseError::error("Unclosed '{'", None)],
            Duration::from_millis(3),
        );
        assert!(!result.success);
        assert_eq!(result.parse_time, 3);
    }

    #[test]
    fn parse_time_is_floored_to_one() {
        let result = ParseResult::completed(empty_crate(), Vec::new(), Duration::from_micros(5));
        assert_eq!(result.parse_time, 1);
    }

    #[test]
    fn failed_result_has_null_crate() {
        let result = ParseResult::failed(&ParserError::NotInitialized, Duration::ZERO);
        let value = serde_json::to_value(&result).expect("serialize result");
        assert!(value["crate"].is_null());
        assert_eq!(value["success"], false);
        assert_eq!(value["errors"][0]["severity"], "error");
    }
}
