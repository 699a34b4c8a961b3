//! Fatal error types for crux-parser.
//!
//! Recoverable findings (syntax errors, validation warnings) are not errors
//! in this sense: they are reported as [`crate::types::ParseError`] values
//! inside a successful [`crate::types::ParseResult`].

use std::time::Duration;

/// Errors that abort a parse call or engine lifecycle transition.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Failed to initialize {backend} grammar: {message}")]
    Initialization { backend: String, message: String },

    #[error("Parser engine is not initialized")]
    NotInitialized,

    #[error("Backend failure during parse: {0}")]
    Backend(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// Constructed by callers that enforce a deadline around a parse call.
    #[error("Parse exceeded timeout of {limit:?} (took {elapsed:?})")]
    Timeout { limit: Duration, elapsed: Duration },

    /// Constructed by callers that enforce a memory ceiling.
    #[error("Parse exceeded memory limit of {limit_bytes} bytes")]
    Memory { limit_bytes: u64 },

    /// Constructed by callers that reject oversized inputs up front.
    #[error("Source of {size_bytes} bytes exceeds limit of {limit_bytes} bytes")]
    FileSize { size_bytes: u64, limit_bytes: u64 },
}

impl ParserError {
    /// Check a source length against a byte limit.
    ///
    /// # Errors
    /// Returns [`ParserError::FileSize`] when `source_len` exceeds `limit_bytes`.
    pub fn check_file_size(source_len: usize, limit_bytes: u64) -> Result<(), Self> {
        let size_bytes = source_len as u64;
        if size_bytes > limit_bytes {
            return Err(Self::FileSize {
                size_bytes,
                limit_bytes,
            });
        }
        Ok(())
    }

    /// Check an elapsed duration against a deadline.
    ///
    /// # Errors
    /// Returns [`ParserError::Timeout`] when `elapsed` is past `limit`.
    pub const fn check_timeout(elapsed: Duration, limit: Duration) -> Result<(), Self> {
        if elapsed.as_nanos() > limit.as_nanos() {
            return Err(Self::Timeout { limit, elapsed });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_size_within_limit() {
        assert!(ParserError::check_file_size(10, 10).is_ok());
    }

    #[test]
    fn file_size_over_limit() {
        let err = ParserError::check_file_size(11, 10).expect_err("should reject");
        assert!(matches!(
            err,
            ParserError::FileSize {
                size_bytes: 11,
                limit_bytes: 10
            }
        ));
    }

    #[test]
    fn timeout_reports_both_durations() {
        let err = ParserError::check_timeout(Duration::from_millis(30), Duration::from_millis(20))
            .expect_err("should time out");
        assert!(err.to_string().contains("20ms"), "{err}");
    }

    #[test]
    fn initialization_message_names_backend() {
        let err = ParserError::Initialization {
            backend: "standalone".to_string(),
            message: "abi mismatch".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to initialize standalone grammar: abi mismatch"
        );
    }
}
