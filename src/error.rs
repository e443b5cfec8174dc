//! Error types for postgast.
//!
//! Three distinct failure families, never conflated:
//! - [`Error::Native`]: the engine rejected the input (syntax or semantic
//!   error), surfaced with full diagnostic position/context fields.
//! - [`Error::Domain`]: a precondition of this layer was violated (e.g.
//!   surgery on zero or multiple statements).
//! - [`Error::Library`] and the payload decode variants: the boundary itself
//!   failed — the handle could not be resolved or a payload was malformed.

use std::fmt;

use thiserror::Error;

/// Structured error reported by the native engine.
///
/// All fields are deep copies taken while the native error struct was still
/// valid; nothing here borrows native memory. Absent native fields map to an
/// empty string (`cursorpos`/`lineno` to 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeError {
    /// Human-readable error description.
    pub message: String,
    /// Internal C function where the error originated.
    pub funcname: String,
    /// Internal C source file.
    pub filename: String,
    /// Line number in the C source file.
    pub lineno: i32,
    /// 1-based byte position in the SQL input where the error was detected,
    /// 0 if unavailable.
    pub cursorpos: i32,
    /// Additional parser context, empty if none.
    pub context: String,
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if self.cursorpos > 0 {
            write!(f, " (at position {})", self.cursorpos)?;
        }
        Ok(())
    }
}

/// All errors surfaced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The native engine rejected the input.
    #[error("{0}")]
    Native(NativeError),

    /// A precondition of this layer was violated by the caller.
    #[error("{0}")]
    Domain(String),

    /// The native library handle could not be initialized.
    #[error("libpg_query unavailable: {0}")]
    Library(String),

    /// A binary tree payload failed to decode.
    #[error("invalid parse tree payload: {0}")]
    Decode(#[from] prost::DecodeError),

    /// A JSON payload failed to decode.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A native text payload was not valid UTF-8.
    #[error("native payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl Error {
    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// The native error details, if this is a native-reported error.
    pub fn as_native(&self) -> Option<&NativeError> {
        match self {
            Self::Native(err) => Some(err),
            _ => None,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_error_display_includes_position() {
        let err = NativeError {
            message: "syntax error at or near \"SELEC\"".into(),
            funcname: "scanner_yyerror".into(),
            filename: "scan.l".into(),
            lineno: 1244,
            cursorpos: 1,
            context: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "syntax error at or near \"SELEC\" (at position 1)"
        );
    }

    #[test]
    fn test_native_error_display_without_position() {
        let err = NativeError {
            message: "out of memory".into(),
            funcname: String::new(),
            filename: String::new(),
            lineno: 0,
            cursorpos: 0,
            context: String::new(),
        };
        assert_eq!(err.to_string(), "out of memory");
    }

    #[test]
    fn test_domain_and_native_are_distinct() {
        let domain = Error::domain("expected exactly one statement, found 2");
        assert!(domain.as_native().is_none());
        assert_eq!(
            domain.to_string(),
            "expected exactly one statement, found 2"
        );
    }
}
