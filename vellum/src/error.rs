//! Error handling.
//!
//! Splits the same way the teacher crate splits `crate::error::Error` from
//! `crate::parse::error::PosError`: a single `thiserror`-derived enum is the
//! one type every public entry point returns, and an internal,
//! position-aware parser error converts into it.

use crate::parse::{ParseError, ParseErrorKind};

/// Type alias for `Result` with the default [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Lexical or grammatical violation: unterminated string, missing `.`,
    /// unexpected token, invalid escape in a strict context.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },
    /// An IRI fails absolute-IRI validation, or is a relative reference with
    /// no base available to resolve it against.
    #[error("invalid IRI {text:?}: {reason}")]
    InvalidIri { text: String, reason: String },
    /// A prefixed name references a prefix not in scope (and not
    /// auto-recoverable via `auto_add_common_prefixes`).
    #[error("unknown prefix {0:?}")]
    UnknownPrefix(String),
    /// A value cannot be represented under the current options, e.g. a
    /// literal the encoder refuses to emit unescaped, or an IRI containing
    /// disallowed whitespace.
    #[error("constraint violation: {0}")]
    Constraint(String),
    /// A relative IRI reference was resolved with no base IRI available.
    #[error("base IRI required to resolve relative reference {0:?}")]
    BaseIriRequired(String),
    /// Error while writing to the serialization target.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ParseError> for Error {
    fn from(pe: ParseError) -> Self {
        match pe.kind {
            ParseErrorKind::Syntax => Error::Syntax {
                message: pe.message,
                line: pe.line,
                column: pe.column,
            },
            ParseErrorKind::InvalidIri { text, reason } => Error::InvalidIri { text, reason },
            ParseErrorKind::UnknownPrefix(prefix) => Error::UnknownPrefix(prefix),
            ParseErrorKind::Constraint(message) => Error::Constraint(message),
            ParseErrorKind::BaseIriRequired(reference) => Error::BaseIriRequired(reference),
        }
    }
}
