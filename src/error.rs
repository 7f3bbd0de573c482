//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use std::path::PathBuf;
use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Why a piece of text could not be turned into a reference.
///
/// Callers that only need "couldn't understand reference" can treat every
/// variant the same way; the distinction is there for logs and hints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text matches none of the reference shapes.
    #[error("unrecognized reference format: {0:?}")]
    Unrecognized(String),

    /// The shape was fine but the book name resolves to nothing.
    #[error("unknown book: {0:?}")]
    UnknownBook(String),

    /// Well-formed reference that lies outside the book or runs backwards.
    #[error("invalid reference {input:?}: {reason}")]
    InvalidReference {
        /// The text that was parsed.
        input: String,
        /// Which constraint was violated.
        reason: &'static str,
    },
}

/// Errors raised while assembling a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// An alias points at a book id the registry does not know.
    #[error("alias {alias:?} targets unknown book id {target:?}")]
    UnknownAliasTarget {
        /// The alias text as supplied.
        alias: String,
        /// The book id it was mapped to.
        target: String,
    },

    /// An alias would capture another book's canonical name or id.
    #[error("alias {alias:?} is the canonical name or id of {book}")]
    ShadowsCanonicalName {
        /// The alias text as supplied.
        alias: String,
        /// The book that already owns that name.
        book: String,
    },

    /// An alias normalizes to nothing (empty or only punctuation).
    #[error("alias {0:?} is empty after normalization")]
    EmptyAlias(String),
}

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// JSON (de)serialization error
    #[error("JSON error in {file:?}: {source}")]
    Json {
        /// The underlying serde error.
        source: serde_json::Error,
        /// File being read, if any.
        file: Option<PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Reference text could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Registry could not be built
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a JSON error with file context
    pub fn json(source: serde_json::Error, file: impl Into<Option<PathBuf>>) -> Self {
        Self::Json { source, file: file.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json { source: e, file: None }
    }
}
