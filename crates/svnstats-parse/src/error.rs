//! Error types for log parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while parsing a log file.
///
/// All of these are fatal: parsing stops at the first error and the error
/// propagates to the caller. Entries that were fully parsed and delivered
/// before the failure stay delivered; there is no rollback.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document is not well-formed XML.
    #[error("malformed log file: {source}")]
    Xml {
        #[from]
        source: quick_xml::Error,
    },

    /// The document is well-formed XML but not a valid log: a required
    /// attribute is missing, an attribute value is unrecognized, or an
    /// element appears outside its required context.
    #[error("malformed log file: {message}")]
    Structure { message: String },

    /// A `<date>` element does not contain an ISO-8601 date-time with offset.
    #[error("invalid timestamp {text:?}: {source}")]
    DateFormat {
        text: String,
        #[source]
        source: chrono::format::ParseError,
    },

    /// The log file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Create a structure error from a message.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::Structure {
            message: message.into(),
        }
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is structural (malformed document) rather than an
    /// I/O or timestamp problem.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Xml { .. } | Self::Structure { .. })
    }
}
