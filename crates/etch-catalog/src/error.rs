//! Error types for the catalog crate
//!
//! Provides error handling for:
//! - Parse operations (file → CatalogDocument)
//! - Catalog construction (id integrity)

use std::path::PathBuf;

/// Errors while reading a catalog document
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// No parser registered for file extension
    #[error("no parser registered for extension: '{0}'")]
    NoParserForExtension(String),

    /// Syntax or shape error in the document
    #[error("syntax error in {path}: {message}")]
    SyntaxError { path: PathBuf, message: String },

    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parser-specific error without a known path
    #[error("parser error: {0}")]
    ParserError(String),
}

impl ParseError {
    /// Create syntax error for path
    pub fn syntax_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SyntaxError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach a path to a path-less parser error
    #[must_use]
    pub fn at_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::ParserError(message) => Self::syntax_error(path, message),
            other => other,
        }
    }
}

/// Hard integrity violations found while building a catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Two materials share an id
    #[error("duplicate material id: '{0}'")]
    DuplicateMaterialId(String),

    /// Two etchants share an id
    #[error("duplicate etchant id: '{0}'")]
    DuplicateEtchantId(String),

    /// An entity has an empty id
    #[error("empty {kind} id at position {index}")]
    EmptyId { kind: &'static str, index: usize },
}

/// Combined catalog error
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
