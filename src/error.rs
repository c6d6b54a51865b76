//! Error types for document assembly and packaging.
//!
//! Construction errors (`InvalidArgument`, `ColumnMismatch`) come from literal
//! content that is structurally invalid and indicate a defect in the content
//! tables. The remaining variants come from serialization and file output.
use thiserror::Error;

/// Main error type for specdoc operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A constructor received a parameter outside its accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A table row does not have one cell per column
    #[error("Column mismatch in row {row}: expected {expected} cells, found {found}")]
    ColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// Theme configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Zip(err.to_string())
    }
}

/// Result type for specdoc operations.
pub type Result<T> = std::result::Result<T, Error>;
