//! Global error handling for srcdump
//!
//! One error type covers the whole run: the fatal failures that abort it and
//! the per-file read failure that is recovered inside the scanner.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for srcdump operations
#[derive(Error, Debug)]
pub enum SrcDumpError {
    /// Root path missing or not a directory
    #[error("Invalid root directory: {0}")]
    InvalidRoot(String),

    /// Output artifact could not be created or truncated
    #[error("Cannot open output file {}: {source}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A matched file could not be read as UTF-8 text
    #[error("{source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the output artifact failed
    #[error("Write error: {0}")]
    Write(#[from] io::Error),

    /// Unexpected failure while walking the tree
    #[error("Traversal error: {0}")]
    Traversal(String),

    /// Unexpected error
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Specialized Result type for srcdump operations
pub type Result<T> = std::result::Result<T, SrcDumpError>;

/// Creates a SrcDumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::SrcDumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
