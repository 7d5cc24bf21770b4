//! Error types for gramcache

use std::fmt;

/// Result type alias for gramcache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for memoization key construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Argument has no by-value hash (e.g. a NaN float)
    UnhashableArgument(String),

    /// The same named argument was given twice
    DuplicateNamedArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnhashableArgument(what) => {
                write!(f, "Argument is not usable as a cache key: {}", what)
            }
            Error::DuplicateNamedArgument(name) => {
                write!(f, "Named argument given twice: {}", name)
            }
        }
    }
}

impl std::error::Error for Error {}
