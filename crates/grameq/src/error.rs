//! Error types for grameq

use std::fmt;

/// Result type alias for grameq operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for structural comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A configured field name does not exist on the compared type
    FieldNotFound {
        /// Type the comparison ran on
        type_name: &'static str,
        /// The missing field name
        field: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FieldNotFound { type_name, field } => {
                write!(f, "Field '{}' not found on type '{}'", field, type_name)
            }
        }
    }
}

impl std::error::Error for Error {}
