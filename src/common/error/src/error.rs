//! Core error types for hypernet.

use thiserror::Error;

/// Result type alias using `HypernetError`.
pub type HypernetResult<T> = std::result::Result<T, HypernetError>;

/// Core error type for hypernet operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HypernetError {
    /// Read or delete of a node, edge, or attribute key that does not exist.
    #[error("NotFound: {0}")]
    NotFound(String),

    /// A null identifier was used as a node or edge ID.
    #[error("InvalidKey: {0}")]
    InvalidKey(String),

    /// An edge was created with zero members.
    #[error("EmptyEdge: {0}")]
    EmptyEdge(String),

    /// Edge members were given in a form that cannot be read as discrete members.
    #[error("InvalidMembers: {0}")]
    InvalidMembers(String),

    /// An identifier could not be cast to the requested type on load.
    #[error("TypeConversion: {0}")]
    TypeConversion(String),

    /// Invalid value provided.
    #[error("ValueError: {0}")]
    ValueError(String),

    /// Input data does not follow the expected layout.
    #[error("FormatError: {0}")]
    FormatError(String),

    /// Invalid parameter provided.
    #[error("InvalidParameter: {0}")]
    InvalidParameter(String),

    /// Internal error (broken invariant inside hypernet).
    #[error("InternalError: {0}")]
    InternalError(String),

    /// IO error.
    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("SerdeJsonError: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl HypernetError {
    /// Create a new `NotFound` error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new `InvalidKey` error.
    pub fn invalid_key<S: Into<String>>(msg: S) -> Self {
        Self::InvalidKey(msg.into())
    }

    /// Create a new `EmptyEdge` error.
    pub fn empty_edge<S: Into<String>>(msg: S) -> Self {
        Self::EmptyEdge(msg.into())
    }

    /// Create a new `InvalidMembers` error.
    pub fn invalid_members<S: Into<String>>(msg: S) -> Self {
        Self::InvalidMembers(msg.into())
    }

    /// Create a new `TypeConversion` error.
    pub fn type_conversion<S: Into<String>>(msg: S) -> Self {
        Self::TypeConversion(msg.into())
    }

    /// Create a new `ValueError`.
    pub fn value_error<S: Into<String>>(msg: S) -> Self {
        Self::ValueError(msg.into())
    }

    /// Create a new `FormatError`.
    pub fn format<S: Into<String>>(msg: S) -> Self {
        Self::FormatError(msg.into())
    }

    /// Create a new `InvalidParameter` error.
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create a new `InternalError`.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::InternalError(msg.into())
    }

    /// Whether this is a `NotFound` error.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Ensure a condition holds, returning the given error variant if not.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident: $($msg:tt)*) => {
        if !$cond {
            return Err($crate::HypernetError::$variant(format!($($msg)*)));
        }
    };
    ($cond:expr, $msg:expr) => {
        if !$cond {
            return Err($crate::HypernetError::InternalError($msg.to_string()));
        }
    };
}

/// Return early with a `NotFound` error.
#[macro_export]
macro_rules! not_found {
    ($($arg:tt)*) => {
        return Err($crate::HypernetError::NotFound(format!($($arg)*)))
    };
}

/// Return early with a `ValueError`.
#[macro_export]
macro_rules! value_err {
    ($($arg:tt)*) => {
        return Err($crate::HypernetError::ValueError(format!($($arg)*)))
    };
}
