//! Numeric error codes attached to error logs.
//!
//! Ranges:
//! - 1000-1999: client and generic server errors
//! - 2000-2999: persistence errors

/// Error classification used in structured logs and dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Caller supplied a value the service cannot accept
    InvalidInput,
    /// Request body could not be parsed as the expected JSON
    InvalidJson,
    /// Requested resource was not found
    NotFound,
    /// An unexpected internal server error occurred
    InternalError,
    /// The document store failed to serve the request
    DatabaseError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidInput => 1001,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::DatabaseError => 2003,
        }
    }

    /// Message used when the error carries no detail of its own.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::InvalidJson => "Invalid JSON format",
            Self::NotFound => "Resource not found",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "Database error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
