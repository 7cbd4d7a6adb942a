//! Uniform response envelope.
//!
//! Every endpoint answers with the same wrapper, success or failure:
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "User retrieved successfully",
//!   "data": { "userId": "..." },
//!   "timestamp": "2025-01-01T10:00:00.000000Z"
//! }
//! ```
//!
//! `data` is omitted when there is no payload.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
    /// Operation payload, absent on failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// RFC 3339 UTC time the response was produced
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            timestamp: now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            timestamp: now(),
        }
    }
}

/// Documentation shape of a failed envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
