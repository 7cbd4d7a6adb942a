//! Reusable OpenAPI response types for the error envelope.

use crate::envelope::ErrorEnvelope;
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Database error occurred: connection refused",
        "timestamp": "2025-01-01T10:00:00.000000Z"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Bad Request",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Invalid status. Use ACTIVE or INACTIVE",
        "timestamp": "2025-01-01T10:00:00.000000Z"
    })
)]
pub struct BadRequestResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "User not found with ID: 665f1c2e9b1d4a0012345678",
        "timestamp": "2025-01-01T10:00:00.000000Z"
    })
)]
pub struct NotFoundResponse(pub ErrorEnvelope);
