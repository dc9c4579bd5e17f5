/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for `ApiError`, allowing handlers to
 * return errors directly and have them rendered as JSON.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "duplicate_email",
 *   "message": "Email already registered",
 *   "status": 409
 * }
 * ```
 *
 * Server-side failures (persistence, hashing) are logged here with their
 * source detail; the response body only ever carries the generic message.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {:?}", self);
        }

        let body = serde_json::json!({
            "error": self.kind(),
            "message": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
