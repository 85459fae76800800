use crate::error::ContactError;
use crate::models::ApiResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Storage details stay out of `message`.
        let body = if self.is_server_error() {
            tracing::error!("Request failed: {}", self);
            ApiResponse::failure("Server error").with_error(self.to_string())
        } else {
            ApiResponse::failure(self.to_string())
        };

        (status, Json(body)).into_response()
    }
}

#[must_use]
pub(crate) fn route_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure("Route not found")),
    )
        .into_response()
}
