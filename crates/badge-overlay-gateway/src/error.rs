//! HTTP mapping for `OverlayError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use badge_overlay_core::error::{ClientCode, OverlayError};
use serde_json::json;

/// Wrapper that renders an `OverlayError` as a JSON error response.
#[derive(Debug)]
pub struct ApiError(pub OverlayError);

impl From<OverlayError> for ApiError {
    fn from(e: OverlayError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::BadGateway => StatusCode::BAD_GATEWAY,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.0.client_message() }));
        (self.status(), body).into_response()
    }
}
