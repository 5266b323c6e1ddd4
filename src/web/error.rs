//! HTTP mapping for pipeline and store failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::app::HotentryError;

/// Body of every 500; the cause only goes to the log.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Every failure while serving a request is a 500; the server keeps running.
impl IntoResponse for HotentryError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
    }
}
