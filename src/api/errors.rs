use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// API error type with HTTP status code and message
///
/// Client errors carry their message as a plain-text body. Server errors
/// are logged and answered with an empty body so no internals leak.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "request failed");
            return self.status.into_response();
        }

        (self.status, self.message).into_response()
    }
}

impl From<crate::application::ServiceError> for ApiError {
    fn from(err: crate::application::ServiceError) -> Self {
        Self::internal_server_error(err.to_string())
    }
}
