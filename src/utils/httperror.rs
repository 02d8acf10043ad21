//! HTTP error handling and automated response generation
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::services::media::errors::FileServeError;

/// Represents an HTTP status code, optionally with a custom message.
#[derive(Debug)]
pub struct HttpError {
    /// The numeric HTTP status code to respond with.
    status: StatusCode,
    /// The message to include in the response.
    message: Option<String>,
}

impl From<StatusCode> for HttpError {
    fn from(err: StatusCode) -> Self {
        Self {
            status: err,
            message: None,
        }
    }
}

impl HttpError {
    /// Construct a new HTTP error with a given status code and message.
    pub const fn new(status: StatusCode, message: Option<String>) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let message = self
            .message
            .unwrap_or_else(|| self.status.canonical_reason().unwrap_or("").to_owned());
        (self.status, Json(json!({"message": message}))).into_response()
    }
}

impl From<FileServeError> for HttpError {
    fn from(err: FileServeError) -> Self {
        match err {
            // A path escaping the document root is indistinguishable from a missing file.
            FileServeError::InvalidPath | FileServeError::NotFound => StatusCode::NOT_FOUND.into(),
            FileServeError::Io(_)
            | FileServeError::HeaderValue(_)
            | FileServeError::DateFormat(_) => {
                error!(error = %err, "failed to serve file");
                StatusCode::INTERNAL_SERVER_ERROR.into()
            }
        }
    }
}

/// Fallback for paths no mount matched.
pub async fn not_found() -> HttpError {
    StatusCode::NOT_FOUND.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_errors_map_to_statuses() {
        assert_eq!(
            HttpError::from(FileServeError::InvalidPath).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            HttpError::from(FileServeError::NotFound).status,
            StatusCode::NOT_FOUND
        );
        let io = std::io::Error::other("disk on fire");
        assert_eq!(
            HttpError::from(FileServeError::Io(io)).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn message_defaults_to_canonical_reason() {
        let error = HttpError::new(StatusCode::GONE, None);
        assert_eq!(error.message, None);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::GONE);
    }
}
