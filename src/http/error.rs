use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Handler-boundary error. Clients only ever see the status code; details go to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing todo id in path")]
    MissingId,
    #[error("could not read request body: {0}")]
    UnreadableBody(#[from] BytesRejection),
    #[error("malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingId | ApiError::UnreadableBody(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "rejected request");
        }
        status.into_response()
    }
}
