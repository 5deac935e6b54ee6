use super::dto::ErrorResponse;
use crate::error::ReceiptError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const PARSE_ERROR_MESSAGE: &str = "Could not parse receipt";
pub const NOT_FOUND_MESSAGE: &str = "Receipt ID does not exist";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ReceiptError::Parse(_) | ReceiptError::InvalidField(_) => {
                (StatusCode::BAD_REQUEST, PARSE_ERROR_MESSAGE)
            }
            ReceiptError::NotFound(_) => (StatusCode::BAD_REQUEST, NOT_FOUND_MESSAGE),
            ReceiptError::Store(_) | ReceiptError::Io(_) => {
                tracing::error!(error = %self, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        let body = ErrorResponse {
            error: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
