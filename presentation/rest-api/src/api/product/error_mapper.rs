use poem::http::StatusCode;
use poem_openapi::payload::Json;
use tonic::{Code, Status};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for Status {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match self.code() {
            Code::InvalidArgument => (StatusCode::BAD_REQUEST, "invalid argument"),
            Code::NotFound => (StatusCode::NOT_FOUND, "not found"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = ?self.code(), detail = self.message(), "catalog call failed");
        }

        (
            status,
            Json(ErrorResponse {
                message: message.to_string(),
                detail: self.message().to_string(),
            }),
        )
    }
}

/// Body for requests rejected before reaching the catalog.
pub fn bind_error(err: poem::Error) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        message: "error to bind".to_string(),
        detail: err.to_string(),
    })
}
