use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned by every failing route
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Short category such as "not found"
    pub message: String,
    /// Detail forwarded from the catalog or the body decoder
    pub detail: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
