use tonic::Status;

use business::domain::errors::ErrorKind;
use business::domain::product::errors::ProductError;

/// Message sent instead of store details on internal failures.
pub const INTERNAL_MESSAGE: &str = "product.internal";

pub trait IntoStatus {
    fn into_status(self) -> Status;
}

impl IntoStatus for ProductError {
    fn into_status(self) -> Status {
        match self.kind() {
            ErrorKind::InvalidArgument => Status::invalid_argument(self.to_string()),
            ErrorKind::NotFound => Status::not_found(self.to_string()),
            ErrorKind::Internal => {
                tracing::error!(error = ?self, "product operation failed");
                Status::internal(INTERNAL_MESSAGE)
            }
        }
    }
}

/// Create and update requests must carry a product body.
pub fn missing_product() -> Status {
    Status::invalid_argument("product.missing")
}
