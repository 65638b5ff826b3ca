use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Gateway status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Gateway version
    pub version: String,
}

/// Liveness endpoint of the gateway itself.
///
/// Does not call the catalog: a healthy gateway with an unreachable catalog
/// still answers here, while product routes answer 500.
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns "healthy" with the current timestamp and the gateway version.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::{Route, http::StatusCode, test::TestClient};
    use poem_openapi::OpenApiService;

    #[tokio::test]
    async fn should_report_healthy() {
        let api = OpenApiService::new(Api::new(), "Catalog Gateway API", "test");
        let cli = TestClient::new(Route::new().nest("/", api));

        let resp = cli.get("/health").send().await;

        resp.assert_status(StatusCode::OK);
        let json = resp.json().await;
        json.value().object().get("status").assert_string("healthy");
    }
}
