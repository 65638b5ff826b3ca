use std::env;
use std::time::Duration;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Listener configuration for the gRPC server
#[derive(Debug, Clone)]
pub struct GrpcConfig {
    pub ip: String,
    pub port: String,
    /// Requests running longer than this are aborted with a non-OK status.
    pub request_timeout: Duration,
}

impl GrpcConfig {
    /// Load gRPC configuration from environment variables
    ///
    /// Environment variables:
    /// - GRPC_IP: IP address to bind (default: "127.0.0.1")
    /// - GRPC_PORT: Port to bind (default: "50051")
    /// - GRPC_REQUEST_TIMEOUT_SECS: Per-request deadline (default: 30)
    pub fn from_env() -> Self {
        let ip = env::var("GRPC_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("GRPC_PORT").unwrap_or_else(|_| "50051".to_string());
        let request_timeout = parse_timeout(env::var("GRPC_REQUEST_TIMEOUT_SECS").ok());

        Self {
            ip,
            port,
            request_timeout,
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn parse_timeout(raw: Option<String>) -> Duration {
    let secs = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
