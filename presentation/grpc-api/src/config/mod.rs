pub mod database_config;
pub mod grpc_config;
