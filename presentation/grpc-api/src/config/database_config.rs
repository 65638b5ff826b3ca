use std::env;
use std::sync::Arc;

use anyhow::Context;
use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Which product store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!("Invalid storage backend: {}", other)),
        }
    }
}

/// Initialize the product repository from environment variables
///
/// Environment variables:
/// - STORAGE_BACKEND: "postgres" (default) or "memory"
/// - DATABASE_URL: PostgreSQL connection string (required for postgres)
/// - MIGRATIONS_PATH: Migrations directory
///   (default: "infrastructure/persistence/migrations")
///
/// # Errors
/// Returns error if the backend is unknown, DATABASE_URL is not set,
/// the connection fails or migrations cannot be applied
pub async fn init_repository() -> anyhow::Result<Arc<dyn ProductRepository>> {
    let backend = env::var("STORAGE_BACKEND")
        .unwrap_or_else(|_| "postgres".to_string())
        .parse::<StorageBackend>()
        .map_err(anyhow::Error::msg)?;

    match backend {
        StorageBackend::Memory => {
            tracing::warn!("using in-memory product store; data is lost on shutdown");
            Ok(Arc::new(ProductRepositoryInMemory::new()))
        }
        StorageBackend::Postgres => {
            let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
            let migrations_path = env::var("MIGRATIONS_PATH")
                .unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

            let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;
            run_migrations(&pool, &migrations_path).await?;
            tracing::info!("connected to postgres product store");

            Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_storage_backend() {
        assert_eq!("postgres".parse::<StorageBackend>(), Ok(StorageBackend::Postgres));
        assert_eq!(" Memory ".parse::<StorageBackend>(), Ok(StorageBackend::Memory));
    }

    #[test]
    fn should_reject_unknown_storage_backend() {
        assert!("sqlite".parse::<StorageBackend>().is_err());
    }
}
