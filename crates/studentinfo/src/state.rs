//! Application state shared by the HTTP handlers.

use std::sync::Arc;

use studentinfo_core::storage::StudentRepository;

use crate::config::{Config, ConfigError, StorageBackend};
use crate::storage::InMemoryRepository;
use crate::students::StudentHandlers;

/// Shared application state.
///
/// Cloned for each request; the handlers inside share one repository.
#[derive(Clone)]
pub struct AppState {
    pub students: StudentHandlers,
}

impl AppState {
    /// Creates state around an existing repository.
    pub fn with_repository(repo: Arc<dyn StudentRepository>) -> Self {
        Self {
            students: StudentHandlers::new(repo),
        }
    }

    /// Creates state with the backend selected by `config`.
    pub async fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::with_repository(build_repository(config).await?))
    }
}

impl Default for AppState {
    /// In-memory state, used by tests.
    fn default() -> Self {
        Self::with_repository(Arc::new(InMemoryRepository::new()))
    }
}

/// Builds the repository for the configured backend.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn StudentRepository>, ConfigError> {
    match config.storage {
        StorageBackend::Memory => Ok(Arc::new(InMemoryRepository::new())),
        #[cfg(feature = "dynamodb")]
        StorageBackend::DynamoDb => Ok(Arc::new(
            crate::storage::DynamoDbRepository::from_config(config).await,
        )),
        #[cfg(not(feature = "dynamodb"))]
        StorageBackend::DynamoDb => Err(ConfigError::BackendUnavailable(StorageBackend::DynamoDb)),
    }
}
