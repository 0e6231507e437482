use std::{env, fmt, str::FromStr};

use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown storage backend: {0} (expected 'dynamodb' or 'memory')")]
    UnknownStorage(String),
    #[error("Unknown handler: {0} (expected 'create', 'get', 'update' or 'delete')")]
    UnknownHandler(String),
    #[error("Storage backend '{0}' is not compiled in; enable the matching feature")]
    BackendUnavailable(StorageBackend),
}

/// Which repository implementation backs the handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    DynamoDb,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dynamodb" | "dynamo" => Ok(Self::DynamoDb),
            "memory" | "inmemory" => Ok(Self::Memory),
            other => Err(ConfigError::UnknownStorage(other.to_string())),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DynamoDb => f.write_str("dynamodb"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Process-wide configuration, read once at startup.
///
/// The value is handed to the storage constructors; nothing reads the
/// environment after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Target table name (default: empty, which the store will reject).
    pub table_name: String,
    /// Custom endpoint URL, e.g. local DynamoDB.
    pub endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1").
    pub region: String,
    /// Storage backend (default: dynamodb).
    pub storage: StorageBackend,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - DynamoDB table holding student records
    /// - `AWS_ENDPOINT_URL` - Endpoint override (optional)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `STORAGE` - `dynamodb` or `memory` (default: "dynamodb")
    ///
    /// A missing `TABLE_NAME` is not an error here. It is logged, and the
    /// first store call fails instead.
    pub fn from_env() -> Result<Self, ConfigError> {
        let table_name = env::var("TABLE_NAME").unwrap_or_default();
        if table_name.is_empty() {
            tracing::warn!("TABLE_NAME is not set; store operations will fail");
        }

        let storage = match env::var("STORAGE") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::default(),
        };

        Ok(Self {
            table_name,
            endpoint_url: env::var("AWS_ENDPOINT_URL").ok().filter(|v| !v.is_empty()),
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            storage,
        })
    }

    /// Sets the storage backend.
    pub fn with_storage(mut self, storage: StorageBackend) -> Self {
        self.storage = storage;
        self
    }

    /// Returns a display string for the target store.
    pub fn target_display(&self) -> String {
        match (self.storage, &self.endpoint_url) {
            (StorageBackend::Memory, _) => "in-memory store".to_string(),
            (StorageBackend::DynamoDb, Some(url)) => {
                format!("Local DynamoDB ({}) table '{}'", url, self.table_name)
            }
            (StorageBackend::DynamoDb, None) => format!(
                "AWS DynamoDB (region: {}) table '{}'",
                self.region, self.table_name
            ),
        }
    }
}
