//! Error types for DynamoDB operations.

use studentinfo::config::ConfigError;
use studentinfo_core::storage::RepositoryError;
use thiserror::Error;

use super::config::KeySchema;

/// Result type alias for dynamodb module.
pub type Result<T> = std::result::Result<T, DynamodbError>;

/// Errors that can occur during DynamoDB operations.
#[derive(Error, Debug)]
pub enum DynamodbError {
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("Table '{table_name}' not found")]
    TableNotFound { table_name: String },

    #[error("Table '{table_name}' has key schema [{actual}], expected [{expected}]; recreate it with --destroy first")]
    KeySchemaMismatch {
        table_name: String,
        expected: KeySchema,
        actual: KeySchema,
    },

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Timeout waiting for table to become active")]
    TableActivationTimeout,

    #[error("Store error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
