use thiserror::Error;

use crate::student::{StudentKey, ENTITY_TYPE_STUDENT};

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    /// Not produced while creates overwrite; reserved for a create that
    /// rejects an existing key, which surfaces as 409.
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Not-found error for a student key.
    pub fn student_not_found(key: &StudentKey) -> Self {
        Self::NotFound {
            entity_type: ENTITY_TYPE_STUDENT,
            id: key.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Student",
            id: "s1/c1".to_string(),
        };
        assert_eq!(error.to_string(), "Student not found: s1/c1");
    }

    #[test]
    fn test_student_not_found_uses_composite_key() {
        let error = RepositoryError::student_not_found(&StudentKey::new("s1", "c1"));

        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Student not found: s1/c1");
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Student",
            id: "s1/c1".to_string(),
        };
        assert_eq!(error.to_string(), "Student already exists: s1/c1");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("dispatch failure".to_string());
        assert_eq!(error.to_string(), "Connection failed: dispatch failure");
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("Table not found".to_string());
        assert_eq!(error.to_string(), "Query failed: Table not found");
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("Missing or invalid field: year".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid data: Missing or invalid field: year"
        );
    }
}
