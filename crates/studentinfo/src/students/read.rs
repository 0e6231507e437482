use std::sync::Arc;

use studentinfo_core::storage::{RepositoryError, Result, StudentRepository};
use studentinfo_core::student::{StudentKey, StudentRecord};

use super::log_failure;

/// Fetches a student record by composite key.
#[derive(Clone)]
pub struct ReadHandler {
    repo: Arc<dyn StudentRepository>,
}

impl ReadHandler {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    /// Returns the stored record, or `RepositoryError::NotFound` on a miss.
    pub async fn handle(&self, key: StudentKey) -> Result<StudentRecord> {
        let result = match self.repo.get_student(&key).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(RepositoryError::student_not_found(&key)),
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            log_failure("read", &key, err);
        }

        result
    }
}
