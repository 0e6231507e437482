//! A repository whose every call fails, for exercising error paths.

use async_trait::async_trait;

use studentinfo_core::storage::{RepositoryError, Result, StudentRepository};
use studentinfo_core::student::{StudentChanges, StudentKey, StudentRecord};

pub struct FailingRepository {
    error: RepositoryError,
}

impl FailingRepository {
    pub fn new(error: RepositoryError) -> Self {
        Self { error }
    }

    pub fn unreachable() -> Self {
        Self::new(RepositoryError::ConnectionFailed(
            "DynamoDB unreachable: dispatch failure".to_string(),
        ))
    }

    pub fn missing_table() -> Self {
        Self::new(RepositoryError::QueryFailed("Table not found".to_string()))
    }
}

#[async_trait]
impl StudentRepository for FailingRepository {
    async fn get_student(&self, _key: &StudentKey) -> Result<Option<StudentRecord>> {
        Err(self.error.clone())
    }

    async fn put_student(&self, _record: &StudentRecord) -> Result<()> {
        Err(self.error.clone())
    }

    async fn update_student(
        &self,
        _key: &StudentKey,
        _changes: &StudentChanges,
    ) -> Result<StudentRecord> {
        Err(self.error.clone())
    }

    async fn delete_student(&self, _key: &StudentKey) -> Result<()> {
        Err(self.error.clone())
    }
}
