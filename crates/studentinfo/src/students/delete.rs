use std::sync::Arc;

use studentinfo_core::storage::{Result, StudentRepository};
use studentinfo_core::student::StudentKey;

use super::log_failure;

/// Removes the record at a composite key. Deleting a missing key succeeds.
#[derive(Clone)]
pub struct DeleteHandler {
    repo: Arc<dyn StudentRepository>,
}

impl DeleteHandler {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    /// Returns the key that was passed in.
    pub async fn handle(&self, key: StudentKey) -> Result<StudentKey> {
        if let Err(err) = self.repo.delete_student(&key).await {
            log_failure("delete", &key, &err);
            return Err(err);
        }

        tracing::info!(
            student_id = %key.student_id,
            course_id = %key.course_id,
            "Deleted student"
        );

        Ok(key)
    }
}
