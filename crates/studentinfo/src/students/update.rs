use std::sync::Arc;

use studentinfo_core::storage::{Result, StudentRepository};
use studentinfo_core::student::{StudentRecord, UpdateStudentRequest};

use super::log_failure;

/// Rewrites name, email and year of the record at the requested key.
///
/// The key itself is never changed. A missing record is created, as an
/// unconditional `UpdateItem` would.
#[derive(Clone)]
pub struct UpdateHandler {
    repo: Arc<dyn StudentRepository>,
}

impl UpdateHandler {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    /// Returns the record as the store reports it after the update.
    pub async fn handle(&self, request: UpdateStudentRequest) -> Result<StudentRecord> {
        let (key, changes) = request.into_parts();

        match self.repo.update_student(&key, &changes).await {
            Ok(record) => {
                tracing::info!(
                    student_id = %record.student_id,
                    course_id = %record.course_id,
                    "Updated student"
                );
                Ok(record)
            }
            Err(err) => {
                log_failure("update", &key, &err);
                Err(err)
            }
        }
    }
}
