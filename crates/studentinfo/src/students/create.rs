use std::sync::Arc;

use studentinfo_core::storage::{Result, StudentRepository};
use studentinfo_core::student::{CreateStudentRequest, StudentRecord};

use super::log_failure;

/// Writes a full student record, overwriting any record at the same key.
#[derive(Clone)]
pub struct CreateHandler {
    repo: Arc<dyn StudentRepository>,
}

impl CreateHandler {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    /// Returns the record that was written.
    ///
    /// The result echoes the request; it is not re-read from the store.
    pub async fn handle(&self, request: CreateStudentRequest) -> Result<StudentRecord> {
        let record = request.into_record();

        if let Err(err) = self.repo.put_student(&record).await {
            log_failure("create", &record.key(), &err);
            return Err(err);
        }

        tracing::info!(
            student_id = %record.student_id,
            course_id = %record.course_id,
            "Created student"
        );

        Ok(record)
    }
}
