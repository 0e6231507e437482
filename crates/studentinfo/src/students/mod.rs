//! The four student handlers.
//!
//! Each handler owns a repository handle injected at construction and turns
//! one request into exactly one store call. Failures are logged here and
//! returned to the caller as [`RepositoryError`], never swallowed.

mod create;
mod delete;
mod read;
mod update;

use std::sync::Arc;

use studentinfo_core::storage::{RepositoryError, StudentRepository};
use studentinfo_core::student::StudentKey;

pub use create::CreateHandler;
pub use delete::DeleteHandler;
pub use read::ReadHandler;
pub use update::UpdateHandler;

/// All four handlers sharing one repository.
#[derive(Clone)]
pub struct StudentHandlers {
    pub create: CreateHandler,
    pub read: ReadHandler,
    pub update: UpdateHandler,
    pub delete: DeleteHandler,
}

impl StudentHandlers {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self {
            create: CreateHandler::new(repo.clone()),
            read: ReadHandler::new(repo.clone()),
            update: UpdateHandler::new(repo.clone()),
            delete: DeleteHandler::new(repo),
        }
    }
}

/// Log a failed operation at the handler boundary.
fn log_failure(operation: &'static str, key: &StudentKey, err: &RepositoryError) {
    if err.is_not_found() {
        tracing::warn!(
            operation,
            student_id = %key.student_id,
            course_id = %key.course_id,
            "Student not found"
        );
    } else {
        tracing::error!(
            operation,
            student_id = %key.student_id,
            course_id = %key.course_id,
            error = %err,
            "Store operation failed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FailingRepository, InMemoryRepository};
    use studentinfo_core::student::{
        CreateStudentRequest, StudentChanges, StudentRecord, UpdateStudentRequest,
    };

    fn handlers() -> StudentHandlers {
        StudentHandlers::new(Arc::new(InMemoryRepository::new()))
    }

    fn create_request(name: &str, year: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            student_id: "s1".to_string(),
            course_id: "c1".to_string(),
            name: name.to_string(),
            email: "ada@example.com".to_string(),
            year: year.to_string(),
        }
    }

    fn key() -> StudentKey {
        StudentKey::new("s1", "c1")
    }

    #[tokio::test]
    async fn test_create_then_read() {
        let handlers = handlers();

        handlers.create.handle(create_request("Ada", "2")).await.unwrap();
        let record = handlers.read.handle(key()).await.unwrap();

        assert_eq!(
            record,
            StudentRecord {
                student_id: "s1".to_string(),
                course_id: "c1".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                year: "2".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_update_then_read() {
        let handlers = handlers();
        handlers.create.handle(create_request("Ada", "2")).await.unwrap();

        handlers
            .update
            .handle(UpdateStudentRequest {
                student_id: "s1".to_string(),
                course_id: "c1".to_string(),
                name: "Ada L.".to_string(),
                email: "ada@example.com".to_string(),
                year: "3".to_string(),
            })
            .await
            .unwrap();
        let record = handlers.read.handle(key()).await.unwrap();

        assert_eq!(record.name, "Ada L.");
        assert_eq!(record.year, "3");
        assert_eq!(record.key(), key());
    }

    #[tokio::test]
    async fn test_delete_then_read_is_not_found() {
        let handlers = handlers();
        handlers.create.handle(create_request("Ada", "2")).await.unwrap();

        handlers.delete.handle(key()).await.unwrap();
        let err = handlers.read.handle(key()).await.unwrap_err();

        assert_eq!(err, RepositoryError::student_not_found(&key()));
    }

    #[tokio::test]
    async fn test_read_never_created_is_not_found() {
        let err = handlers()
            .read
            .handle(StudentKey::new("ghost", "c0"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_twice_last_write_wins() {
        let handlers = handlers();

        handlers.create.handle(create_request("Ada", "2")).await.unwrap();
        handlers.create.handle(create_request("Ada Lovelace", "4")).await.unwrap();
        let record = handlers.read.handle(key()).await.unwrap();

        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.year, "4");
    }

    #[tokio::test]
    async fn test_every_handler_returns_store_failures() {
        let handlers = StudentHandlers::new(Arc::new(FailingRepository::unreachable()));
        let expected = RepositoryError::ConnectionFailed(
            "DynamoDB unreachable: dispatch failure".to_string(),
        );

        let created = handlers.create.handle(create_request("Ada", "2")).await;
        let read = handlers.read.handle(key()).await;
        let updated = handlers
            .update
            .handle(UpdateStudentRequest::new(
                key(),
                StudentChanges::new("Ada", "ada@example.com", "3"),
            ))
            .await;
        let deleted = handlers.delete.handle(key()).await;

        assert_eq!(created.unwrap_err(), expected);
        assert_eq!(read.unwrap_err(), expected);
        assert_eq!(updated.unwrap_err(), expected);
        assert_eq!(deleted.unwrap_err(), expected);
    }
}
