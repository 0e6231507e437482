//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use studentinfo_core::storage::{Result, StudentRepository};
use studentinfo_core::student::{upsert_record, StudentChanges, StudentKey, StudentRecord};

/// In-memory storage backend.
///
/// Mirrors the single-item semantics of the DynamoDB backend: puts overwrite,
/// updates upsert and deleting a missing key succeeds. Data is lost when the
/// repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    students: Arc<RwLock<HashMap<StudentKey, StudentRecord>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.students.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.students.read().await.is_empty()
    }
}

#[async_trait]
impl StudentRepository for InMemoryRepository {
    async fn get_student(&self, key: &StudentKey) -> Result<Option<StudentRecord>> {
        let students = self.students.read().await;
        Ok(students.get(key).cloned())
    }

    async fn put_student(&self, record: &StudentRecord) -> Result<()> {
        let mut students = self.students.write().await;
        students.insert(record.key(), record.clone());
        Ok(())
    }

    async fn update_student(
        &self,
        key: &StudentKey,
        changes: &StudentChanges,
    ) -> Result<StudentRecord> {
        let mut students = self.students.write().await;
        let record = upsert_record(students.remove(key), key, changes.clone());
        students.insert(key.clone(), record.clone());
        Ok(record)
    }

    async fn delete_student(&self, key: &StudentKey) -> Result<()> {
        let mut students = self.students.write().await;
        students.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(student_id: &str, course_id: &str, name: &str, year: &str) -> StudentRecord {
        StudentRecord::new(
            StudentKey::new(student_id, course_id),
            StudentChanges::new(name, format!("{student_id}@example.com"), year),
        )
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let repo = InMemoryRepository::new();
        let ada = record("s1", "c1", "Ada", "2");

        repo.put_student(&ada).await.unwrap();

        let retrieved = repo.get_student(&ada.key()).await.unwrap();
        assert_eq!(retrieved, Some(ada));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_student(&StudentKey::new("s1", "c1")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites_same_key() {
        let repo = InMemoryRepository::new();
        repo.put_student(&record("s1", "c1", "Ada", "2")).await.unwrap();
        repo.put_student(&record("s1", "c1", "Ada L.", "4")).await.unwrap();

        let retrieved = repo
            .get_student(&StudentKey::new("s1", "c1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(retrieved.name, "Ada L.");
        assert_eq!(retrieved.year, "4");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_same_student_in_two_courses() {
        let repo = InMemoryRepository::new();
        repo.put_student(&record("s1", "c1", "Ada", "2")).await.unwrap();
        repo.put_student(&record("s1", "c2", "Ada", "2")).await.unwrap();

        repo.delete_student(&StudentKey::new("s1", "c1")).await.unwrap();

        assert!(repo
            .get_student(&StudentKey::new("s1", "c2"))
            .await
            .unwrap()
            .is_some());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_existing() {
        let repo = InMemoryRepository::new();
        repo.put_student(&record("s1", "c1", "Ada", "2")).await.unwrap();

        let updated = repo
            .update_student(
                &StudentKey::new("s1", "c1"),
                &StudentChanges::new("Ada L.", "ada@example.com", "3"),
            )
            .await
            .unwrap();

        assert_eq!(updated.key(), StudentKey::new("s1", "c1"));
        assert_eq!(updated.name, "Ada L.");
        assert_eq!(updated.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_update_nonexistent_upserts() {
        let repo = InMemoryRepository::new();
        let key = StudentKey::new("s7", "c7");

        repo.update_student(&key, &StudentChanges::new("Grace", "g@example.com", "1"))
            .await
            .unwrap();

        let stored = repo.get_student(&key).await.unwrap().unwrap();
        assert_eq!(stored.name, "Grace");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryRepository::new();
        let ada = record("s1", "c1", "Ada", "2");
        repo.put_student(&ada).await.unwrap();

        repo.delete_student(&ada.key()).await.unwrap();
        repo.delete_student(&ada.key()).await.unwrap();

        assert!(repo.is_empty().await);
    }
}
