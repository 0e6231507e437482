use async_trait::async_trait;

use crate::student::{StudentChanges, StudentKey, StudentRecord};

use super::Result;

/// Single-item access to the student table.
///
/// Every method touches exactly one item. None of them check for prior
/// existence: writes overwrite, updates upsert and deletes of a missing key
/// succeed.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Gets a student by its composite key.
    async fn get_student(&self, key: &StudentKey) -> Result<Option<StudentRecord>>;

    /// Writes the full record, replacing any record at the same key.
    async fn put_student(&self, record: &StudentRecord) -> Result<()>;

    /// Rewrites name, email and year, returning the record as stored afterwards.
    async fn update_student(
        &self,
        key: &StudentKey,
        changes: &StudentChanges,
    ) -> Result<StudentRecord>;

    /// Deletes the record at the given key.
    async fn delete_student(&self, key: &StudentKey) -> Result<()>;
}
