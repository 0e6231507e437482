//! Request payloads for the student handlers.
//!
//! Read and delete are addressed by [`StudentKey`] directly, so only create and
//! update need their own payload types. Every field is required: a missing
//! field fails deserialization, which is the only presence check performed.

use serde::{Deserialize, Serialize};

use super::types::{StudentChanges, StudentKey, StudentRecord};

/// Payload for creating (or overwriting) a student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub student_id: String,
    pub course_id: String,
    pub name: String,
    pub email: String,
    pub year: String,
}

impl CreateStudentRequest {
    /// Converts the request into the full record that will be written.
    pub fn into_record(self) -> StudentRecord {
        StudentRecord {
            student_id: self.student_id,
            course_id: self.course_id,
            name: self.name,
            email: self.email,
            year: self.year,
        }
    }
}

impl From<StudentRecord> for CreateStudentRequest {
    fn from(record: StudentRecord) -> Self {
        Self {
            student_id: record.student_id,
            course_id: record.course_id,
            name: record.name,
            email: record.email,
            year: record.year,
        }
    }
}

/// Payload for rewriting the mutable fields of a student record.
///
/// All three mutable fields are always sent together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub student_id: String,
    pub course_id: String,
    pub name: String,
    pub email: String,
    pub year: String,
}

impl UpdateStudentRequest {
    /// Builds an update request from a key and the new field values.
    pub fn new(key: StudentKey, changes: StudentChanges) -> Self {
        Self {
            student_id: key.student_id,
            course_id: key.course_id,
            name: changes.name,
            email: changes.email,
            year: changes.year,
        }
    }

    /// Splits the request into the addressed key and the new field values.
    pub fn into_parts(self) -> (StudentKey, StudentChanges) {
        (
            StudentKey::new(self.student_id, self.course_id),
            StudentChanges::new(self.name, self.email, self.year),
        )
    }
}
