use std::fmt;

use serde::{Deserialize, Serialize};

/// Entity name used in errors and log fields.
pub const ENTITY_TYPE_STUDENT: &str = "Student";

/// Composite primary key of a student record.
///
/// A record is addressed by the pair, never by either half alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentKey {
    pub student_id: String,
    pub course_id: String,
}

impl StudentKey {
    /// Creates a key from its two halves.
    pub fn new(student_id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
        }
    }
}

impl fmt::Display for StudentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.student_id, self.course_id)
    }
}

/// The mutable fields of a student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentChanges {
    pub name: String,
    pub email: String,
    /// Academic year or level, kept as text.
    pub year: String,
}

impl StudentChanges {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            year: year.into(),
        }
    }
}

/// A student enrolled in a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub student_id: String,
    pub course_id: String,
    pub name: String,
    pub email: String,
    pub year: String,
}

impl StudentRecord {
    /// Builds a full record from its key and mutable fields.
    pub fn new(key: StudentKey, changes: StudentChanges) -> Self {
        Self {
            student_id: key.student_id,
            course_id: key.course_id,
            name: changes.name,
            email: changes.email,
            year: changes.year,
        }
    }

    /// Returns the composite key of this record.
    pub fn key(&self) -> StudentKey {
        StudentKey::new(&self.student_id, &self.course_id)
    }

    /// Returns the mutable fields of this record.
    pub fn changes(&self) -> StudentChanges {
        StudentChanges::new(&self.name, &self.email, &self.year)
    }

    /// Overwrites the mutable fields, leaving the key untouched.
    pub fn apply(&mut self, changes: StudentChanges) {
        self.name = changes.name;
        self.email = changes.email;
        self.year = changes.year;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> StudentRecord {
        StudentRecord::new(
            StudentKey::new("s1", "c1"),
            StudentChanges::new("Ada", "ada@example.com", "2"),
        )
    }

    #[test]
    fn test_record_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(ada()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "studentId": "s1",
                "courseId": "c1",
                "name": "Ada",
                "email": "ada@example.com",
                "year": "2"
            })
        );
    }

    #[test]
    fn test_key_ignores_extra_fields() {
        let key: StudentKey = serde_json::from_value(serde_json::json!({
            "studentId": "s1",
            "courseId": "c1",
            "name": "ignored"
        }))
        .unwrap();

        assert_eq!(key, StudentKey::new("s1", "c1"));
    }

    #[test]
    fn test_key_requires_both_halves() {
        let result: Result<StudentKey, _> =
            serde_json::from_value(serde_json::json!({ "studentId": "s1" }));

        assert!(result.is_err());
    }

    #[test]
    fn test_key_display() {
        assert_eq!(StudentKey::new("s1", "c1").to_string(), "s1/c1");
    }

    #[test]
    fn test_apply_keeps_key() {
        let mut record = ada();
        record.apply(StudentChanges::new("Ada L.", "ada@example.com", "3"));

        assert_eq!(record.key(), StudentKey::new("s1", "c1"));
        assert_eq!(record.name, "Ada L.");
        assert_eq!(record.year, "3");
    }

    #[test]
    fn test_changes_round_trip_through_record() {
        let record = ada();
        let rebuilt = StudentRecord::new(record.key(), record.changes());

        assert_eq!(rebuilt, record);
    }
}
