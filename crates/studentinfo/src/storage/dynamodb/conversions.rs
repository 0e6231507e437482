//! DynamoDB attribute conversion functions.
//!
//! Every value travels as a type-tagged `AttributeValue::S`. These are pure
//! functions, testable without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use studentinfo_core::storage::RepositoryError;
use studentinfo_core::student::{StudentChanges, StudentKey, StudentRecord};

use super::keys::{self, COURSE_ID, EMAIL, NAME, STUDENT_ID, YEAR};

/// Convert a StudentRecord to a DynamoDB item.
pub fn student_to_item(record: &StudentRecord) -> HashMap<String, AttributeValue> {
    let mut item = keys::key_attributes(&record.key());

    item.insert(NAME.to_string(), AttributeValue::S(record.name.clone()));
    item.insert(EMAIL.to_string(), AttributeValue::S(record.email.clone()));
    item.insert(YEAR.to_string(), AttributeValue::S(record.year.clone()));

    item
}

/// Convert a DynamoDB item to a StudentRecord.
pub fn item_to_student(
    item: &HashMap<String, AttributeValue>,
) -> Result<StudentRecord, RepositoryError> {
    Ok(StudentRecord {
        student_id: get_string(item, STUDENT_ID)?,
        course_id: get_string(item, COURSE_ID)?,
        name: get_string(item, NAME)?,
        email: get_string(item, EMAIL)?,
        year: get_string(item, YEAR)?,
    })
}

/// Expression attribute values for the update expression.
pub fn changes_to_values(changes: &StudentChanges) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            keys::NAME_VALUE.to_string(),
            AttributeValue::S(changes.name.clone()),
        ),
        (
            keys::EMAIL_VALUE.to_string(),
            AttributeValue::S(changes.email.clone()),
        ),
        (
            keys::YEAR_VALUE.to_string(),
            AttributeValue::S(changes.year.clone()),
        ),
    ])
}

/// Extract the confirmed mutable fields from an `ALL_NEW` update response.
///
/// The key attributes, when present, must match the key that was sent.
pub fn attributes_to_changes(
    key: &StudentKey,
    attributes: &HashMap<String, AttributeValue>,
) -> Result<StudentChanges, RepositoryError> {
    for (field, expected) in [(STUDENT_ID, &key.student_id), (COURSE_ID, &key.course_id)] {
        if let Some(actual) = get_optional_string(attributes, field) {
            if &actual != expected {
                return Err(RepositoryError::InvalidData(format!(
                    "Store returned {field} '{actual}' for key {key}"
                )));
            }
        }
    }

    Ok(StudentChanges {
        name: get_string(attributes, NAME)?,
        email: get_string(attributes, EMAIL)?,
        year: get_string(attributes, YEAR)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, RepositoryError> {
    get_optional_string(item, key)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
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
    fn test_student_item_wraps_every_field_as_string() {
        let item = student_to_item(&ada());

        assert_eq!(item.len(), 5);
        assert_eq!(item.get("studentId").unwrap().as_s().unwrap(), "s1");
        assert_eq!(item.get("courseId").unwrap().as_s().unwrap(), "c1");
        assert_eq!(item.get("name").unwrap().as_s().unwrap(), "Ada");
        assert_eq!(item.get("email").unwrap().as_s().unwrap(), "ada@example.com");
        assert_eq!(item.get("year").unwrap().as_s().unwrap(), "2");
    }

    #[test]
    fn test_item_to_student() {
        let parsed = item_to_student(&student_to_item(&ada())).unwrap();
        assert_eq!(parsed, ada());
    }

    #[test]
    fn test_item_missing_attribute_is_invalid_data() {
        let mut item = student_to_item(&ada());
        item.remove("email");

        let err = item_to_student(&item).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::InvalidData("Missing or invalid field: email".to_string())
        );
    }

    #[test]
    fn test_item_with_numeric_year_is_invalid_data() {
        let mut item = student_to_item(&ada());
        item.insert("year".to_string(), AttributeValue::N("2".to_string()));

        assert!(matches!(
            item_to_student(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_changes_to_values_uses_placeholders() {
        let values = changes_to_values(&StudentChanges::new("Ada L.", "ada@example.com", "3"));

        assert_eq!(values.get(":n").unwrap().as_s().unwrap(), "Ada L.");
        assert_eq!(values.get(":e").unwrap().as_s().unwrap(), "ada@example.com");
        assert_eq!(values.get(":c").unwrap().as_s().unwrap(), "3");
    }

    #[test]
    fn test_attributes_to_changes_reads_all_new_response() {
        let mut record = ada();
        record.apply(StudentChanges::new("Ada L.", "ada@example.com", "3"));
        let attributes = student_to_item(&record);

        let changes = attributes_to_changes(&record.key(), &attributes).unwrap();

        assert_eq!(changes.name, "Ada L.");
        assert_eq!(changes.year, "3");
    }

    #[test]
    fn test_attributes_to_changes_rejects_foreign_key() {
        let attributes = student_to_item(&ada());

        let err = attributes_to_changes(&StudentKey::new("s2", "c1"), &attributes).unwrap_err();

        assert!(matches!(err, RepositoryError::InvalidData(_)));
    }
}
