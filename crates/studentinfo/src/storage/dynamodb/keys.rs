//! Attribute names and key construction for the student table.
//!
//! Pure functions, no I/O.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use studentinfo_core::student::StudentKey;

// ============================================================================
// Attribute names
// ============================================================================

/// Partition (HASH) key attribute.
pub const STUDENT_ID: &str = "studentId";
/// Sort (RANGE) key attribute.
pub const COURSE_ID: &str = "courseId";
pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const YEAR: &str = "year";

// ============================================================================
// Update expression
// ============================================================================

/// Rewrites the three mutable attributes through name and value placeholders.
///
/// `name` and `year` are DynamoDB reserved words, so every attribute goes
/// through a `#` placeholder.
pub const UPDATE_EXPRESSION: &str = "SET #n = :n, #e = :e, #c = :c";

/// Placeholder to attribute name pairs for [`UPDATE_EXPRESSION`].
pub const UPDATE_NAMES: [(&str, &str); 3] = [("#n", NAME), ("#e", EMAIL), ("#c", YEAR)];

pub const NAME_VALUE: &str = ":n";
pub const EMAIL_VALUE: &str = ":e";
pub const YEAR_VALUE: &str = ":c";

/// Builds the composite primary key map for a student.
pub fn key_attributes(key: &StudentKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            STUDENT_ID.to_string(),
            AttributeValue::S(key.student_id.clone()),
        ),
        (
            COURSE_ID.to_string(),
            AttributeValue::S(key.course_id.clone()),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_attributes_has_only_the_composite_key() {
        let item = key_attributes(&StudentKey::new("s1", "c1"));

        assert_eq!(item.len(), 2);
        assert_eq!(item.get("studentId").unwrap().as_s().unwrap(), "s1");
        assert_eq!(item.get("courseId").unwrap().as_s().unwrap(), "c1");
    }

    #[test]
    fn test_update_expression_covers_every_placeholder() {
        for (placeholder, _) in UPDATE_NAMES {
            assert!(UPDATE_EXPRESSION.contains(placeholder));
        }
        for value in [NAME_VALUE, EMAIL_VALUE, YEAR_VALUE] {
            assert!(UPDATE_EXPRESSION.contains(value));
        }
    }

    #[test]
    fn test_update_names_never_touch_the_key() {
        assert!(UPDATE_NAMES
            .iter()
            .all(|(_, attribute)| *attribute != STUDENT_ID && *attribute != COURSE_ID));
    }
}
