//! Table configuration types (Functional Core - pure data).

use studentinfo::storage::dynamodb::{COURSE_ID, STUDENT_ID};

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub key_schema: KeySchema,
    pub billing_mode: BillingMode,
}

/// Names of the partition (HASH) and sort (RANGE) key attributes.
///
/// Both keys are string attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchema {
    pub partition_key: String,
    pub sort_key: Option<String>,
}

impl std::fmt::Display for KeySchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.sort_key {
            Some(sort_key) => write!(f, "{} (HASH), {} (RANGE)", self.partition_key, sort_key),
            None => write!(f, "{} (HASH)", self.partition_key),
        }
    }
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// The student table: one item per enrollment, keyed by student then course.
pub fn student_table_config() -> TableConfig {
    TableConfig {
        table_name: "students".to_string(),
        key_schema: KeySchema {
            partition_key: STUDENT_ID.to_string(),
            sort_key: Some(COURSE_ID.to_string()),
        },
        billing_mode: BillingMode::PayPerRequest,
    }
}
