//! DynamoDB storage backend implementation.
//!
//! Implements [`studentinfo_core::storage::StudentRepository`] with
//! `aws-sdk-dynamodb` single-item calls against a table keyed by
//! `studentId` (HASH) and `courseId` (RANGE).

mod conversions;
mod error;
mod keys;
mod repository;

pub use keys::{COURSE_ID, STUDENT_ID};
pub use repository::{sdk_client, DynamoDbRepository};
