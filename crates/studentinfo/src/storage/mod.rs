//! Storage backend implementations.
//!
//! Concrete implementations of [`studentinfo_core::storage::StudentRepository`].
//! The in-memory backend is always available; DynamoDB sits behind the
//! `dynamodb` feature (on by default).
//!
//! Build without DynamoDB:
//! ```bash
//! cargo build -p studentinfo --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
pub mod inmemory;
#[cfg(test)]
pub(crate) mod failing;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;
#[cfg(test)]
pub(crate) use failing::FailingRepository;
pub use inmemory::InMemoryRepository;
