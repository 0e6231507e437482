//! In-memory storage backend.
//!
//! Stores records in a `HashMap` behind `Arc<RwLock<_>>`. Used by tests and by
//! `studentinfo --storage memory` for local development without DynamoDB.
//!
//! # Example
//!
//! ```rust,ignore
//! use studentinfo::storage::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
