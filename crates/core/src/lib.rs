//! Functional core for studentinfo.
//!
//! Pure domain types, request payloads and the storage contract shared by the
//! storage backends, the HTTP surface and the Lambda entry point. Nothing in
//! this crate performs I/O.

pub mod storage;
pub mod student;
