//! Student enrollment records over a managed key-value table.
//!
//! Four independent handlers (create, read, update, delete) address one
//! record by its `(studentId, courseId)` key. They are exposed over HTTP by
//! the `studentinfo` binary and as direct Lambda invocations by the
//! `student_lambda` binary.

pub mod app;
pub mod config;
pub mod handlers;
pub mod lambda;
pub mod logging;
pub mod state;
pub mod storage;
pub mod students;
