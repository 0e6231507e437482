mod operations;
mod requests;
mod types;

pub use operations::{record_from_confirmed, upsert_record};
pub use requests::{CreateStudentRequest, UpdateStudentRequest};
pub use types::{StudentChanges, StudentKey, StudentRecord, ENTITY_TYPE_STUDENT};
