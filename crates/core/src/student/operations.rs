use super::types::{StudentChanges, StudentKey, StudentRecord};

/// Rebuilds the record an update produced.
///
/// The key always comes from the request. The mutable fields come from what
/// the store confirmed, falling back to the requested values when the store
/// returned nothing.
pub fn record_from_confirmed(
    key: &StudentKey,
    requested: &StudentChanges,
    confirmed: Option<StudentChanges>,
) -> StudentRecord {
    StudentRecord::new(
        key.clone(),
        confirmed.unwrap_or_else(|| requested.clone()),
    )
}

/// Applies an update with upsert semantics.
///
/// An existing record keeps its key and gets the new fields. A missing record
/// is created from the key and the new fields, matching what an unconditional
/// `UpdateItem` does.
pub fn upsert_record(
    existing: Option<StudentRecord>,
    key: &StudentKey,
    changes: StudentChanges,
) -> StudentRecord {
    match existing {
        Some(mut record) => {
            record.apply(changes);
            record
        }
        None => StudentRecord::new(key.clone(), changes),
    }
}
