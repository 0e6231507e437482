//! Maps repository errors to HTTP status codes.
//!
//! Kept pure so the HTTP surface and any API gateway integration agree on the
//! same mapping.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `AlreadyExists` -> 409
/// - `ConnectionFailed` -> 503
/// - `QueryFailed`, `Serialization` -> 500
/// - `InvalidData` -> 400
///
/// # Examples
///
/// ```
/// use studentinfo_core::storage::{repository_error_to_status_code, RepositoryError};
/// use studentinfo_core::student::StudentKey;
///
/// let error = RepositoryError::student_not_found(&StudentKey::new("s1", "c1"));
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) | RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::StudentKey;

    #[test]
    fn test_student_not_found_maps_to_404() {
        let error = RepositoryError::student_not_found(&StudentKey::new("s1", "c1"));
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_already_exists_maps_to_409() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Student",
            id: "s1/c1".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 409);
    }

    #[test]
    fn test_store_unreachable_maps_to_503() {
        let error = RepositoryError::ConnectionFailed("dispatch failure".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_throttling_maps_to_500() {
        let error = RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);

        let error = RepositoryError::Serialization("bad payload".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_malformed_item_maps_to_400() {
        let error = RepositoryError::InvalidData("Missing or invalid field: email".to_string());
        assert_eq!(repository_error_to_status_code(&error), 400);
    }
}
