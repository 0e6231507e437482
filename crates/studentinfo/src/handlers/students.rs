//! Student CRUD endpoints.
//!
//! Thin adapters from HTTP requests to [`crate::students`] handlers. The key
//! comes from the path; bodies are JSON.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use studentinfo_core::student::{
    CreateStudentRequest, StudentChanges, StudentKey, StudentRecord, UpdateStudentRequest,
};

use crate::{handlers::AppError, state::AppState};

/// Create or overwrite a student (POST /api/students).
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.students.create.handle(payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Get a student (GET /api/students/{student_id}/{course_id}).
pub async fn get_student(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(String, String)>,
) -> Result<Json<StudentRecord>, AppError> {
    let record = state
        .students
        .read
        .handle(StudentKey::new(student_id, course_id))
        .await?;
    Ok(Json(record))
}

/// Update a student's name, email and year (PUT /api/students/{student_id}/{course_id}).
pub async fn update_student(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(String, String)>,
    Json(changes): Json<StudentChanges>,
) -> Result<Json<StudentRecord>, AppError> {
    let request = UpdateStudentRequest::new(StudentKey::new(student_id, course_id), changes);
    let record = state.students.update.handle(request).await?;
    Ok(Json(record))
}

/// Delete a student (DELETE /api/students/{student_id}/{course_id}).
pub async fn delete_student(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(String, String)>,
) -> Result<Json<StudentKey>, AppError> {
    let key = state
        .students
        .delete
        .handle(StudentKey::new(student_id, course_id))
        .await?;
    Ok(Json(key))
}
