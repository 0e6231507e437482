use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately without touching the store.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
