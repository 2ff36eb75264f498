use atelier_core::error::CoreError;
use atelier_render::RenderError;
use atelier_storage::StorageError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{"result": 0, "message"}`
/// error envelope every endpoint shares.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `atelier_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An object storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A certificate/marksheet rendering error.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A not-found condition with a human-readable message.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    /// Flatten field-level validation messages into one 400 response,
    /// joined with `", "` in field order.
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                match &error.message {
                    Some(message) => messages.push(message.to_string()),
                    None => messages.push(format!("{field} is invalid")),
                }
            }
        }
        AppError::BadRequest(messages.join(", "))
    }
}

/// Whether `err` is a Postgres unique violation on the named constraint.
///
/// Handlers use this to turn specific `uq_*` violations into per-entity
/// conflict messages; anything unmatched falls through to
/// [`classify_sqlx_error`].
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505") && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal Server Error!".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Object storage errors ---
            AppError::Storage(err) => classify_storage_error(err),

            // --- Rendering errors ---
            AppError::Render(err) => {
                tracing::error!(error = %err, "Document rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error!".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error!".to_string(),
                )
            }
        };

        let body = json!({
            "result": 0,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map
///   to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint().is_some_and(|c| c.starts_with("uq_"))
            {
                return (StatusCode::CONFLICT, "Duplicate value entered!".to_string());
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error!".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error!".to_string(),
            )
        }
    }
}

/// Classify a storage error into an HTTP status and message.
///
/// Unreachable storage maps to 503 and timeouts to 504 so callers can tell
/// a dead upstream from a slow one; details stay in the logs.
fn classify_storage_error(err: &StorageError) -> (StatusCode, String) {
    match err {
        StorageError::Unavailable(detail) => {
            tracing::error!(error = %detail, "Object storage unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Server is unreachable. Please try again later.".to_string(),
            )
        }
        StorageError::Timeout(detail) => {
            tracing::error!(error = %detail, "Object storage timed out");
            (
                StatusCode::GATEWAY_TIMEOUT,
                "Request timed out. Please try again.".to_string(),
            )
        }
        StorageError::Upstream(detail) => {
            tracing::error!(error = %detail, "Object storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error!".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn response_parts(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();
        let json = serde_json::from_slice(&bytes).expect("body should be JSON");
        (status, json)
    }

    #[tokio::test]
    async fn bad_request_uses_error_envelope() {
        let (status, body) = response_parts(AppError::BadRequest("All fields are required!".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["result"], 0);
        assert_eq!(body["message"], "All fields are required!");
    }

    #[tokio::test]
    async fn not_found_keeps_its_message() {
        let (status, body) = response_parts(AppError::NotFound("Student not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Student not found");
    }

    #[tokio::test]
    async fn conflict_maps_to_409() {
        let err = AppError::Core(CoreError::Conflict("Course code already exists!".into()));
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["result"], 0);
    }

    #[tokio::test]
    async fn storage_unavailable_maps_to_503() {
        let err = AppError::Storage(StorageError::Unavailable("connect refused".into()));
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["message"], "Server is unreachable. Please try again later.");
    }

    #[tokio::test]
    async fn storage_timeout_maps_to_504() {
        let err = AppError::Storage(StorageError::Timeout("deadline exceeded".into()));
        let (status, _) = response_parts(err).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    }

    #[tokio::test]
    async fn internal_errors_are_sanitized() {
        let err = AppError::InternalError("secret pool detail".into());
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal Server Error!");
    }

    #[tokio::test]
    async fn validation_errors_join_field_messages() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(length(min = 3, message = "Name must be 3 to 50 characters"))]
            name: String,
        }

        let probe = Probe {
            name: "ab".to_string(),
        };
        let err: AppError = probe.validate().unwrap_err().into();
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Name must be 3 to 50 characters");
    }
}
