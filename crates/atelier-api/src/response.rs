//! Shared response envelope for API handlers.
//!
//! Every success body carries `result: 1`, usually a human-readable
//! `message`, and one entity field whose key varies per endpoint
//! (`"admission"`, `"students"`, `"banner"`, ...). List endpoints may add a
//! `count`. Use [`Success`] instead of ad-hoc `serde_json::json!` so the
//! envelope stays consistent across handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

/// Builder for the standard `{ "result": 1, ... }` success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Success::created()
///     .message("Admission form created successfully")
///     .field("admission", &admission))
/// ```
#[derive(Debug)]
pub struct Success {
    status: StatusCode,
    body: Map<String, Value>,
}

impl Success {
    /// Start an envelope with the given HTTP status.
    pub fn with_status(status: StatusCode) -> Self {
        let mut body = Map::new();
        body.insert("result".to_string(), Value::from(1));
        Self { status, body }
    }

    /// A `200 OK` envelope.
    pub fn ok() -> Self {
        Self::with_status(StatusCode::OK)
    }

    /// A `201 Created` envelope.
    pub fn created() -> Self {
        Self::with_status(StatusCode::CREATED)
    }

    /// Attach the human-readable `message` field.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.body
            .insert("message".to_string(), Value::from(message.into()));
        self
    }

    /// Attach a serializable payload under `key`.
    pub fn field<T: Serialize>(mut self, key: &'static str, value: &T) -> Self {
        self.body.insert(
            key.to_string(),
            serde_json::to_value(value).unwrap_or_default(),
        );
        self
    }

    /// Attach the list-length `count` field.
    pub fn count(mut self, count: usize) -> Self {
        self.body.insert("count".to_string(), Value::from(count));
        self
    }
}

impl IntoResponse for Success {
    fn into_response(self) -> Response {
        (self.status, axum::Json(Value::Object(self.body))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(success: Success) -> (StatusCode, Value) {
        let response = success.into_response();
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();
        (status, serde_json::from_slice(&bytes).expect("valid JSON"))
    }

    #[tokio::test]
    async fn envelope_always_carries_result_one() {
        let (status, body) = body_json(Success::ok()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], 1);
    }

    #[tokio::test]
    async fn created_envelope_with_entity_and_message() {
        #[derive(Serialize)]
        struct Entity {
            id: i64,
        }

        let (status, body) = body_json(
            Success::created()
                .message("Exam record created successfully")
                .field("exam", &Entity { id: 7 }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Exam record created successfully");
        assert_eq!(body["exam"]["id"], 7);
    }

    #[tokio::test]
    async fn count_is_optional_and_explicit() {
        let (_, body) = body_json(Success::ok().field("students", &Vec::<i64>::new())).await;
        assert!(body.get("count").is_none());

        let (_, body) = body_json(Success::ok().count(3)).await;
        assert_eq!(body["count"], 3);
    }
}
