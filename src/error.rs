// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
///
/// The `String` payloads carry internal detail for the logs only; clients
/// always receive the fixed message of the error kind.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),

    // 405 Method Not Allowed
    MethodNotAllowed,

    // 422 Unprocessable Entity
    Unprocessable(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-visible message for this error kind.
    pub fn message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad request",
            AppError::NotFound(_) => "resource not found",
            AppError::MethodNotAllowed => "method not allowed",
            AppError::Unprocessable(_) => "unprocessable",
            AppError::InternalServerError(_) => "internal server error",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into the `{success, error, message}` envelope.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
            }
            AppError::Unprocessable(msg) => tracing::warn!("Unprocessable: {}", msg),
            AppError::BadRequest(msg) | AppError::NotFound(msg) => {
                tracing::debug!("{}: {}", self.message(), msg);
            }
            AppError::MethodNotAllowed => {}
        }

        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::Unprocessable`.
/// Allows using `?` operator on store calls.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Unprocessable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn envelope_hides_internal_detail() {
        let (status, body) =
            body_json(AppError::Unprocessable("duplicate key value".to_string())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 422);
        assert_eq!(body["message"], "unprocessable");
    }

    #[tokio::test]
    async fn each_kind_has_fixed_message() {
        let cases = [
            (AppError::BadRequest("x".into()), 400, "bad request"),
            (AppError::NotFound("x".into()), 404, "resource not found"),
            (AppError::MethodNotAllowed, 405, "method not allowed"),
            (AppError::InternalServerError("x".into()), 500, "internal server error"),
        ];

        for (err, code, message) in cases {
            let (status, body) = body_json(err).await;
            assert_eq!(status.as_u16(), code);
            assert_eq!(body["error"], code);
            assert_eq!(body["message"], message);
        }
    }

    #[test]
    fn sqlx_errors_become_unprocessable() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
