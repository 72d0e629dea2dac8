use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for failures no handler can recover from.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Recoverable request problems (bad upload, missing file, incomplete form)
/// never reach this type; handlers convert those into a flash notice plus a
/// redirect at the point of detection.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Multipart error: {0}")]
    Multipart(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

const ERROR_500_BODY: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>500 - Server Error</title></head>
<body>
  <h1>500 - Internal Server Error</h1>
  <p>Something went wrong on our end. Please try again later.</p>
  <p><a href="/">Back to home</a></p>
</body>
</html>"#;

const ERROR_400_BODY: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>400 - Bad Request</title></head>
<body>
  <h1>400 - Bad Request</h1>
  <p>The request could not be processed.</p>
  <p><a href="/">Back to home</a></p>
</body>
</html>"#;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Multipart(msg) => {
                tracing::warn!("Malformed multipart request: {msg}");
                (StatusCode::BAD_REQUEST, ERROR_400_BODY)
            }
            AppError::Template(e) => {
                tracing::error!("Template render failed: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, ERROR_500_BODY)
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, ERROR_500_BODY)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, ERROR_500_BODY)
            }
        };

        (status, Html(body)).into_response()
    }
}
