//! API error type and [`axum::response::IntoResponse`] implementation — the
//! single translator from engine failures to the public error envelope.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler, rendered as
/// `{"success": false, "error": {"code": …, "message": …}}`.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  /// Part of the public envelope vocabulary; raised by transport-level
  /// limiting middleware, never by the core.
  #[error("rate limited")]
  RateLimited,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<permitted_core::Error> for ApiError {
  fn from(e: permitted_core::Error) -> Self {
    use permitted_core::Error;
    match e {
      e @ (Error::InvalidFilter { .. } | Error::InvalidSlug(_)) => {
        Self::BadRequest(e.to_string())
      }
      // Missing and incomplete questions are deliberately identical here.
      Error::NotFound(_) => Self::NotFound("question not found".to_owned()),
      Error::Store(inner) => Self::Store(inner),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, code, message) = match &self {
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, "BAD_REQUEST", m.clone())
      }
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, "NOT_FOUND", m.clone()),
      ApiError::RateLimited => (
        StatusCode::TOO_MANY_REQUESTS,
        "RATE_LIMITED",
        "too many requests".to_owned(),
      ),
      ApiError::Store(e) => {
        // Storage details are logged, never sent to the caller.
        tracing::error!(error = %e, "request failed on storage");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "INTERNAL_ERROR",
          "An unexpected error occurred".to_owned(),
        )
      }
    };

    (
      status,
      Json(json!({
        "success": false,
        "error": { "code": code, "message": message },
      })),
    )
      .into_response()
  }
}
