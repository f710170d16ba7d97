//! Handler for `GET /health`.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::response::ApiSuccess;

#[derive(Debug, Serialize)]
pub struct Health {
  pub status:    &'static str,
  pub timestamp: String,
  pub service:   &'static str,
}

/// `GET /health` — liveness probe; touches no storage.
pub async fn handler() -> Json<ApiSuccess<Health>> {
  Json(ApiSuccess::new(Health {
    status:    "ok",
    timestamp: Utc::now().to_rfc3339(),
    service:   "permitted-api",
  }))
}
