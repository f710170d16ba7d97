//! Handler for `GET /contexts`.

use std::sync::Arc;

use axum::{Json, extract::State};
use permitted_core::{context::ContextsView, engine, store::QuestionStore};

use crate::{error::ApiError, response::ApiSuccess};

/// `GET /contexts` — the filter vocabulary grouped by dimension, each group
/// ordered by label.
pub async fn handler<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<ApiSuccess<ContextsView>>, ApiError>
where
  S: QuestionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let view = engine::list_contexts(store.as_ref()).await?;
  Ok(Json(ApiSuccess::new(view)))
}
