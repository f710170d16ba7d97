//! Handlers for `/questions` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/questions` | Optional `?stage`, `?province`, `?program`, `?category` |
//! | `GET`  | `/questions/:slug` | 404 if missing or incomplete |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use permitted_core::{
  engine,
  question::{QuestionDetail, QuestionSummary},
  store::{QuestionFilter, QuestionStore},
};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, response::ApiSuccess};

// ─── List ────────────────────────────────────────────────────────────────────

/// Query params for the list endpoint — flat strings, at most one value per
/// dimension per request.
#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  pub stage:    Option<String>,
  pub province: Option<String>,
  pub program:  Option<String>,
  pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsList {
  pub questions: Vec<QuestionSummary>,
  pub total:     usize,
}

/// `GET /questions[?stage=…][&province=…][&program=…][&category=…]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<ApiSuccess<QuestionsList>>, ApiError>
where
  S: QuestionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let filter = QuestionFilter {
    stage:    params.stage,
    province: params.province,
    program:  params.program,
    category: params.category,
  };

  let questions = engine::list_questions(store.as_ref(), &filter).await?;
  let total = questions.len();
  Ok(Json(ApiSuccess::new(QuestionsList { questions, total })))
}

// ─── Detail ──────────────────────────────────────────────────────────────────

/// `GET /questions/:slug`
pub async fn detail<S>(
  State(store): State<Arc<S>>,
  Path(slug): Path<String>,
) -> Result<Json<ApiSuccess<QuestionDetail>>, ApiError>
where
  S: QuestionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let detail = engine::question_detail(store.as_ref(), &slug).await?;
  Ok(Json(ApiSuccess::new(detail)))
}
