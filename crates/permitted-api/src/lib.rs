//! JSON REST API for Permitted.
//!
//! Exposes an axum [`Router`] backed by any
//! [`permitted_core::store::QuestionStore`]. Transport concerns (CORS,
//! request tracing, rate limiting) are the binary's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", permitted_api::api_router(store.clone()))
//! ```

pub mod contexts;
pub mod error;
pub mod health;
pub mod questions;
pub mod response;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use permitted_core::store::QuestionStore;
use serde::Deserialize;

pub use error::ApiError;
pub use response::ApiSuccess;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `PERMITTED_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: QuestionStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/health", get(health::handler))
    .route("/contexts", get(contexts::handler::<S>))
    .route("/questions", get(questions::list::<S>))
    .route("/questions/{slug}", get(questions::detail::<S>))
    .with_state(store)
}

// ─── Integration tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use permitted_core::question::{NewAnswer, NewQuestion, Verdict};
  use permitted_store_sqlite::{SqliteStore, seed};
  use serde_json::Value;
  use tower::ServiceExt as _;

  /// An in-memory store carrying the shipped seed content.
  async fn seeded_store() -> SqliteStore {
    let store = SqliteStore::open_in_memory().await.unwrap();
    seed::seed(&store).await.unwrap();
    store
  }

  fn new_question(
    slug: &str,
    title: &str,
    category: &str,
    contexts: &[&str],
  ) -> NewQuestion {
    NewQuestion {
      slug:     slug.into(),
      title:    title.into(),
      category: category.into(),
      answer:   Some(NewAnswer {
        allowed:      Verdict::Yes,
        conditions:   None,
        consequences: None,
        verified_at:  chrono::Utc::now(),
        sources:      Vec::new(),
      }),
      contexts: contexts.iter().map(|v| (*v).to_owned()).collect(),
    }
  }

  async fn get_json(store: SqliteStore, uri: &str) -> (StatusCode, Value) {
    let app = api_router(Arc::new(store));
    let resp = app
      .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
      .await
      .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
  }

  fn slugs(json: &Value) -> Vec<&str> {
    json["data"]["questions"]
      .as_array()
      .unwrap()
      .iter()
      .map(|q| q["slug"].as_str().unwrap())
      .collect()
  }

  // ── Health ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn health_reports_ok() {
    let (status, json) = get_json(seeded_store().await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["service"], "permitted-api");
  }

  // ── Contexts ────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn contexts_grouped_and_sorted_by_label() {
    let (status, json) = get_json(seeded_store().await, "/contexts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let data = &json["data"];
    assert_eq!(data["stages"].as_array().unwrap().len(), 3);
    assert_eq!(data["provinces"].as_array().unwrap().len(), 13);
    assert_eq!(data["programs"].as_array().unwrap().len(), 5);

    // "Currently Studying" sorts first among the stage labels.
    assert_eq!(data["stages"][0]["value"], "STUDYING");

    let labels: Vec<&str> = data["provinces"]
      .as_array()
      .unwrap()
      .iter()
      .map(|p| p["label"].as_str().unwrap())
      .collect();
    let mut sorted = labels.clone();
    sorted.sort_unstable();
    assert_eq!(labels, sorted);
  }

  // ── List ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_with_matching_filters_includes_sample() {
    let (status, json) = get_json(
      seeded_store().await,
      "/questions?stage=STUDYING&province=ON",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(slugs(&json).contains(&"can-i-work-off-campus"));
  }

  #[tokio::test]
  async fn list_with_non_matching_stage_excludes_sample() {
    let (status, json) =
      get_json(seeded_store().await, "/questions?stage=PRE_ARRIVAL").await;
    assert_eq!(status, StatusCode::OK);
    assert!(slugs(&json).is_empty());
    assert_eq!(json["data"]["total"], 0);
  }

  #[tokio::test]
  async fn list_unrecognized_value_is_bad_request() {
    let (status, json) =
      get_json(seeded_store().await, "/questions?stage=ALIEN").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");

    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("stage"), "message: {message}");
    assert!(message.contains("ALIEN"), "message: {message}");
  }

  #[tokio::test]
  async fn list_empty_param_treated_as_absent() {
    let (status, json) =
      get_json(seeded_store().await, "/questions?stage=").await;
    assert_eq!(status, StatusCode::OK);
    assert!(slugs(&json).contains(&"can-i-work-off-campus"));
  }

  #[tokio::test]
  async fn list_no_filters_sorted_by_title_with_total() {
    let store = seeded_store().await;
    store
      .insert_question(new_question(
        "about-taxes",
        "Am I required to file taxes?",
        "Taxes",
        &["STUDYING"],
      ))
      .await
      .unwrap();

    let (status, json) = get_json(store, "/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 2);

    let titles: Vec<&str> = json["data"]["questions"]
      .as_array()
      .unwrap()
      .iter()
      .map(|q| q["title"].as_str().unwrap())
      .collect();
    let mut sorted = titles.clone();
    sorted.sort_unstable();
    assert_eq!(titles, sorted);
  }

  #[tokio::test]
  async fn list_category_is_case_sensitive() {
    let (_, json) =
      get_json(seeded_store().await, "/questions?category=work%20rules").await;
    assert!(slugs(&json).is_empty());

    let (_, json) =
      get_json(seeded_store().await, "/questions?category=Work%20Rules").await;
    assert_eq!(slugs(&json), ["can-i-work-off-campus"]);
  }

  #[tokio::test]
  async fn answerless_question_is_invisible_everywhere() {
    let store = seeded_store().await;
    store
      .insert_question(NewQuestion {
        answer: None,
        ..new_question("incomplete", "Incomplete?", "Misc", &[])
      })
      .await
      .unwrap();

    let (_, json) = get_json(store.clone(), "/questions").await;
    assert!(!slugs(&json).contains(&"incomplete"));

    let (status, json) = get_json(store, "/questions/incomplete").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
  }

  // ── Detail ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn detail_returns_answer_and_sources() {
    let (status, json) =
      get_json(seeded_store().await, "/questions/can-i-work-off-campus").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let data = &json["data"];
    assert_eq!(data["slug"], "can-i-work-off-campus");
    assert_eq!(data["category"], "Work Rules");
    assert_eq!(data["answer"]["allowed"], "DEPENDS");
    assert!(
      data["answer"]["verifiedAt"]
        .as_str()
        .unwrap()
        .starts_with("2026-01-07")
    );

    let sources = data["sources"].as_array().unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0]["authority"], "IRCC");
    assert!(sources[0]["accessedAt"].is_string());
  }

  #[tokio::test]
  async fn detail_unknown_slug_is_not_found() {
    let (status, json) =
      get_json(seeded_store().await, "/questions/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
  }

  #[tokio::test]
  async fn detail_malformed_slug_is_bad_request() {
    let (status, json) =
      get_json(seeded_store().await, "/questions/Not-A-Slug").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
  }
}
