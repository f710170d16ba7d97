//! The `QuestionStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g.
//! `permitted-store-sqlite`). Higher layers (the engine, `permitted-api`)
//! depend on this abstraction, not on any concrete backend.
//!
//! The contract is read-only by design: the public system has no authoring
//! surface, and administrative reseeding is a concern of the concrete store.

use std::future::Future;

use crate::{
  context::Context,
  question::{QuestionRecord, QuestionSummary},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`QuestionStore::list_questions`].
///
/// Dimension filters hold already-validated catalog values; the store applies
/// them verbatim as tag-membership constraints. Matching is by bare value,
/// which is sound only because values are unique across dimensions (see
/// [`crate::catalog`]).
#[derive(Debug, Clone, Default)]
pub struct QuestionFilter {
  /// Stage-of-study tag the question must carry.
  pub stage:    Option<String>,
  /// Province tag the question must carry.
  pub province: Option<String>,
  /// Program-type tag the question must carry.
  pub program:  Option<String>,
  /// Exact, case-sensitive category match.
  pub category: Option<String>,
}

impl QuestionFilter {
  /// The supplied dimension values, in fixed (stage, province, program)
  /// order.
  pub fn dimension_values(&self) -> impl Iterator<Item = &str> {
    [
      self.stage.as_deref(),
      self.province.as_deref(),
      self.program.as_deref(),
    ]
    .into_iter()
    .flatten()
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Permitted question store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait QuestionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All context rows, ordered by label ascending.
  fn list_contexts(
    &self,
  ) -> impl Future<Output = Result<Vec<Context>, Self::Error>> + Send + '_;

  /// Question summaries matching every supplied filter, joined with their
  /// answers and ordered by title ascending (ordinal comparison). Questions
  /// without an answer are never returned.
  fn list_questions<'a>(
    &'a self,
    filter: &'a QuestionFilter,
  ) -> impl Future<Output = Result<Vec<QuestionSummary>, Self::Error>> + Send + 'a;

  /// One question by slug, with its answer and sources where present.
  /// Returns `None` if no question has that slug.
  fn get_question<'a>(
    &'a self,
    slug: &'a str,
  ) -> impl Future<Output = Result<Option<QuestionRecord>, Self::Error>> + Send + 'a;
}
