//! Questions, answers, and sources — the answerable rules themselves.
//!
//! A question carries exactly one answer (or none while incomplete) and a
//! set of context tags. Content enters the store through administrative
//! seeding only; nothing here is mutated while serving traffic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Verdict ─────────────────────────────────────────────────────────────────

/// The discrete verdict for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
  Yes,
  No,
  Depends,
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// One answerable rule. `slug` is the URL-safe identity, unique and matching
/// `^[a-z0-9-]+$` (see [`is_valid_slug`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
  pub question_id: Uuid,
  pub slug:        String,
  pub title:       String,
  /// Free-text grouping label, e.g. "Work Rules".
  pub category:    String,
}

/// The verdict and supporting narrative for a question. Exactly one per
/// question; owned by it and deleted with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
  pub answer_id:    Uuid,
  pub question_id:  Uuid,
  pub allowed:      Verdict,
  /// The qualifying rules under which the verdict holds.
  pub conditions:   Option<String>,
  /// The penalty for violation.
  pub consequences: Option<String>,
  /// Last human verification of the content.
  pub verified_at:  DateTime<Utc>,
}

/// One citation backing an answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
  pub source_id:   Uuid,
  pub answer_id:   Uuid,
  pub name:        String,
  pub url:         String,
  /// Issuing body, e.g. "IRCC" or "CRA".
  pub authority:   String,
  pub accessed_at: DateTime<Utc>,
}

// ─── Insert inputs ───────────────────────────────────────────────────────────

/// Input for administrative question insertion. Ids and ownership links are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewQuestion {
  pub slug:     String,
  pub title:    String,
  pub category: String,
  /// `None` leaves the question incomplete; it is not served anywhere.
  pub answer:   Option<NewAnswer>,
  /// Catalog values of the context tags to link.
  pub contexts: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NewAnswer {
  pub allowed:      Verdict,
  pub conditions:   Option<String>,
  pub consequences: Option<String>,
  pub verified_at:  DateTime<Utc>,
  pub sources:      Vec<NewSource>,
}

#[derive(Debug, Clone)]
pub struct NewSource {
  pub name:        String,
  pub url:         String,
  pub authority:   String,
  pub accessed_at: DateTime<Utc>,
}

// ─── Read model ──────────────────────────────────────────────────────────────

/// A question as fetched by slug, with whatever answer content exists.
#[derive(Debug, Clone)]
pub struct QuestionRecord {
  pub question: Question,
  pub answer:   Option<AnswerRecord>,
}

/// An answer bundled with its sources, in stable (insertion) order.
#[derive(Debug, Clone)]
pub struct AnswerRecord {
  pub answer:  Answer,
  pub sources: Vec<Source>,
}

// ─── Public views ────────────────────────────────────────────────────────────

/// The reduced question shape used in list results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSummary {
  pub slug:     String,
  pub title:    String,
  pub category: String,
  pub allowed:  Verdict,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerView {
  pub allowed:      Verdict,
  pub conditions:   Option<String>,
  pub consequences: Option<String>,
  pub verified_at:  DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceView {
  pub name:        String,
  pub url:         String,
  pub authority:   String,
  pub accessed_at: DateTime<Utc>,
}

/// The full question shape including answer and sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDetail {
  pub slug:     String,
  pub title:    String,
  pub category: String,
  pub answer:   AnswerView,
  pub sources:  Vec<SourceView>,
}

// ─── Slug ────────────────────────────────────────────────────────────────────

/// Whether `slug` matches the identifier shape `^[a-z0-9-]+$`.
pub fn is_valid_slug(slug: &str) -> bool {
  !slug.is_empty()
    && slug
      .bytes()
      .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
