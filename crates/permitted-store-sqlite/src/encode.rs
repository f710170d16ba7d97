//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. UUIDs are stored as
//! hyphenated lowercase strings. Enums are stored as the same short codes
//! the public API uses.

use chrono::{DateTime, Utc};
use permitted_core::{
  context::{Context, Dimension},
  question::{Answer, Question, QuestionSummary, Source, Verdict},
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Dimension ───────────────────────────────────────────────────────────────

pub fn encode_dimension(d: Dimension) -> &'static str {
  match d {
    Dimension::Stage => "stage",
    Dimension::Province => "province",
    Dimension::Program => "program",
  }
}

pub fn decode_dimension(s: &str) -> Result<Dimension> {
  match s {
    "stage" => Ok(Dimension::Stage),
    "province" => Ok(Dimension::Province),
    "program" => Ok(Dimension::Program),
    other => Err(Error::UnknownDimension(other.to_owned())),
  }
}

// ─── Verdict ─────────────────────────────────────────────────────────────────

pub fn encode_verdict(v: Verdict) -> &'static str {
  match v {
    Verdict::Yes => "YES",
    Verdict::No => "NO",
    Verdict::Depends => "DEPENDS",
  }
}

pub fn decode_verdict(s: &str) -> Result<Verdict> {
  match s {
    "YES" => Ok(Verdict::Yes),
    "NO" => Ok(Verdict::No),
    "DEPENDS" => Ok(Verdict::Depends),
    other => Err(Error::UnknownVerdict(other.to_owned())),
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `contexts` row.
pub struct RawContext {
  pub context_id: String,
  pub dimension:  String,
  pub value:      String,
  pub label:      String,
}

impl RawContext {
  pub fn into_context(self) -> Result<Context> {
    Ok(Context {
      context_id: decode_uuid(&self.context_id)?,
      dimension:  decode_dimension(&self.dimension)?,
      value:      self.value,
      label:      self.label,
    })
  }
}

/// Raw strings from the list query (questions joined with answers).
pub struct RawSummary {
  pub slug:     String,
  pub title:    String,
  pub category: String,
  pub allowed:  String,
}

impl RawSummary {
  pub fn into_summary(self) -> Result<QuestionSummary> {
    Ok(QuestionSummary {
      slug:     self.slug,
      title:    self.title,
      category: self.category,
      allowed:  decode_verdict(&self.allowed)?,
    })
  }
}

/// One row of the detail join: question columns always present, answer
/// columns when an answer exists, source columns when that answer has
/// sources (one row per source).
pub struct RawDetailRow {
  // questions columns
  pub question_id: String,
  pub slug:        String,
  pub title:       String,
  pub category:    String,
  // answers join
  pub answer_id:    Option<String>,
  pub allowed:      Option<String>,
  pub conditions:   Option<String>,
  pub consequences: Option<String>,
  pub verified_at:  Option<String>,
  // sources join
  pub source_id:   Option<String>,
  pub source_name: Option<String>,
  pub source_url:  Option<String>,
  pub authority:   Option<String>,
  pub accessed_at: Option<String>,
}

impl RawDetailRow {
  pub fn question(&self) -> Result<Question> {
    Ok(Question {
      question_id: decode_uuid(&self.question_id)?,
      slug:        self.slug.clone(),
      title:       self.title.clone(),
      category:    self.category.clone(),
    })
  }

  /// The answer carried by this row, if any. `allowed` and `verified_at`
  /// are NOT NULL alongside `answer_id`; an empty fallback here only ever
  /// feeds the decoder's error path.
  pub fn answer(&self, question_id: Uuid) -> Result<Option<Answer>> {
    let Some(answer_id) = self.answer_id.as_deref() else {
      return Ok(None);
    };
    Ok(Some(Answer {
      answer_id:    decode_uuid(answer_id)?,
      question_id,
      allowed:      decode_verdict(self.allowed.as_deref().unwrap_or_default())?,
      conditions:   self.conditions.clone(),
      consequences: self.consequences.clone(),
      verified_at:  decode_dt(self.verified_at.as_deref().unwrap_or_default())?,
    }))
  }

  /// The source carried by this row, if any.
  pub fn source(&self, answer_id: Uuid) -> Result<Option<Source>> {
    let Some(source_id) = self.source_id.as_deref() else {
      return Ok(None);
    };
    Ok(Some(Source {
      source_id:   decode_uuid(source_id)?,
      answer_id,
      name:        self.source_name.clone().unwrap_or_default(),
      url:         self.source_url.clone().unwrap_or_default(),
      authority:   self.authority.clone().unwrap_or_default(),
      accessed_at: decode_dt(self.accessed_at.as_deref().unwrap_or_default())?,
    }))
  }
}
