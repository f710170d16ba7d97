//! The question filter engine.
//!
//! Three stateless, read-only operations: list the context vocabulary, list
//! questions matching a set of context filters, and resolve one slug into a
//! full detail view. Each operation validates its inputs first, then issues
//! exactly one store call. Nothing here retries, buffers, or holds state
//! across invocations.

use std::collections::HashSet;

use crate::{
  catalog,
  context::{ContextOption, ContextsView, Dimension},
  error::{Error, Result},
  question::{
    self, AnswerView, QuestionDetail, QuestionSummary, SourceView,
  },
  store::{QuestionFilter, QuestionStore},
};

// ─── Contexts ────────────────────────────────────────────────────────────────

/// The full context vocabulary grouped by dimension.
///
/// The store returns rows ordered by label ascending; grouping preserves
/// that order within each dimension.
pub async fn list_contexts<S: QuestionStore>(store: &S) -> Result<ContextsView> {
  let contexts = store.list_contexts().await.map_err(box_store)?;

  let mut view = ContextsView::default();
  for context in contexts {
    let group = match context.dimension {
      Dimension::Stage => &mut view.stages,
      Dimension::Province => &mut view.provinces,
      Dimension::Program => &mut view.programs,
    };
    group.push(ContextOption { value: context.value, label: context.label });
  }
  Ok(view)
}

// ─── List ────────────────────────────────────────────────────────────────────

/// Question summaries matching every supplied filter.
///
/// Each supplied dimension value must be a recognized catalog value for that
/// dimension; anything else is rejected here, before any query runs. An
/// empty-string filter counts as absent. Matching across the supplied
/// filters is a pure AND; unsupplied dimensions impose no constraint.
pub async fn list_questions<S: QuestionStore>(
  store: &S,
  filter: &QuestionFilter,
) -> Result<Vec<QuestionSummary>> {
  let filter = QuestionFilter {
    stage:    validated(Dimension::Stage, "stage", &filter.stage)?,
    province: validated(Dimension::Province, "province", &filter.province)?,
    program:  validated(Dimension::Program, "program", &filter.program)?,
    // Category is free text; no enumeration to check.
    category: filter.category.clone().filter(|c| !c.is_empty()),
  };

  let rows = store.list_questions(&filter).await.map_err(box_store)?;
  Ok(dedup_by_slug(rows))
}

/// Normalize and validate one dimension filter: empty counts as absent,
/// anything else must be in the catalog under `dimension`.
fn validated(
  dimension: Dimension,
  param: &'static str,
  value: &Option<String>,
) -> Result<Option<String>> {
  match value.as_deref() {
    None | Some("") => Ok(None),
    Some(v) if catalog::is_recognized(dimension, v) => Ok(Some(v.to_owned())),
    Some(v) => Err(Error::InvalidFilter { param, value: v.to_owned() }),
  }
}

/// Drop repeated slugs, keeping the first occurrence so the store's ordering
/// survives. The current schema cannot produce repeats (one link per
/// question/context pair), but the engine must never emit duplicate rows
/// even if a future join could.
fn dedup_by_slug(rows: Vec<QuestionSummary>) -> Vec<QuestionSummary> {
  let mut seen = HashSet::new();
  rows
    .into_iter()
    .filter(|row| seen.insert(row.slug.clone()))
    .collect()
}

// ─── Detail ──────────────────────────────────────────────────────────────────

/// The full view of one question by slug.
///
/// A question that exists but has no answer fails exactly like a slug with
/// no question at all: incomplete content is never served, and callers
/// cannot tell the two cases apart.
pub async fn question_detail<S: QuestionStore>(
  store: &S,
  slug: &str,
) -> Result<QuestionDetail> {
  if !question::is_valid_slug(slug) {
    return Err(Error::InvalidSlug(slug.to_owned()));
  }

  let record = store.get_question(slug).await.map_err(box_store)?;
  let Some(record) = record else {
    return Err(Error::NotFound(slug.to_owned()));
  };
  let Some(answered) = record.answer else {
    return Err(Error::NotFound(slug.to_owned()));
  };

  Ok(QuestionDetail {
    slug:     record.question.slug,
    title:    record.question.title,
    category: record.question.category,
    answer:   AnswerView {
      allowed:      answered.answer.allowed,
      conditions:   answered.answer.conditions,
      consequences: answered.answer.consequences,
      verified_at:  answered.answer.verified_at,
    },
    sources:  answered
      .sources
      .into_iter()
      .map(|s| SourceView {
        name:        s.name,
        url:         s.url,
        authority:   s.authority,
        accessed_at: s.accessed_at,
      })
      .collect(),
  })
}

fn box_store<E: std::error::Error + Send + Sync + 'static>(e: E) -> Error {
  Error::Store(Box::new(e))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
