//! [`SqliteStore`] — the SQLite implementation of [`QuestionStore`].

use std::path::Path;

use permitted_core::{
  catalog::CatalogEntry,
  context::Context,
  question::{AnswerRecord, NewQuestion, Question, QuestionRecord, QuestionSummary},
  store::{QuestionFilter, QuestionStore},
};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{
    RawContext, RawDetailRow, RawSummary, encode_dimension, encode_dt,
    encode_uuid, encode_verdict,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Permitted question store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Administrative writes ─────────────────────────────────────────────────
  //
  // Reseeding happens out-of-band, never concurrently with serving traffic.
  // These methods are deliberately absent from the `QuestionStore` trait.

  /// Replace the whole context vocabulary. Existing tag links are cleared
  /// first; callers reseed question content afterwards.
  pub async fn replace_contexts(
    &self,
    entries: &'static [CatalogEntry],
  ) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM question_contexts", [])?;
        tx.execute("DELETE FROM contexts", [])?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO contexts (context_id, dimension, value, label)
             VALUES (?1, ?2, ?3, ?4)",
          )?;
          for entry in entries {
            stmt.execute(rusqlite::params![
              encode_uuid(Uuid::new_v4()),
              encode_dimension(entry.dimension),
              entry.value,
              entry.label,
            ])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Delete all questions; answers, sources, and tag links cascade.
  pub async fn clear_questions(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute("DELETE FROM questions", [])?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert one question with its answer, sources, and context tag links.
  ///
  /// Tag values are resolved against the seeded vocabulary up front, so an
  /// unknown value fails with [`Error::UnknownContext`] before anything is
  /// written.
  pub async fn insert_question(&self, input: NewQuestion) -> Result<Question> {
    let mut context_ids = Vec::with_capacity(input.contexts.len());
    for value in &input.contexts {
      let id = self
        .context_id_by_value(value)
        .await?
        .ok_or_else(|| Error::UnknownContext(value.clone()))?;
      context_ids.push(id);
    }

    let question = Question {
      question_id: Uuid::new_v4(),
      slug:        input.slug,
      title:       input.title,
      category:    input.category,
    };

    let inserted = question.clone();
    let answer = input.answer;
    let question_id_str = encode_uuid(question.question_id);

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        tx.execute(
          "INSERT INTO questions (question_id, slug, title, category)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![
            question_id_str,
            question.slug,
            question.title,
            question.category,
          ],
        )?;

        if let Some(answer) = answer {
          let answer_id_str = encode_uuid(Uuid::new_v4());
          tx.execute(
            "INSERT INTO answers
               (answer_id, question_id, allowed, conditions, consequences, verified_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
              answer_id_str,
              question_id_str,
              encode_verdict(answer.allowed),
              answer.conditions,
              answer.consequences,
              encode_dt(answer.verified_at),
            ],
          )?;

          let mut stmt = tx.prepare(
            "INSERT INTO sources
               (source_id, answer_id, name, url, authority, accessed_at, position)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          )?;
          for (position, source) in answer.sources.iter().enumerate() {
            stmt.execute(rusqlite::params![
              encode_uuid(Uuid::new_v4()),
              answer_id_str,
              source.name,
              source.url,
              source.authority,
              encode_dt(source.accessed_at),
              position as i64,
            ])?;
          }
        }

        {
          let mut stmt = tx.prepare(
            "INSERT INTO question_contexts (question_id, context_id)
             VALUES (?1, ?2)",
          )?;
          for context_id in &context_ids {
            stmt.execute(rusqlite::params![question_id_str, context_id])?;
          }
        }

        tx.commit()?;
        Ok(())
      })
      .await?;

    Ok(inserted)
  }

  async fn context_id_by_value(&self, value: &str) -> Result<Option<String>> {
    let value = value.to_owned();
    let id = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT context_id FROM contexts WHERE value = ?1",
              rusqlite::params![value],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;
    Ok(id)
  }
}

// ─── QuestionStore impl ──────────────────────────────────────────────────────

impl QuestionStore for SqliteStore {
  type Error = Error;

  async fn list_contexts(&self) -> Result<Vec<Context>> {
    let raws: Vec<RawContext> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT context_id, dimension, value, label
           FROM contexts
           ORDER BY label ASC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawContext {
              context_id: row.get(0)?,
              dimension:  row.get(1)?,
              value:      row.get(2)?,
              label:      row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContext::into_context).collect()
  }

  async fn list_questions(
    &self,
    filter: &QuestionFilter,
  ) -> Result<Vec<QuestionSummary>> {
    // One EXISTS membership clause per supplied dimension. Matching is by
    // bare context value, which is sound only because `contexts.value` is
    // UNIQUE across dimensions — the schema enforces it and the catalog
    // constants assert it.
    let mut conds: Vec<String> = Vec::new();
    let mut params: Vec<String> = Vec::new();

    if let Some(category) = &filter.category {
      params.push(category.clone());
      conds.push(format!("q.category = ?{}", params.len()));
    }
    for value in filter.dimension_values() {
      params.push(value.to_owned());
      conds.push(format!(
        "EXISTS (SELECT 1 FROM question_contexts qc
                 JOIN contexts c ON c.context_id = qc.context_id
                 WHERE qc.question_id = q.question_id AND c.value = ?{})",
        params.len()
      ));
    }

    let where_clause = if conds.is_empty() {
      String::new()
    } else {
      format!("WHERE {}", conds.join(" AND "))
    };

    // Inner join on answers: a question with no answer is never listed.
    // BINARY collation on the ORDER BY gives the ordinal title ordering.
    let sql = format!(
      "SELECT q.slug, q.title, q.category, a.allowed
       FROM questions q
       JOIN answers a ON a.question_id = q.question_id
       {where_clause}
       ORDER BY q.title ASC"
    );

    let raws: Vec<RawSummary> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), |row| {
            Ok(RawSummary {
              slug:     row.get(0)?,
              title:    row.get(1)?,
              category: row.get(2)?,
              allowed:  row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSummary::into_summary).collect()
  }

  async fn get_question(&self, slug: &str) -> Result<Option<QuestionRecord>> {
    let slug = slug.to_owned();

    let raws: Vec<RawDetailRow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT
             q.question_id, q.slug, q.title, q.category,
             a.answer_id, a.allowed, a.conditions, a.consequences, a.verified_at,
             s.source_id, s.name, s.url, s.authority, s.accessed_at
           FROM questions q
           LEFT JOIN answers a ON a.question_id = q.question_id
           LEFT JOIN sources s ON s.answer_id   = a.answer_id
           WHERE q.slug = ?1
           ORDER BY s.position ASC",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![slug], |row| {
            Ok(RawDetailRow {
              question_id:  row.get(0)?,
              slug:         row.get(1)?,
              title:        row.get(2)?,
              category:     row.get(3)?,
              answer_id:    row.get(4)?,
              allowed:      row.get(5)?,
              conditions:   row.get(6)?,
              consequences: row.get(7)?,
              verified_at:  row.get(8)?,
              source_id:    row.get(9)?,
              source_name:  row.get(10)?,
              source_url:   row.get(11)?,
              authority:    row.get(12)?,
              accessed_at:  row.get(13)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    fold_detail(raws)
  }
}

/// Collapse the detail join (one row per source, or a single row with NULL
/// source columns) into a [`QuestionRecord`].
fn fold_detail(raws: Vec<RawDetailRow>) -> Result<Option<QuestionRecord>> {
  let Some(first) = raws.first() else {
    return Ok(None);
  };

  let question = first.question()?;
  let answer = first.answer(question.question_id)?;

  let record = match answer {
    None => QuestionRecord { question, answer: None },
    Some(answer) => {
      let mut sources = Vec::new();
      for raw in &raws {
        if let Some(source) = raw.source(answer.answer_id)? {
          sources.push(source);
        }
      }
      QuestionRecord {
        question,
        answer: Some(AnswerRecord { answer, sources }),
      }
    }
  };

  Ok(Some(record))
}
