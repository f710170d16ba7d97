//! Context tags — the applicability vocabulary attached to questions.
//!
//! A context tag is one value within one of three independent dimensions
//! (stage of study, province, program type). Tags are created at seed time
//! and immutable thereafter; they are never deleted while referenced.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The applicability axis a context value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
  Stage,
  Province,
  Program,
}

/// One applicability tag.
///
/// `value` is the short machine code clients filter by. It is unique across
/// ALL dimensions, not just within its own — clients send a bare value with
/// no dimension attached, so it is the sole join key (see [`crate::catalog`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
  pub context_id: Uuid,
  pub dimension:  Dimension,
  pub value:      String,
  pub label:      String,
}

// ─── Public views ────────────────────────────────────────────────────────────

/// The reduced context shape served to clients; the internal id and
/// dimension are not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextOption {
  pub value: String,
  pub label: String,
}

impl From<Context> for ContextOption {
  fn from(c: Context) -> Self {
    Self { value: c.value, label: c.label }
  }
}

/// The full vocabulary grouped by dimension, each group ordered by label
/// ascending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextsView {
  pub stages:    Vec<ContextOption>,
  pub provinces: Vec<ContextOption>,
  pub programs:  Vec<ContextOption>,
}
