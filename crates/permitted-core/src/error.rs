//! Error types for `permitted-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A filter value outside the recognized vocabulary for its dimension.
  /// The message names the offending parameter.
  #[error("invalid {param}: {value}")]
  InvalidFilter { param: &'static str, value: String },

  /// A slug that does not match `^[a-z0-9-]+$`.
  #[error("invalid slug format")]
  InvalidSlug(String),

  /// No such question, or the question is incomplete. The two cases are
  /// deliberately indistinguishable to callers.
  #[error("question not found: {0}")]
  NotFound(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
