//! Error type for `permitted-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  #[error("unknown dimension: {0:?}")]
  UnknownDimension(String),

  #[error("unknown verdict: {0:?}")]
  UnknownVerdict(String),

  /// Attempted to link a question to a context value that is not seeded.
  #[error("unknown context value: {0:?}")]
  UnknownContext(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
