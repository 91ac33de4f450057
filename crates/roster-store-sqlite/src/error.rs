//! Error type for `roster-store-sqlite`.

use rusqlite::ffi;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Validation, dependency and not-found failures. Constraint violations
  /// raised by SQLite are translated into `roster_core::Error::Validation`.
  #[error("{0}")]
  Core(#[from] roster_core::Error),

  #[error("database error: {0}")]
  Database(#[source] tokio_rusqlite::Error),

  /// A stored value could not be decoded into its domain type.
  #[error("decode error: {0}")]
  Decode(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<tokio_rusqlite::Error> for Error {
  fn from(err: tokio_rusqlite::Error) -> Self {
    match constraint_message(&err) {
      Some(message) => Self::Core(roster_core::Error::Validation(message)),
      None => Self::Database(err),
    }
  }
}

impl From<rusqlite::Error> for Error {
  fn from(err: rusqlite::Error) -> Self {
    tokio_rusqlite::Error::Rusqlite(err).into()
  }
}

/// Describe a constraint violation, or `None` if `err` is something else.
fn constraint_message(err: &tokio_rusqlite::Error) -> Option<String> {
  let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
    failure,
    detail,
  )) = err
  else {
    return None;
  };
  if failure.code != rusqlite::ErrorCode::ConstraintViolation {
    return None;
  }

  let what = match failure.extended_code {
    ffi::SQLITE_CONSTRAINT_FOREIGNKEY => "a referenced row does not exist",
    ffi::SQLITE_CONSTRAINT_UNIQUE => "a row with that name already exists",
    ffi::SQLITE_CONSTRAINT_NOTNULL => "a required field is missing",
    ffi::SQLITE_CONSTRAINT_CHECK => "a field has an invalid value",
    _ => "a constraint was violated",
  };
  Some(match detail {
    Some(detail) => format!("{what} ({detail})"),
    None => what.to_owned(),
  })
}
