//! Error types for `roster-core`.

use thiserror::Error;

use crate::reference::{Dependents, ReferenceKind};

#[derive(Debug, Error)]
pub enum Error {
  /// A required field is missing or malformed, or a referenced row does not
  /// exist. Nothing was written.
  #[error("validation failed: {0}")]
  Validation(String),

  /// A reference row is still in use and cannot be deleted.
  #[error("cannot delete {kind} while {}", dependency_phrase(.kind, .dependents))]
  DependencyExists {
    kind:       ReferenceKind,
    dependents: Dependents,
  },

  #[error("{0} not found")]
  NotFound(String),
}

impl Error {
  pub fn validation(message: impl Into<String>) -> Self {
    Self::Validation(message.into())
  }
}

fn dependency_phrase(kind: &ReferenceKind, dependents: &Dependents) -> &'static str {
  dependents.phrase(*kind)
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Trim `value` and reject it if nothing is left.
pub(crate) fn require_text(field: &str, value: &str) -> Result<String> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(Error::validation(format!("{field} is required")));
  }
  Ok(trimmed.to_owned())
}
