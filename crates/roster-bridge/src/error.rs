//! Bridge error type and its wire form.

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The category of a failed request, as seen by the display process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
  /// A field was missing or malformed, or a referenced row does not exist.
  Validation,
  /// A reference row is still in use.
  DependencyExists,
  NotFound,
  /// The request line was not a valid request.
  Malformed,
  /// Anything else the store reported.
  Store,
}

/// An error returned by a bridge operation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct BridgeError {
  pub kind:    ErrorKind,
  pub message: String,
}

impl BridgeError {
  pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
    Self { kind, message: message.into() }
  }

  pub fn malformed(err: serde_json::Error) -> Self {
    Self::new(ErrorKind::Malformed, format!("malformed request: {err}"))
  }

  /// Classify a store error by the first [`roster_core::Error`] found in its
  /// source chain.
  pub fn from_store<E>(err: E) -> Self
  where
    E: StdError + 'static,
  {
    let core = std::iter::successors(
      Some(&err as &(dyn StdError + 'static)),
      |&e| e.source(),
    )
    .find_map(|e| e.downcast_ref::<roster_core::Error>());

    let kind = match core {
      Some(roster_core::Error::Validation(_)) => ErrorKind::Validation,
      Some(roster_core::Error::DependencyExists { .. }) => {
        ErrorKind::DependencyExists
      }
      Some(roster_core::Error::NotFound(_)) => ErrorKind::NotFound,
      None => ErrorKind::Store,
    };
    Self::new(kind, err.to_string())
  }
}

impl From<roster_core::Error> for BridgeError {
  fn from(err: roster_core::Error) -> Self { Self::from_store(err) }
}
