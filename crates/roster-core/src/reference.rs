//! Lookup tables: shows, factions, weight classes and wrestler types.
//!
//! Every reference table has the same shape (an id and a unique name), so a
//! single [`ReferenceKind`] selects which one an operation targets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Result, error::require_text};

/// Which lookup table a registry operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
  /// A show or brand; the two names refer to the same roster grouping.
  Show,
  Faction,
  WeightClass,
  WrestlerType,
}

impl ReferenceKind {
  pub const ALL: [ReferenceKind; 4] = [
    ReferenceKind::Show,
    ReferenceKind::Faction,
    ReferenceKind::WeightClass,
    ReferenceKind::WrestlerType,
  ];

  /// Human-readable label used in error messages and logs.
  pub fn label(self) -> &'static str {
    match self {
      Self::Show => "show",
      Self::Faction => "faction",
      Self::WeightClass => "weight class",
      Self::WrestlerType => "wrestler type",
    }
  }

  /// Weight classes have a meaningful insertion order (lightest first), so
  /// they list by id. Everything else lists alphabetically.
  pub fn lists_by_id(self) -> bool { matches!(self, Self::WeightClass) }
}

impl fmt::Display for ReferenceKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// The class of rows that blocked a reference deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dependents {
  Wrestlers,
  Championships,
}

impl Dependents {
  /// The tail of a "cannot delete ..." message.
  pub fn phrase(self, kind: ReferenceKind) -> &'static str {
    match (self, kind) {
      (Self::Wrestlers, ReferenceKind::Show) => "wrestlers are assigned to it",
      (Self::Wrestlers, _) => "wrestlers are using it",
      (Self::Championships, _) => "championships are linked to it",
    }
  }
}

/// A row from any lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRow {
  pub id:   i64,
  pub name: String,
}

/// Validate and normalise the name of a new reference row.
pub fn validate_name(kind: ReferenceKind, name: &str) -> Result<String> {
  require_text(&format!("{kind} name"), name)
}
