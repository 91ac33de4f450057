//! Wrestler types.
//!
//! A wrestler belongs to exactly one show, has one wrestler type and one
//! weight class, and may optionally belong to a faction. The read projection
//! [`WrestlerRow`] carries the human-readable names of those references.

use serde::{Deserialize, Serialize};

use crate::{Result, error::require_text};

// ─── Alignment ───────────────────────────────────────────────────────────────

/// The narrative moral orientation of a wrestler.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
  #[default]
  Face,
  Heel,
  Tweener,
}

impl Alignment {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Face => "face",
      Self::Heel => "heel",
      Self::Tweener => "tweener",
    }
  }

  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "face" => Some(Self::Face),
      "heel" => Some(Self::Heel),
      "tweener" => Some(Self::Tweener),
      _ => None,
    }
  }
}

// ─── NewWrestler ─────────────────────────────────────────────────────────────

/// Input to [`crate::store::RosterStore::create_wrestler`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWrestler {
  pub name:            String,
  /// The show (brand) the wrestler is assigned to.
  pub brand_id:        i64,
  #[serde(default)]
  pub faction_id:      Option<i64>,
  pub type_id:         i64,
  pub weight_class_id: i64,
  #[serde(default)]
  pub alignment:       Alignment,
  #[serde(default)]
  pub is_champion:     bool,
  #[serde(default)]
  pub is_in_faction:   bool,
}

impl NewWrestler {
  /// Convenience constructor with the optional fields set to their defaults.
  pub fn new(
    name: impl Into<String>,
    brand_id: i64,
    type_id: i64,
    weight_class_id: i64,
  ) -> Self {
    Self {
      name: name.into(),
      brand_id,
      faction_id: None,
      type_id,
      weight_class_id,
      alignment: Alignment::default(),
      is_champion: false,
      is_in_faction: false,
    }
  }

  /// Check the fields the store cannot check for us and normalise the name.
  ///
  /// Whether the referenced rows exist is left to the store's foreign keys.
  pub fn validated(mut self) -> Result<Self> {
    self.name = require_text("wrestler name", &self.name)?;
    Ok(self)
  }

  /// Attach an id, producing the full-row form used by updates.
  pub fn with_id(self, id: i64) -> Wrestler {
    Wrestler {
      id,
      name: self.name,
      brand_id: self.brand_id,
      faction_id: self.faction_id,
      type_id: self.type_id,
      weight_class_id: self.weight_class_id,
      alignment: self.alignment,
      is_champion: self.is_champion,
      is_in_faction: self.is_in_faction,
    }
  }
}

// ─── Wrestler ────────────────────────────────────────────────────────────────

/// A persisted wrestler; also the input to a full-row update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrestler {
  pub id:              i64,
  pub name:            String,
  pub brand_id:        i64,
  #[serde(default)]
  pub faction_id:      Option<i64>,
  pub type_id:         i64,
  pub weight_class_id: i64,
  #[serde(default)]
  pub alignment:       Alignment,
  #[serde(default)]
  pub is_champion:     bool,
  #[serde(default)]
  pub is_in_faction:   bool,
}

impl Wrestler {
  pub fn validated(mut self) -> Result<Self> {
    self.name = require_text("wrestler name", &self.name)?;
    Ok(self)
  }
}

/// A wrestler joined with the names of the rows it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrestlerRow {
  #[serde(flatten)]
  pub wrestler:          Wrestler,
  /// Name of the assigned show.
  pub brand_name:        Option<String>,
  pub faction_name:      Option<String>,
  pub type_name:         Option<String>,
  pub weight_class_name: Option<String>,
}
