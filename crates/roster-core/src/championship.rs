//! Championship titles.
//!
//! A championship is tied to a show and has at most one recorded holder. Tag
//! team titles also record a single holder (one member of the team).

use serde::{Deserialize, Serialize};

use crate::{Result, error::require_text};

/// Input to [`crate::store::RosterStore::create_championship`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChampionship {
  pub title_name:        String,
  pub show_id:           i64,
  #[serde(default)]
  pub is_tag_team:       bool,
  /// `None` creates the title vacant.
  #[serde(default)]
  pub current_holder_id: Option<i64>,
}

impl NewChampionship {
  pub fn new(title_name: impl Into<String>, show_id: i64) -> Self {
    Self {
      title_name: title_name.into(),
      show_id,
      is_tag_team: false,
      current_holder_id: None,
    }
  }

  pub fn validated(mut self) -> Result<Self> {
    self.title_name = require_text("title name", &self.title_name)?;
    Ok(self)
  }
}

/// A championship joined with its show name and holder name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionshipRow {
  pub id:                i64,
  pub title_name:        String,
  pub show_id:           i64,
  pub show_name:         String,
  pub is_tag_team:       bool,
  pub current_holder_id: Option<i64>,
  pub holder_name:       Option<String>,
}

impl ChampionshipRow {
  pub fn is_vacant(&self) -> bool { self.current_holder_id.is_none() }
}
