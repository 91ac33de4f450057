//! Wire types for the request boundary.
//!
//! A request is a JSON object tagged by `op`:
//!
//! ```json
//! {"op": "createShow", "name": "Raw"}
//! {"op": "transferChampionshipHolder", "championshipId": 3, "wrestlerId": null}
//! ```
//!
//! A reply is either `{"ok": <value>}` or
//! `{"error": {"kind": "...", "message": "..."}}`.

use roster_core::{
  championship::ChampionshipRow,
  narrator::MatchReport,
  reference::ReferenceRow,
  wrestler::{NewWrestler, Wrestler, WrestlerRow},
};
use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Every operation the display process can request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Request {
  // Reference registry
  ListWrestlerTypes,
  ListWeightClasses,
  ListFactions,
  ListShows,
  /// Same rows as [`Request::ListShows`].
  ListBrands,
  CreateShow { name: String },
  DeleteShow { id: i64 },
  CreateFaction { name: String },
  DeleteFaction { id: i64 },
  CreateWrestlerType { name: String },
  DeleteWrestlerType { id: i64 },
  CreateWeightClass { name: String },
  DeleteWeightClass { id: i64 },

  // Wrestlers
  CreateWrestler { wrestler: NewWrestler },
  ListWrestlers,
  /// Fetch one wrestler; replies `null` when absent.
  ListWrestler { id: i64 },
  UpdateWrestler { wrestler: Wrestler },
  DeleteWrestler { id: i64 },

  // Championships
  ListChampionships,
  CreateChampionship {
    title_name:        String,
    show_id:           i64,
    #[serde(default)]
    is_tag_team:       bool,
    #[serde(default)]
    current_holder_id: Option<i64>,
  },
  TransferChampionshipHolder {
    championship_id: i64,
    /// `null` or absent vacates the title.
    #[serde(default)]
    wrestler_id:     Option<i64>,
  },
  DeleteChampionship { id: i64 },

  // Matches
  SimulateMatch {
    wrestler_ids:    Vec<i64>,
    #[serde(default)]
    championship_id: Option<i64>,
  },
}

impl Request {
  /// The wire name of this operation.
  pub fn op(&self) -> &'static str {
    match self {
      Self::ListWrestlerTypes => "listWrestlerTypes",
      Self::ListWeightClasses => "listWeightClasses",
      Self::ListFactions => "listFactions",
      Self::ListShows => "listShows",
      Self::ListBrands => "listBrands",
      Self::CreateShow { .. } => "createShow",
      Self::DeleteShow { .. } => "deleteShow",
      Self::CreateFaction { .. } => "createFaction",
      Self::DeleteFaction { .. } => "deleteFaction",
      Self::CreateWrestlerType { .. } => "createWrestlerType",
      Self::DeleteWrestlerType { .. } => "deleteWrestlerType",
      Self::CreateWeightClass { .. } => "createWeightClass",
      Self::DeleteWeightClass { .. } => "deleteWeightClass",
      Self::CreateWrestler { .. } => "createWrestler",
      Self::ListWrestlers => "listWrestlers",
      Self::ListWrestler { .. } => "listWrestler",
      Self::UpdateWrestler { .. } => "updateWrestler",
      Self::DeleteWrestler { .. } => "deleteWrestler",
      Self::ListChampionships => "listChampionships",
      Self::CreateChampionship { .. } => "createChampionship",
      Self::TransferChampionshipHolder { .. } => "transferChampionshipHolder",
      Self::DeleteChampionship { .. } => "deleteChampionship",
      Self::SimulateMatch { .. } => "simulateMatch",
    }
  }
}

/// The successful result of a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
  References(Vec<ReferenceRow>),
  Wrestlers(Vec<WrestlerRow>),
  Wrestler(Option<WrestlerRow>),
  Championships(Vec<ChampionshipRow>),
  Created { id: i64 },
  /// Rows changed or removed by an update or delete.
  Affected { rows: usize },
  Match(MatchReport),
}

/// The envelope written back for every request line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reply {
  Ok(Response),
  Error(BridgeError),
}

impl From<Result<Response, BridgeError>> for Reply {
  fn from(result: Result<Response, BridgeError>) -> Self {
    match result {
      Ok(response) => Self::Ok(response),
      Err(err) => Self::Error(err),
    }
  }
}
