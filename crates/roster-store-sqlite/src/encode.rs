//! Encoding and decoding helpers between domain types and SQLite columns.
//!
//! Booleans are stored as `0`/`1` integers and alignments as lowercase text.
//! This is the only place those encodings are known.

use roster_core::{
  championship::ChampionshipRow,
  reference::{Dependents, ReferenceKind},
  wrestler::{Alignment, Wrestler, WrestlerRow},
};

use crate::{Error, Result};

// ─── Flags ───────────────────────────────────────────────────────────────────

pub fn encode_flag(b: bool) -> i64 { i64::from(b) }

pub fn decode_flag(column: &str, v: i64) -> Result<bool> {
  match v {
    0 => Ok(false),
    1 => Ok(true),
    other => Err(Error::Decode(format!("{column}: expected 0 or 1, got {other}"))),
  }
}

// ─── Alignment ───────────────────────────────────────────────────────────────

pub fn encode_alignment(a: Alignment) -> &'static str { a.as_str() }

pub fn decode_alignment(s: &str) -> Result<Alignment> {
  Alignment::parse(s)
    .ok_or_else(|| Error::Decode(format!("unknown alignment: {s:?}")))
}

// ─── Reference tables ────────────────────────────────────────────────────────

pub fn reference_table(kind: ReferenceKind) -> &'static str {
  match kind {
    ReferenceKind::Show => "shows",
    ReferenceKind::Faction => "factions",
    ReferenceKind::WeightClass => "weight_classes",
    ReferenceKind::WrestlerType => "wrestler_types",
  }
}

/// The queries that count rows blocking deletion of a `kind` row. Each takes
/// the row id as `?1`.
pub fn dependency_checks(kind: ReferenceKind) -> &'static [(Dependents, &'static str)] {
  match kind {
    ReferenceKind::Show => &[
      (Dependents::Wrestlers, "SELECT COUNT(*) FROM wrestlers WHERE brand_id = ?1"),
      (Dependents::Championships, "SELECT COUNT(*) FROM championships WHERE show_id = ?1"),
    ],
    ReferenceKind::WeightClass => &[(
      Dependents::Wrestlers,
      "SELECT COUNT(*) FROM wrestlers WHERE weight_class_id = ?1",
    )],
    ReferenceKind::WrestlerType => {
      &[(Dependents::Wrestlers, "SELECT COUNT(*) FROM wrestlers WHERE type_id = ?1")]
    }
    // Members are detached instead; see `SqliteStore::delete_reference`.
    ReferenceKind::Faction => &[],
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list shared by every wrestler projection; pairs with
/// [`RawWrestlerRow::from_row`].
pub const WRESTLER_SELECT: &str = "
SELECT w.id, w.name, w.brand_id, w.faction_id, w.type_id, w.weight_class_id,
       w.alignment, w.is_champion, w.is_in_faction,
       s.name  AS brand_name,
       f.name  AS faction_name,
       t.name  AS type_name,
       wc.name AS weight_class_name
FROM wrestlers w
LEFT JOIN shows          s  ON s.id  = w.brand_id
LEFT JOIN factions       f  ON f.id  = w.faction_id
LEFT JOIN wrestler_types t  ON t.id  = w.type_id
LEFT JOIN weight_classes wc ON wc.id = w.weight_class_id";

/// Raw values read directly from a joined `wrestlers` row.
pub struct RawWrestlerRow {
  pub id:                i64,
  pub name:              String,
  pub brand_id:          i64,
  pub faction_id:        Option<i64>,
  pub type_id:           i64,
  pub weight_class_id:   i64,
  pub alignment:         String,
  pub is_champion:       i64,
  pub is_in_faction:     i64,
  pub brand_name:        Option<String>,
  pub faction_name:      Option<String>,
  pub type_name:         Option<String>,
  pub weight_class_name: Option<String>,
}

impl RawWrestlerRow {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:                row.get(0)?,
      name:              row.get(1)?,
      brand_id:          row.get(2)?,
      faction_id:        row.get(3)?,
      type_id:           row.get(4)?,
      weight_class_id:   row.get(5)?,
      alignment:         row.get(6)?,
      is_champion:       row.get(7)?,
      is_in_faction:     row.get(8)?,
      brand_name:        row.get(9)?,
      faction_name:      row.get(10)?,
      type_name:         row.get(11)?,
      weight_class_name: row.get(12)?,
    })
  }

  pub fn into_row(self) -> Result<WrestlerRow> {
    Ok(WrestlerRow {
      wrestler:          Wrestler {
        id:              self.id,
        name:            self.name,
        brand_id:        self.brand_id,
        faction_id:      self.faction_id,
        type_id:         self.type_id,
        weight_class_id: self.weight_class_id,
        alignment:       decode_alignment(&self.alignment)?,
        is_champion:     decode_flag("is_champion", self.is_champion)?,
        is_in_faction:   decode_flag("is_in_faction", self.is_in_faction)?,
      },
      brand_name:        self.brand_name,
      faction_name:      self.faction_name,
      type_name:         self.type_name,
      weight_class_name: self.weight_class_name,
    })
  }
}

/// Column list shared by every championship projection; pairs with
/// [`RawChampionshipRow::from_row`].
pub const CHAMPIONSHIP_SELECT: &str = "
SELECT c.id, c.title_name, c.show_id, s.name AS show_name, c.is_tag_team,
       c.current_holder_id, w.name AS holder_name
FROM championships c
JOIN shows          s ON s.id = c.show_id
LEFT JOIN wrestlers w ON w.id = c.current_holder_id";

/// Raw values read directly from a joined `championships` row.
pub struct RawChampionshipRow {
  pub id:                i64,
  pub title_name:        String,
  pub show_id:           i64,
  pub show_name:         String,
  pub is_tag_team:       i64,
  pub current_holder_id: Option<i64>,
  pub holder_name:       Option<String>,
}

impl RawChampionshipRow {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:                row.get(0)?,
      title_name:        row.get(1)?,
      show_id:           row.get(2)?,
      show_name:         row.get(3)?,
      is_tag_team:       row.get(4)?,
      current_holder_id: row.get(5)?,
      holder_name:       row.get(6)?,
    })
  }

  pub fn into_row(self) -> Result<ChampionshipRow> {
    Ok(ChampionshipRow {
      id:                self.id,
      title_name:        self.title_name,
      show_id:           self.show_id,
      show_name:         self.show_name,
      is_tag_team:       decode_flag("is_tag_team", self.is_tag_team)?,
      current_holder_id: self.current_holder_id,
      holder_name:       self.holder_name,
    })
  }
}
