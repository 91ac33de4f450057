//! The `RosterStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! Higher layers (`roster-bridge`, the narrator) depend on this abstraction,
//! not on any concrete backend.
//!
//! Reads by id return `Ok(None)` for a missing row. Writes report the number
//! of rows they touched, so an update or delete of an unknown id yields `0`
//! rather than an error.

use std::future::Future;

use crate::{
  championship::{ChampionshipRow, NewChampionship},
  reference::{ReferenceKind, ReferenceRow},
  wrestler::{NewWrestler, Wrestler, WrestlerRow},
};

/// Abstraction over a roster store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait RosterStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Reference registry ────────────────────────────────────────────────

  /// List every row of a lookup table, by name (weight classes by id).
  fn list_references(
    &self,
    kind: ReferenceKind,
  ) -> impl Future<Output = Result<Vec<ReferenceRow>, Self::Error>> + Send + '_;

  /// Insert a lookup row and return its id. Empty or duplicate names are
  /// rejected.
  fn create_reference(
    &self,
    kind: ReferenceKind,
    name: String,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Delete a lookup row, refusing while dependents exist.
  ///
  /// Returns the number of rows removed (0 or 1). A refused delete mutates
  /// nothing.
  fn delete_reference(
    &self,
    kind: ReferenceKind,
    id: i64,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  // ── Wrestlers ─────────────────────────────────────────────────────────

  fn create_wrestler(
    &self,
    input: NewWrestler,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// All wrestlers with their reference names, ordered by name.
  fn list_wrestlers(
    &self,
  ) -> impl Future<Output = Result<Vec<WrestlerRow>, Self::Error>> + Send + '_;

  fn get_wrestler(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<WrestlerRow>, Self::Error>> + Send + '_;

  /// Overwrite every column of the wrestler with `wrestler.id`.
  fn update_wrestler(
    &self,
    wrestler: Wrestler,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Delete a wrestler, vacating any championship it holds.
  fn delete_wrestler(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  // ── Championships ─────────────────────────────────────────────────────

  fn create_championship(
    &self,
    input: NewChampionship,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// All championships ordered by show name, then title name.
  fn list_championships(
    &self,
  ) -> impl Future<Output = Result<Vec<ChampionshipRow>, Self::Error>> + Send + '_;

  fn get_championship(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<ChampionshipRow>, Self::Error>> + Send + '_;

  /// Unconditionally overwrite the current holder; `None` vacates the title.
  fn transfer_championship_holder(
    &self,
    championship_id: i64,
    wrestler_id: Option<i64>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  fn delete_championship(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
