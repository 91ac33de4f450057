//! [`SqliteStore`]: the SQLite implementation of [`RosterStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use roster_core::{
  championship::{ChampionshipRow, NewChampionship},
  reference::{self, Dependents, ReferenceKind, ReferenceRow},
  store::RosterStore,
  wrestler::{NewWrestler, Wrestler, WrestlerRow},
};

use crate::{
  Result,
  encode::{
    CHAMPIONSHIP_SELECT, RawChampionshipRow, RawWrestlerRow, WRESTLER_SELECT,
    dependency_checks, encode_alignment, encode_flag, reference_table,
  },
  schema::{PRAGMAS, SCHEMA, SENTINEL_TABLE},
};

/// What happened inside a guarded delete.
enum DeleteOutcome {
  Blocked(Dependents),
  Removed(usize),
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A roster store backed by a single SQLite file.
///
/// Cloning shares the inner connection. All
/// statements run on the connection's dedicated thread, one at a time.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and bootstrap the schema if needed.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.bootstrap().await?;
    Ok(store)
  }

  /// Open an in-memory store.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.bootstrap().await?;
    Ok(store)
  }

  /// Apply connection pragmas, then create the schema unless the sentinel
  /// table already exists. Creation is all-or-nothing.
  ///
  /// Returns `true` if the schema was created by this call.
  pub async fn bootstrap(&self) -> Result<bool> {
    let created = self
      .conn
      .call(|conn| {
        conn.execute_batch(PRAGMAS)?;

        let exists = conn
          .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
            rusqlite::params![SENTINEL_TABLE],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);
        if exists {
          return Ok(false);
        }

        // Dropping the transaction on error rolls it back.
        let tx = conn.transaction()?;
        tx.execute_batch(SCHEMA)?;
        tx.commit()?;
        Ok(true)
      })
      .await?;

    if created {
      tracing::info!("created roster schema");
    } else {
      tracing::debug!("roster schema already present");
    }
    Ok(created)
  }
}

// ─── RosterStore impl ────────────────────────────────────────────────────────

impl RosterStore for SqliteStore {
  type Error = crate::Error;

  // ── Reference registry ────────────────────────────────────────────────────

  async fn list_references(&self, kind: ReferenceKind) -> Result<Vec<ReferenceRow>> {
    let order = if kind.lists_by_id() { "id" } else { "name" };
    let sql = format!(
      "SELECT id, name FROM {} ORDER BY {order}",
      reference_table(kind)
    );

    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], |row| {
            Ok(ReferenceRow { id: row.get(0)?, name: row.get(1)? })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    tracing::debug!(%kind, count = rows.len(), "listed reference rows");
    Ok(rows)
  }

  async fn create_reference(&self, kind: ReferenceKind, name: String) -> Result<i64> {
    let name = reference::validate_name(kind, &name)?;
    let sql = format!("INSERT INTO {} (name) VALUES (?1)", reference_table(kind));

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(&sql, rusqlite::params![name])?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    tracing::debug!(%kind, id, "created reference row");
    Ok(id)
  }

  async fn delete_reference(&self, kind: ReferenceKind, id: i64) -> Result<usize> {
    let checks = dependency_checks(kind);
    let delete_sql = format!("DELETE FROM {} WHERE id = ?1", reference_table(kind));

    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        for (dependents, count_sql) in checks {
          let count: i64 =
            tx.query_row(count_sql, rusqlite::params![id], |row| row.get(0))?;
          if count > 0 {
            return Ok(DeleteOutcome::Blocked(*dependents));
          }
        }

        if kind == ReferenceKind::Faction {
          tx.execute(
            "UPDATE wrestlers SET faction_id = NULL, is_in_faction = 0
             WHERE faction_id = ?1",
            rusqlite::params![id],
          )?;
        }

        let removed = tx.execute(&delete_sql, rusqlite::params![id])?;
        tx.commit()?;
        Ok(DeleteOutcome::Removed(removed))
      })
      .await?;

    match outcome {
      DeleteOutcome::Blocked(dependents) => {
        tracing::debug!(%kind, id, ?dependents, "refused to delete reference row");
        Err(roster_core::Error::DependencyExists { kind, dependents }.into())
      }
      DeleteOutcome::Removed(removed) => {
        tracing::debug!(%kind, id, removed, "deleted reference row");
        Ok(removed)
      }
    }
  }

  // ── Wrestlers ─────────────────────────────────────────────────────────────

  async fn create_wrestler(&self, input: NewWrestler) -> Result<i64> {
    let w = input.validated()?;

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO wrestlers (
             name, brand_id, faction_id, type_id, weight_class_id,
             alignment, is_champion, is_in_faction
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            w.name,
            w.brand_id,
            w.faction_id,
            w.type_id,
            w.weight_class_id,
            encode_alignment(w.alignment),
            encode_flag(w.is_champion),
            encode_flag(w.is_in_faction),
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    tracing::debug!(id, "created wrestler");
    Ok(id)
  }

  async fn list_wrestlers(&self) -> Result<Vec<WrestlerRow>> {
    let sql = format!("{WRESTLER_SELECT} ORDER BY w.name, w.id");

    let raws: Vec<RawWrestlerRow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], RawWrestlerRow::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawWrestlerRow::into_row).collect()
  }

  async fn get_wrestler(&self, id: i64) -> Result<Option<WrestlerRow>> {
    let sql = format!("{WRESTLER_SELECT} WHERE w.id = ?1");

    let raw: Option<RawWrestlerRow> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id], RawWrestlerRow::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawWrestlerRow::into_row).transpose()
  }

  async fn update_wrestler(&self, wrestler: Wrestler) -> Result<usize> {
    let w = wrestler.validated()?;
    let id = w.id;

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE wrestlers SET
             name = ?1, brand_id = ?2, faction_id = ?3, type_id = ?4,
             weight_class_id = ?5, alignment = ?6, is_champion = ?7,
             is_in_faction = ?8
           WHERE id = ?9",
          rusqlite::params![
            w.name,
            w.brand_id,
            w.faction_id,
            w.type_id,
            w.weight_class_id,
            encode_alignment(w.alignment),
            encode_flag(w.is_champion),
            encode_flag(w.is_in_faction),
            w.id,
          ],
        )?)
      })
      .await?;

    tracing::debug!(id, changed, "updated wrestler");
    Ok(changed)
  }

  async fn delete_wrestler(&self, id: i64) -> Result<usize> {
    let (vacated, removed) = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let vacated = tx.execute(
          "UPDATE championships SET current_holder_id = NULL
           WHERE current_holder_id = ?1",
          rusqlite::params![id],
        )?;
        let removed =
          tx.execute("DELETE FROM wrestlers WHERE id = ?1", rusqlite::params![id])?;
        tx.commit()?;
        Ok((vacated, removed))
      })
      .await?;

    tracing::debug!(id, removed, vacated, "deleted wrestler");
    Ok(removed)
  }

  // ── Championships ─────────────────────────────────────────────────────────

  async fn create_championship(&self, input: NewChampionship) -> Result<i64> {
    let c = input.validated()?;

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO championships (title_name, show_id, is_tag_team, current_holder_id)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![
            c.title_name,
            c.show_id,
            encode_flag(c.is_tag_team),
            c.current_holder_id,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    tracing::debug!(id, "created championship");
    Ok(id)
  }

  async fn list_championships(&self) -> Result<Vec<ChampionshipRow>> {
    let sql = format!("{CHAMPIONSHIP_SELECT} ORDER BY s.name, c.title_name, c.id");

    let raws: Vec<RawChampionshipRow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], RawChampionshipRow::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawChampionshipRow::into_row).collect()
  }

  async fn get_championship(&self, id: i64) -> Result<Option<ChampionshipRow>> {
    let sql = format!("{CHAMPIONSHIP_SELECT} WHERE c.id = ?1");

    let raw: Option<RawChampionshipRow> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id], RawChampionshipRow::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawChampionshipRow::into_row).transpose()
  }

  async fn transfer_championship_holder(
    &self,
    championship_id: i64,
    wrestler_id:     Option<i64>,
  ) -> Result<usize> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE championships SET current_holder_id = ?1 WHERE id = ?2",
          rusqlite::params![wrestler_id, championship_id],
        )?)
      })
      .await?;

    tracing::debug!(championship_id, ?wrestler_id, changed, "transferred championship");
    Ok(changed)
  }

  async fn delete_championship(&self, id: i64) -> Result<usize> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM championships WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;

    tracing::debug!(id, removed, "deleted championship");
    Ok(removed)
  }
}
