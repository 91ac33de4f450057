//! Integration tests for `SqliteStore` against an in-memory database.

use rand::{SeedableRng, rngs::StdRng};
use roster_core::{
  championship::NewChampionship,
  narrator::{self, Competitor, MatchCard, TitleStake},
  reference::{Dependents, ReferenceKind},
  store::RosterStore,
  wrestler::{Alignment, NewWrestler},
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

/// Ids of a show, wrestler type and weight class, in that order.
async fn seed_references(s: &SqliteStore) -> (i64, i64, i64) {
  let show = s
    .create_reference(ReferenceKind::Show, "RAW".into())
    .await
    .unwrap();
  let kind = s
    .create_reference(ReferenceKind::WrestlerType, "Powerhouse".into())
    .await
    .unwrap();
  let class = s
    .create_reference(ReferenceKind::WeightClass, "Heavyweight".into())
    .await
    .unwrap();
  (show, kind, class)
}

/// Create a wrestler on show 1 with type 1 and weight class 1, seeding those
/// rows first if the store is empty.
async fn seed_wrestler(s: &SqliteStore, name: &str) -> i64 {
  if s.list_references(ReferenceKind::Show).await.unwrap().is_empty() {
    seed_references(s).await;
  }
  s.create_wrestler(NewWrestler::new(name, 1, 1, 1))
    .await
    .unwrap()
}

fn is_validation(err: &Error) -> bool {
  matches!(err, Error::Core(roster_core::Error::Validation(_)))
}

// ─── Bootstrap ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn bootstrap_runs_once_per_database() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("roster.db");

  let s = SqliteStore::open(&path).await.unwrap();
  seed_references(&s).await;
  // The schema is already there, so a second bootstrap is a no-op.
  assert!(!s.bootstrap().await.unwrap());
  drop(s);

  let reopened = SqliteStore::open(&path).await.unwrap();
  let shows = reopened.list_references(ReferenceKind::Show).await.unwrap();
  assert_eq!(shows.len(), 1);
  assert_eq!(shows[0].name, "RAW");
}

#[tokio::test]
async fn failed_bootstrap_leaves_no_partial_schema() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("roster.db");
  {
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch("CREATE TABLE championships (x)").unwrap();
  }

  assert!(SqliteStore::open(&path).await.is_err());

  let conn = rusqlite::Connection::open(&path).unwrap();
  let tables: Vec<String> = conn
    .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
    .unwrap()
    .query_map([], |row| row.get(0))
    .unwrap()
    .collect::<rusqlite::Result<_>>()
    .unwrap();
  assert_eq!(tables, vec!["championships".to_string()]);
}

// ─── Reference registry ──────────────────────────────────────────────────────

#[tokio::test]
async fn references_list_by_name_except_weight_classes() {
  let s = store().await;
  for name in ["SmackDown", "NXT", "RAW"] {
    s.create_reference(ReferenceKind::Show, name.into()).await.unwrap();
  }
  for name in ["Heavyweight", "Cruiserweight"] {
    s.create_reference(ReferenceKind::WeightClass, name.into())
      .await
      .unwrap();
  }

  let shows: Vec<_> = s
    .list_references(ReferenceKind::Show)
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.name)
    .collect();
  assert_eq!(shows, ["NXT", "RAW", "SmackDown"]);

  let classes: Vec<_> = s
    .list_references(ReferenceKind::WeightClass)
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.name)
    .collect();
  assert_eq!(classes, ["Heavyweight", "Cruiserweight"]);
}

#[tokio::test]
async fn create_reference_rejects_blank_and_duplicate_names() {
  let s = store().await;
  s.create_reference(ReferenceKind::WrestlerType, "Powerhouse".into())
    .await
    .unwrap();

  let blank = s
    .create_reference(ReferenceKind::WrestlerType, "  ".into())
    .await
    .unwrap_err();
  assert!(is_validation(&blank), "{blank}");

  let duplicate = s
    .create_reference(ReferenceKind::WrestlerType, "Powerhouse".into())
    .await
    .unwrap_err();
  assert!(is_validation(&duplicate), "{duplicate}");

  let types = s.list_references(ReferenceKind::WrestlerType).await.unwrap();
  assert_eq!(types.len(), 1);
}

#[tokio::test]
async fn unused_references_can_be_deleted() {
  let s = store().await;
  for kind in ReferenceKind::ALL {
    let id = s.create_reference(kind, "Spare".into()).await.unwrap();
    assert_eq!(s.delete_reference(kind, id).await.unwrap(), 1);
    assert!(s.list_references(kind).await.unwrap().is_empty());
  }
}

#[tokio::test]
async fn deleting_a_missing_reference_removes_nothing() {
  let s = store().await;
  assert_eq!(s.delete_reference(ReferenceKind::Show, 42).await.unwrap(), 0);
}

#[tokio::test]
async fn references_in_use_cannot_be_deleted() {
  let s = store().await;
  let (show, kind, class) = seed_references(&s).await;
  s.create_wrestler(NewWrestler::new("Test Wrestler", show, kind, class))
    .await
    .unwrap();

  for (ref_kind, id) in [
    (ReferenceKind::Show, show),
    (ReferenceKind::WrestlerType, kind),
    (ReferenceKind::WeightClass, class),
  ] {
    let err = s.delete_reference(ref_kind, id).await.unwrap_err();
    assert!(
      matches!(
        err,
        Error::Core(roster_core::Error::DependencyExists {
          dependents: Dependents::Wrestlers,
          ..
        })
      ),
      "{err}"
    );
    let rows = s.list_references(ref_kind).await.unwrap();
    assert!(rows.iter().any(|r| r.id == id));
  }
}

#[tokio::test]
async fn show_with_a_championship_cannot_be_deleted() {
  let s = store().await;
  let show = s
    .create_reference(ReferenceKind::Show, "SmackDown".into())
    .await
    .unwrap();
  s.create_championship(NewChampionship::new("United States Championship", show))
    .await
    .unwrap();

  let err = s
    .delete_reference(ReferenceKind::Show, show)
    .await
    .unwrap_err();
  assert_eq!(
    err.to_string(),
    "cannot delete show while championships are linked to it"
  );

  let shows = s.list_references(ReferenceKind::Show).await.unwrap();
  assert_eq!(shows.len(), 1);
  assert_eq!(s.list_championships().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_a_faction_detaches_its_members() {
  let s = store().await;
  let (show, kind, class) = seed_references(&s).await;
  let faction = s
    .create_reference(ReferenceKind::Faction, "The Shield".into())
    .await
    .unwrap();

  let mut input = NewWrestler::new("Seth", show, kind, class);
  input.faction_id = Some(faction);
  input.is_in_faction = true;
  let id = s.create_wrestler(input).await.unwrap();

  assert_eq!(
    s.delete_reference(ReferenceKind::Faction, faction).await.unwrap(),
    1
  );

  let row = s.get_wrestler(id).await.unwrap().unwrap();
  assert_eq!(row.wrestler.faction_id, None);
  assert!(!row.wrestler.is_in_faction);
  assert_eq!(row.faction_name, None);
}

// ─── Wrestlers ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_wrestler_round_trips_fields() {
  let s = store().await;
  let (show, kind, class) = seed_references(&s).await;
  let faction = s
    .create_reference(ReferenceKind::Faction, "The Bloodline".into())
    .await
    .unwrap();

  let input = NewWrestler {
    name:            "Roman".into(),
    brand_id:        show,
    faction_id:      Some(faction),
    type_id:         kind,
    weight_class_id: class,
    alignment:       Alignment::Heel,
    is_champion:     true,
    is_in_faction:   true,
  };
  let id = s.create_wrestler(input.clone()).await.unwrap();

  let row = s.get_wrestler(id).await.unwrap().expect("wrestler");
  assert_eq!(row.wrestler, input.with_id(id));
  assert_eq!(row.brand_name.as_deref(), Some("RAW"));
  assert_eq!(row.faction_name.as_deref(), Some("The Bloodline"));
  assert_eq!(row.type_name.as_deref(), Some("Powerhouse"));
  assert_eq!(row.weight_class_name.as_deref(), Some("Heavyweight"));
}

#[tokio::test]
async fn get_wrestler_missing_returns_none() {
  let s = store().await;
  assert!(s.get_wrestler(99).await.unwrap().is_none());
}

#[tokio::test]
async fn list_wrestlers_orders_by_name() {
  let s = store().await;
  seed_references(&s).await;
  for name in ["Zed", "Adam", "Mia"] {
    seed_wrestler(&s, name).await;
  }

  let names: Vec<_> = s
    .list_wrestlers()
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.wrestler.name)
    .collect();
  assert_eq!(names, ["Adam", "Mia", "Zed"]);
}

#[tokio::test]
async fn create_wrestler_requires_existing_references() {
  let s = store().await;
  let (show, kind, class) = seed_references(&s).await;

  let err = s
    .create_wrestler(NewWrestler::new("Ghost", show + 100, kind, class))
    .await
    .unwrap_err();
  assert!(is_validation(&err), "{err}");

  let err = s
    .create_wrestler(NewWrestler::new("", show, kind, class))
    .await
    .unwrap_err();
  assert!(is_validation(&err), "{err}");

  assert!(s.list_wrestlers().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_wrestler_overwrites_every_field() {
  let s = store().await;
  let (show, kind, class) = seed_references(&s).await;
  let other_show = s
    .create_reference(ReferenceKind::Show, "SmackDown".into())
    .await
    .unwrap();
  let id = s
    .create_wrestler(NewWrestler::new("Test Wrestler", show, kind, class))
    .await
    .unwrap();

  let mut updated = NewWrestler::new("Renamed", other_show, kind, class).with_id(id);
  updated.alignment = Alignment::Tweener;
  updated.is_champion = true;
  assert_eq!(s.update_wrestler(updated.clone()).await.unwrap(), 1);

  let row = s.get_wrestler(id).await.unwrap().unwrap();
  assert_eq!(row.wrestler, updated);
  assert_eq!(row.brand_name.as_deref(), Some("SmackDown"));
}

#[tokio::test]
async fn update_unknown_wrestler_changes_nothing() {
  let s = store().await;
  let id = seed_wrestler(&s, "Test Wrestler").await;

  let ghost = NewWrestler::new("Ghost", 1, 1, 1).with_id(id + 1);
  assert_eq!(s.update_wrestler(ghost).await.unwrap(), 0);

  let rows = s.list_wrestlers().await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].wrestler.name, "Test Wrestler");
}

#[tokio::test]
async fn deleting_a_wrestler_vacates_held_titles() {
  let s = store().await;
  let id = seed_wrestler(&s, "Champ").await;
  let mut title = NewChampionship::new("Intercontinental Championship", 1);
  title.current_holder_id = Some(id);
  let title = s.create_championship(title).await.unwrap();

  assert_eq!(s.delete_wrestler(id).await.unwrap(), 1);
  assert!(s.get_wrestler(id).await.unwrap().is_none());

  let championship = s.get_championship(title).await.unwrap().unwrap();
  assert!(championship.is_vacant());
  assert_eq!(s.delete_wrestler(id).await.unwrap(), 0);
}

#[tokio::test]
async fn end_to_end_roster_scenario() {
  let s = store().await;
  let show = s
    .create_reference(ReferenceKind::Show, "RAW".into())
    .await
    .unwrap();
  let kind = s
    .create_reference(ReferenceKind::WrestlerType, "Powerhouse".into())
    .await
    .unwrap();
  let class = s
    .create_reference(ReferenceKind::WeightClass, "Heavyweight".into())
    .await
    .unwrap();
  assert_eq!((show, kind, class), (1, 1, 1));

  let wrestler = s
    .create_wrestler(NewWrestler::new("Test Wrestler", 1, 1, 1))
    .await
    .unwrap();

  let rows = s.list_wrestlers().await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].brand_name.as_deref(), Some("RAW"));
  assert_eq!(rows[0].wrestler.alignment, Alignment::Face);

  let err = s
    .delete_reference(ReferenceKind::WrestlerType, 1)
    .await
    .unwrap_err();
  assert_eq!(
    err.to_string(),
    "cannot delete wrestler type while wrestlers are using it"
  );

  s.delete_wrestler(wrestler).await.unwrap();
  assert_eq!(
    s.delete_reference(ReferenceKind::WrestlerType, 1).await.unwrap(),
    1
  );
}

// ─── Championships ───────────────────────────────────────────────────────────

#[tokio::test]
async fn championships_are_created_vacant_and_singles_by_default() {
  let s = store().await;
  let (show, ..) = seed_references(&s).await;
  let id = s
    .create_championship(NewChampionship::new("World Championship", show))
    .await
    .unwrap();

  let row = s.get_championship(id).await.unwrap().unwrap();
  assert_eq!(row.title_name, "World Championship");
  assert_eq!(row.show_name, "RAW");
  assert!(!row.is_tag_team);
  assert!(row.is_vacant());
  assert_eq!(row.holder_name, None);
}

#[tokio::test]
async fn championship_requires_an_existing_show() {
  let s = store().await;
  let err = s
    .create_championship(NewChampionship::new("Orphan Title", 5))
    .await
    .unwrap_err();
  assert!(is_validation(&err), "{err}");
}

#[tokio::test]
async fn championships_list_by_show_then_title() {
  let s = store().await;
  let raw = s
    .create_reference(ReferenceKind::Show, "RAW".into())
    .await
    .unwrap();
  let nxt = s
    .create_reference(ReferenceKind::Show, "NXT".into())
    .await
    .unwrap();
  s.create_championship(NewChampionship::new("World Championship", raw))
    .await
    .unwrap();
  s.create_championship(NewChampionship::new("Tag Team Championship", raw))
    .await
    .unwrap();
  s.create_championship(NewChampionship::new("NXT Championship", nxt))
    .await
    .unwrap();

  let order: Vec<_> = s
    .list_championships()
    .await
    .unwrap()
    .into_iter()
    .map(|c| (c.show_name, c.title_name))
    .collect();
  assert_eq!(
    order,
    [
      ("NXT".to_string(), "NXT Championship".to_string()),
      ("RAW".to_string(), "Tag Team Championship".to_string()),
      ("RAW".to_string(), "World Championship".to_string()),
    ]
  );
}

#[tokio::test]
async fn transfer_and_vacate_championship() {
  let s = store().await;
  let champ = seed_wrestler(&s, "Champ").await;
  let title = s
    .create_championship(NewChampionship::new("World Championship", 1))
    .await
    .unwrap();

  assert_eq!(
    s.transfer_championship_holder(title, Some(champ)).await.unwrap(),
    1
  );
  let row = s.get_championship(title).await.unwrap().unwrap();
  assert_eq!(row.current_holder_id, Some(champ));
  assert_eq!(row.holder_name.as_deref(), Some("Champ"));

  assert_eq!(s.transfer_championship_holder(title, None).await.unwrap(), 1);
  let listed = s.list_championships().await.unwrap();
  assert_eq!(listed[0].current_holder_id, None);
}

#[tokio::test]
async fn transfer_to_unknown_wrestler_is_rejected_by_the_store() {
  let s = store().await;
  let (show, ..) = seed_references(&s).await;
  let title = s
    .create_championship(NewChampionship::new("World Championship", show))
    .await
    .unwrap();

  let err = s
    .transfer_championship_holder(title, Some(404))
    .await
    .unwrap_err();
  assert!(is_validation(&err), "{err}");
  assert!(s.get_championship(title).await.unwrap().unwrap().is_vacant());
}

#[tokio::test]
async fn delete_championship_is_unconditional() {
  let s = store().await;
  let champ = seed_wrestler(&s, "Champ").await;
  let mut input = NewChampionship::new("World Championship", 1);
  input.current_holder_id = Some(champ);
  let title = s.create_championship(input).await.unwrap();

  assert_eq!(s.delete_championship(title).await.unwrap(), 1);
  assert!(s.get_championship(title).await.unwrap().is_none());
  assert_eq!(s.delete_championship(title).await.unwrap(), 0);
}

// ─── Match simulation ────────────────────────────────────────────────────────

#[tokio::test]
async fn simulated_title_match_records_the_winner() {
  let s = store().await;
  let a = seed_wrestler(&s, "Alpha").await;
  let b = seed_wrestler(&s, "Bravo").await;
  let title = s
    .create_championship(NewChampionship::new("World Championship", 1))
    .await
    .unwrap();

  let card = MatchCard::singles(Competitor::new(a, "Alpha"), Competitor::new(b, "Bravo"))
    .for_title(TitleStake {
      championship_id: title,
      title_name:      "World Championship".into(),
    });
  let mut rng = StdRng::seed_from_u64(5);
  let report = narrator::simulate(&s, &card, &mut rng).await.unwrap();

  let row = s.get_championship(title).await.unwrap().unwrap();
  assert_eq!(row.current_holder_id, Some(report.winners[0].id));
}

#[tokio::test]
async fn simulated_match_without_stake_leaves_titles_alone() {
  let s = store().await;
  let a = seed_wrestler(&s, "Alpha").await;
  let b = seed_wrestler(&s, "Bravo").await;
  let mut input = NewChampionship::new("World Championship", 1);
  input.current_holder_id = Some(a);
  let title = s.create_championship(input).await.unwrap();

  let card = MatchCard::singles(Competitor::new(a, "Alpha"), Competitor::new(b, "Bravo"));
  for seed in 0..10 {
    let mut rng = StdRng::seed_from_u64(seed);
    narrator::simulate(&s, &card, &mut rng).await.unwrap();
  }

  let row = s.get_championship(title).await.unwrap().unwrap();
  assert_eq!(row.current_holder_id, Some(a));
}

#[tokio::test]
async fn simulated_match_for_a_missing_title_is_not_found() {
  let s = store().await;
  let a = seed_wrestler(&s, "Alpha").await;
  let b = seed_wrestler(&s, "Bravo").await;

  let card = MatchCard::singles(Competitor::new(a, "Alpha"), Competitor::new(b, "Bravo"))
    .for_title(TitleStake {
      championship_id: 999,
      title_name:      "Ghost Title".into(),
    });
  let mut rng = StdRng::seed_from_u64(3);
  let err = narrator::simulate(&s, &card, &mut rng).await.unwrap_err();

  assert!(matches!(
    err,
    Error::Core(roster_core::Error::NotFound(ref what)) if what == "championship 999"
  ));
  assert!(s.list_championships().await.unwrap().is_empty());
}
