//! Match simulation against stored wrestlers.
//!
//! Looks up every competitor and the championship (if any) before narrating,
//! so an unknown id is reported as `not_found` and nothing is recorded.

use rand::{Rng, SeedableRng as _, rngs::StdRng};
use roster_core::{
  narrator::{self, Competitor, MatchCard, MatchFormat, MatchReport, TitleStake},
  store::RosterStore,
};

use crate::{error::BridgeError, request::Response};

/// Resolve wrestler ids and an optional championship into a [`MatchCard`].
///
/// Fails with `not_found` for an unknown id and with `validation` for a bad
/// competitor count or a title whose format does not match the card.
pub async fn card_for<S>(
  store: &S,
  wrestler_ids: &[i64],
  championship_id: Option<i64>,
) -> Result<MatchCard, BridgeError>
where
  S: RosterStore,
{
  let mut competitors = Vec::with_capacity(wrestler_ids.len());
  for &id in wrestler_ids {
    let row = store
      .get_wrestler(id)
      .await
      .map_err(BridgeError::from_store)?
      .ok_or_else(|| roster_core::Error::NotFound(format!("wrestler {id}")))?;
    competitors.push(Competitor::new(row.wrestler.id, row.wrestler.name));
  }

  let card = MatchCard { competitors, stake: None };
  let format = card.format()?;

  let Some(id) = championship_id else {
    return Ok(card);
  };
  let title = store
    .get_championship(id)
    .await
    .map_err(BridgeError::from_store)?
    .ok_or_else(|| roster_core::Error::NotFound(format!("championship {id}")))?;

  if title.is_tag_team != (format == MatchFormat::TagTeam) {
    let needed = if title.is_tag_team { "a tag team" } else { "a singles" };
    return Err(
      roster_core::Error::validation(format!(
        "{} can only be defended in {needed} match",
        title.title_name
      ))
      .into(),
    );
  }

  Ok(card.for_title(TitleStake {
    championship_id: title.id,
    title_name:      title.title_name,
  }))
}

/// Narrate a match between stored wrestlers, recording any title change.
pub async fn simulate<S, R>(
  store: &S,
  wrestler_ids: &[i64],
  championship_id: Option<i64>,
  rng: &mut R,
) -> Result<MatchReport, BridgeError>
where
  S: RosterStore,
  S::Error: From<roster_core::Error>,
  R: Rng + Send,
{
  let card = card_for(store, wrestler_ids, championship_id).await?;
  let report = narrator::simulate(store, &card, rng)
    .await
    .map_err(BridgeError::from_store)?;

  let winner_ids: Vec<i64> = report.winners.iter().map(|c| c.id).collect();
  tracing::info!(
    rounds = report.rounds,
    winners = ?winner_ids,
    title_changed = report.title_change.is_some(),
    "simulated match"
  );
  Ok(report)
}

/// `simulateMatch`: like [`simulate`] with a freshly seeded generator.
pub async fn handle<S>(
  store: &S,
  wrestler_ids: Vec<i64>,
  championship_id: Option<i64>,
) -> Result<Response, BridgeError>
where
  S: RosterStore,
  S::Error: From<roster_core::Error>,
{
  let mut rng = StdRng::from_entropy();
  let report = simulate(store, &wrestler_ids, championship_id, &mut rng).await?;
  Ok(Response::Match(report))
}
