//! Match narrator: procedural bout stories.
//!
//! [`narrate`] is a pure function of its inputs and the random draws it takes
//! from the supplied [`Rng`]. [`simulate`] narrates and then records the
//! title change (if a championship was at stake) through a [`RosterStore`].
//!
//! The outcome is drawn independently of the narrated moves: every side has
//! an equal chance of winning regardless of how the rounds went.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, store::RosterStore};

const MIN_ROUNDS: u32 = 4;
const MAX_ROUNDS: u32 = 8;

const MOVES: [&str; 10] = [
  "hits a devastating suplex",
  "connects with a powerful clothesline",
  "executes a perfect dropkick",
  "delivers a crushing bodyslam",
  "lands a high-flying elbow drop",
  "hits their signature move",
  "attempts their finisher",
  "reverses the momentum",
  "takes control of the match",
  "staggers their opponent",
];

const ENDINGS: [&str; 5] = [
  "pins their opponent for the three count!",
  "forces a submission with a devastating hold!",
  "hits their finisher for the victory!",
  "rolls up their opponent for the surprise win!",
  "secures the victory after an intense battle!",
];

// ─── Card ────────────────────────────────────────────────────────────────────

/// A wrestler taking part in a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
  pub id:   i64,
  pub name: String,
}

impl Competitor {
  pub fn new(id: i64, name: impl Into<String>) -> Self {
    Self { id, name: name.into() }
  }
}

/// The championship a match is contested for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleStake {
  pub championship_id: i64,
  pub title_name:      String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFormat {
  Singles,
  TagTeam,
}

/// Everything the narrator needs to tell a match.
///
/// Singles cards hold two competitors. Tag cards hold four: the first two
/// form one team, the last two the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCard {
  pub competitors: Vec<Competitor>,
  #[serde(default)]
  pub stake:       Option<TitleStake>,
}

impl MatchCard {
  pub fn singles(a: Competitor, b: Competitor) -> Self {
    Self { competitors: vec![a, b], stake: None }
  }

  pub fn tag_team(team_a: [Competitor; 2], team_b: [Competitor; 2]) -> Self {
    let [a1, a2] = team_a;
    let [b1, b2] = team_b;
    Self { competitors: vec![a1, a2, b1, b2], stake: None }
  }

  pub fn for_title(mut self, stake: TitleStake) -> Self {
    self.stake = Some(stake);
    self
  }

  /// The format implied by the competitor count. A wrestler may appear on
  /// the card only once.
  pub fn format(&self) -> Result<MatchFormat> {
    let format = match self.competitors.len() {
      2 => MatchFormat::Singles,
      4 => MatchFormat::TagTeam,
      n => {
        return Err(Error::validation(format!(
          "a match needs 2 or 4 competitors, got {n}"
        )));
      }
    };

    for (i, c) in self.competitors.iter().enumerate() {
      if self.competitors[..i].iter().any(|other| other.id == c.id) {
        return Err(Error::validation(format!(
          "{} cannot appear twice in one match",
          c.name
        )));
      }
    }
    Ok(format)
  }
}

// ─── Report ──────────────────────────────────────────────────────────────────

/// A championship that changed hands as the result of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleChange {
  pub championship_id: i64,
  pub title_name:      String,
  /// The wrestler recorded as holder. For tag titles this is the first
  /// member of the winning team.
  pub new_holder_id:   i64,
}

/// The narrated result of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
  pub format:       MatchFormat,
  pub rounds:       u32,
  /// The story, one line per entry.
  pub lines:        Vec<String>,
  /// One competitor for singles, both members of the winning team for tag.
  pub winners:      Vec<Competitor>,
  pub title_change: Option<TitleChange>,
}

impl MatchReport {
  /// The story joined with line breaks.
  pub fn story(&self) -> String { self.lines.join("\n") }
}

// ─── Narration ───────────────────────────────────────────────────────────────

fn pick<'a, R: Rng>(rng: &mut R, catalog: &[&'a str]) -> &'a str {
  catalog[rng.gen_range(0..catalog.len())]
}

/// Tell the story of a match and decide its winner.
///
/// Fails with [`Error::Validation`] unless the card holds exactly two or four
/// competitors. Nothing is written anywhere; see [`simulate`] for the variant
/// that records a title change.
pub fn narrate<R: Rng>(
  card: &MatchCard,
  rng: &mut R,
) -> Result<MatchReport> {
  let format = card.format()?;
  let c = &card.competitors;
  let rounds = rng.gen_range(MIN_ROUNDS..=MAX_ROUNDS);
  let mut lines = Vec::with_capacity(rounds as usize + 5);

  if let Some(stake) = &card.stake {
    lines.push(format!("This match is for the {}!", stake.title_name));
  }

  let winners: Vec<Competitor> = match format {
    MatchFormat::Singles => {
      lines.push(format!(
        "The bell rings and {} faces off against {}.",
        c[0].name, c[1].name
      ));

      for round in 0..rounds {
        let active = &c[(round % 2) as usize];
        lines.push(format!("{} {}.", active.name, pick(rng, &MOVES)));
      }

      let winner = &c[rng.gen_range(0..2)];
      lines.push(format!("{} {}", winner.name, pick(rng, &ENDINGS)));
      lines.push(format!("Winner: {}!", winner.name));
      vec![winner.clone()]
    }

    MatchFormat::TagTeam => {
      let teams = [[&c[0], &c[1]], [&c[2], &c[3]]];
      // Index of the legal competitor within each team.
      let mut legal = [0usize, 0usize];

      lines.push(format!(
        "The match begins with {} and {} in the ring.",
        c[0].name, c[2].name
      ));

      for round in 0..rounds {
        let side = (round % 2) as usize;
        let in_ring = teams[side][legal[side]];
        if rng.gen_bool(0.5) {
          let partner = teams[side][1 - legal[side]];
          lines.push(format!("{} tags in {}.", in_ring.name, partner.name));
          legal[side] = 1 - legal[side];
        } else {
          lines.push(format!("{} {}.", in_ring.name, pick(rng, &MOVES)));
        }
      }

      let team = teams[rng.gen_range(0..2)];
      let finisher = team[rng.gen_range(0..2)];
      lines.push(format!("{} {}", finisher.name, pick(rng, &ENDINGS)));
      lines.push(format!("Winners: {} and {}!", team[0].name, team[1].name));
      vec![team[0].clone(), team[1].clone()]
    }
  };

  let title_change = card.stake.as_ref().map(|stake| {
    let line = match winners.as_slice() {
      [winner] => {
        format!("{} is the new {} holder!", winner.name, stake.title_name)
      }
      _ => format!(
        "{} and {} are the new {} holders!",
        winners[0].name, winners[1].name, stake.title_name
      ),
    };
    lines.push(line);
    TitleChange {
      championship_id: stake.championship_id,
      title_name:      stake.title_name.clone(),
      new_holder_id:   winners[0].id,
    }
  });

  Ok(MatchReport { format, rounds, lines, winners, title_change })
}

/// Narrate a match and, if a title was at stake, transfer it to the winner.
///
/// Fails with [`Error::NotFound`] if the staked championship does not exist.
pub async fn simulate<S, R>(
  store: &S,
  card: &MatchCard,
  rng: &mut R,
) -> Result<MatchReport, S::Error>
where
  S: RosterStore,
  S::Error: From<Error>,
  R: Rng + Send,
{
  let report = narrate(card, rng)?;

  if let Some(change) = &report.title_change {
    let changed = store
      .transfer_championship_holder(
        change.championship_id,
        Some(change.new_holder_id),
      )
      .await?;
    if changed == 0 {
      return Err(
        Error::NotFound(format!("championship {}", change.championship_id))
          .into(),
      );
    }
  }

  Ok(report)
}
