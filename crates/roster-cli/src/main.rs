//! `roster`: wrestling roster store.
//!
//! # Usage
//!
//! ```text
//! roster                          # serve NDJSON requests on stdio
//! roster --database ~/roster.db serve
//! roster simulate 1 2 --title 3 --seed 7
//! ```
//!
//! Logs go to stderr; stdout carries bridge replies and match stories.

mod serve;
mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::{SeedableRng as _, rngs::StdRng};
use roster_store_sqlite::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::settings::{AppConfig, expand_tilde};

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Wrestling roster store")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "roster.toml")]
  config: PathBuf,

  /// Database path; overrides `database_path` from the config file.
  #[arg(long, value_name = "PATH")]
  database: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Answer JSON requests on stdin, one per line (the default).
  Serve,
  /// Simulate a match between stored wrestlers and print the story.
  Simulate {
    /// Two wrestler ids for singles, four for tag team (first two are a team).
    #[arg(required = true, num_args = 2..=4)]
    wrestlers: Vec<i64>,

    /// Championship at stake; the winner becomes its holder.
    #[arg(long, value_name = "ID")]
    title: Option<i64>,

    /// Seed for a reproducible match.
    #[arg(long)]
    seed: Option<u64>,
  },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  let mut cfg = AppConfig::load(&cli.config)?;
  if let Some(path) = &cli.database {
    cfg.database_path = expand_tilde(path);
  }

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::try_new(&cfg.log_filter)
        .with_context(|| format!("invalid log filter {:?}", cfg.log_filter))?,
    )
    .init();

  let store = SqliteStore::open(&cfg.database_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", cfg.database_path))?;

  match cli.command.unwrap_or(Command::Serve) {
    Command::Serve => serve::run(&store).await,
    Command::Simulate { wrestlers, title, seed } => {
      let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
      };
      let report =
        roster_bridge::matches::simulate(&store, &wrestlers, title, &mut rng)
          .await
          .context("match simulation failed")?;
      println!("{}", report.story());
      Ok(())
    }
  }
}
