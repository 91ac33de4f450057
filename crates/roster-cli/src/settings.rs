//! Application configuration.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Settings read from the optional TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  /// Path to the SQLite database. A leading `~/` is expanded.
  pub database_path: PathBuf,
  /// `tracing` filter directives, e.g. `info` or `roster_store_sqlite=debug`.
  pub log_filter:    String,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      database_path: PathBuf::from("roster.db"),
      log_filter:    "info".to_string(),
    }
  }
}

impl AppConfig {
  /// Read `path` if it exists; missing keys fall back to defaults.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .build()
      .with_context(|| format!("failed to read config file {path:?}"))?;

    let mut cfg: Self = settings
      .try_deserialize()
      .context("failed to deserialise AppConfig")?;
    cfg.database_path = expand_tilde(&cfg.database_path);
    Ok(cfg)
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
