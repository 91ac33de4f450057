//! Newline-delimited JSON bridge over stdin/stdout.

use anyhow::Context as _;
use roster_store_sqlite::SqliteStore;
use tokio::io::{AsyncBufReadExt as _, AsyncWriteExt as _, BufReader};

/// Answer one reply line per request line until stdin closes.
pub async fn run(store: &SqliteStore) -> anyhow::Result<()> {
  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  let mut stdout = tokio::io::stdout();

  tracing::info!("serving requests on stdio");
  while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
    if line.trim().is_empty() {
      continue;
    }

    let reply = roster_bridge::handle_line(store, &line).await;
    stdout.write_all(reply.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await.context("failed to write reply")?;
  }

  tracing::info!("stdin closed; shutting down");
  Ok(())
}
