//! Claudius terminal chat client
//!
//! Talks to a running relay (`CLAUDIUS_URL`). Logs go to a file because the
//! terminal belongs to the UI.

use claudius::runtime::{ClientConfig, HttpRelayClient};
use claudius::tui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_path = std::env::var("CLAUDIUS_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("claudius-chat.log"));
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "claudius=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    let config = ClientConfig::from_env();
    let client = Arc::new(HttpRelayClient::new(&config)?);
    tracing::info!(endpoint = %client.endpoint(), log = %log_path.display(), "Starting chat client");

    let mut terminal = ratatui::init();
    let result = tui::run(&mut terminal, client).await;
    ratatui::restore();

    result?;
    Ok(())
}
