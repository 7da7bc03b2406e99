use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use knowyourmsp::api::client::DEFAULT_BASE_URL;
use knowyourmsp::{Directive, IntentRequest, MspApiClient, Session, SkillEngine};

/// Line-oriented driver standing in for the voice platform: one JSON intent
/// request per stdin line, one JSON directive per stdout line. A Tell ends
/// the conversation and a fresh session begins.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base_url =
        std::env::var("MSP_API_BASE").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    info!(%base_url, "knowyourmsp skill starting");

    let engine = SkillEngine::new(Arc::new(MspApiClient::new(base_url)))?;
    let mut session = Session::new();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        let request: IntentRequest = match serde_json::from_str(&line) {
            Ok(request) => request,
            Err(error) => {
                eprintln!("unreadable request: {error}");
                continue;
            }
        };

        let directive = engine.handle_request(&mut session, &request).await;
        println!("{}", serde_json::to_string(&directive)?);

        if !matches!(directive, Directive::Ask { .. }) {
            info!(session = %session.id, "session ended");
            session = Session::new();
        }
    }

    Ok(())
}
