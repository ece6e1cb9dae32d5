// qiita-contrib
// Rank Qiita users by a simplified contribution score

mod api;
mod cli;
mod error;
mod features;
mod models;
mod utils;

use std::env;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::qiita::QiitaClient;
use crate::cli::Cli;
use crate::features::report::build_report;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads QIITA_TOKEN / QIITA_API_URL
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "qiita_contrib=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let request = cli.report_request();

    // Build HTTP client for API calls
    let http_client = reqwest::Client::builder()
        .user_agent(concat!("qiita-contrib/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")?;
    let api = QiitaClient::new(http_client, &cli.base_url, &cli.token);

    info!(
        "Ranking {} users (window: {:?} .. {:?})",
        request.user_ids.len(),
        request.window.start,
        request.window.end
    );

    let ranked = build_report(&api, &request)
        .await
        .with_context(|| format!("Failed to build report {}", request.output.display()))?;

    if let Some(top) = ranked.first() {
        info!("Top contributor: {} ({})", top.user_id, top.contribution);
    }

    Ok(())
}
