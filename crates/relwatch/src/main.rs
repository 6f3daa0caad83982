mod cli;
mod logging;
mod report;
mod settings;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};
use relwatch_core::{HttpFetcher, check_latest_release};

use crate::cli::Cli;
use crate::settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.settings {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let (mut settings, load_error) = match loaded {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    cli.apply(&mut settings);

    logging::init_logging(settings.debug_logging, settings.max_log_size_bytes);
    if let Some(e) = load_error {
        warn!("{e}; using default settings");
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.http_timeout_secs))
        .user_agent(format!("relwatch/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            warn!("Failed to configure HTTP client, using defaults: {e}");
            reqwest::Client::default()
        });
    let fetcher = HttpFetcher::new(client);

    info!("Checking {}", settings.feed.endpoint);
    match check_latest_release(&fetcher, &settings.feed).await {
        Some(release) => {
            print!(
                "{}",
                report::render_report(&release, &settings.feed.asset_name, cli.raw)
            );
            ExitCode::SUCCESS
        }
        None => {
            eprintln!(
                "No release information available from {}",
                settings.feed.endpoint
            );
            ExitCode::FAILURE
        }
    }
}
