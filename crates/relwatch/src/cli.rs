use clap::Parser;
use std::path::PathBuf;

use crate::settings::Settings;

#[derive(Debug, Parser)]
#[command(
    name = "relwatch",
    version,
    about = "Check the latest published release and show what changed"
)]
pub struct Cli {
    /// Release metadata endpoint to query
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Name of the release asset to link
    #[arg(long)]
    pub asset: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Print the release notes as published instead of the formatted report
    #[arg(long)]
    pub raw: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(endpoint) = &self.endpoint {
            settings.feed.endpoint.clone_from(endpoint);
        }
        if let Some(asset) = &self.asset {
            settings.feed.asset_name.clone_from(asset);
        }
        if let Some(timeout) = self.timeout {
            settings.http_timeout_secs = timeout;
        }
        if self.debug {
            settings.debug_logging = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings() {
        let cli = Cli::parse_from([
            "relwatch",
            "--endpoint",
            "http://feed/latest",
            "--asset",
            "tool.exe",
            "--timeout",
            "3",
            "--debug",
        ]);
        let mut settings = Settings::default();
        cli.apply(&mut settings);

        assert_eq!(settings.feed.endpoint, "http://feed/latest");
        assert_eq!(settings.feed.asset_name, "tool.exe");
        assert_eq!(settings.http_timeout_secs, 3);
        assert!(settings.debug_logging);
    }

    #[test]
    fn absent_flags_leave_settings_alone() {
        let cli = Cli::parse_from(["relwatch", "--raw"]);
        let mut settings = Settings {
            debug_logging: true,
            ..Settings::default()
        };
        cli.apply(&mut settings);

        assert!(cli.raw);
        assert!(settings.debug_logging);
        assert_eq!(settings.feed, relwatch_core::ReleaseFeed::default());
    }
}
