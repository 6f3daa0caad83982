use relwatch_core::ReleaseFeed;
use relwatch_platform::AppPaths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub feed: ReleaseFeed,

    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    #[serde(default)]
    pub debug_logging: bool,

    #[serde(default = "default_max_log_size_bytes")]
    pub max_log_size_bytes: u64,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not locate the settings directory: {0}")]
    Paths(#[from] relwatch_platform::AppPathsError),
    #[error("Failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn default_http_timeout() -> u64 {
    10
}

fn default_max_log_size_bytes() -> u64 {
    5 * 1024 * 1024
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            feed: ReleaseFeed::default(),
            http_timeout_secs: default_http_timeout(),
            debug_logging: false,
            max_log_size_bytes: default_max_log_size_bytes(),
        }
    }
}

impl Settings {
    /// Load settings from the platform settings file.
    ///
    /// # Errors
    /// Returns an error when the settings directory cannot be determined or
    /// the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, SettingsError> {
        let paths = AppPaths::new()?;
        Self::load_from(&paths.settings_file())
    }

    /// Load settings from `path`. A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or is not
    /// valid settings JSON.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relwatch_core::{DEFAULT_ASSET_NAME, DEFAULT_ENDPOINT};

    #[test]
    fn missing_file_gives_defaults() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let settings = Settings::load_from(&temp_dir.path().join("settings.json"))
            .expect("missing settings should not be an error");

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.feed.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.feed.asset_name, DEFAULT_ASSET_NAME);
        assert_eq!(settings.http_timeout_secs, 10);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let path = temp_dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"feed":{"asset_name":"tool-linux.tar.gz"},"debug_logging":true}"#,
        )
        .expect("settings file should be written");

        let settings = Settings::load_from(&path).expect("settings should parse");
        assert!(settings.debug_logging);
        assert_eq!(settings.feed.asset_name, "tool-linux.tar.gz");
        assert_eq!(settings.feed.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.max_log_size_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").expect("settings file should be written");

        let error = Settings::load_from(&path).expect_err("malformed settings should fail");
        assert!(matches!(error, SettingsError::Parse { .. }));
        assert!(error.to_string().contains("settings.json"));
    }
}
