use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR_NAME: &str = "relwatch";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppPathsError {
    #[error("Could not determine home directory")]
    HomeDirUnavailable,
    #[error("Could not determine config directory")]
    ConfigDirUnavailable,
    #[error("Could not determine data directory")]
    DataDirUnavailable,
}

/// Per-user locations for settings and the debug log.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl AppPaths {
    /// Build application paths for the current platform.
    ///
    /// # Errors
    /// Returns an error when a required base directory (the user home, config
    /// or data directory) cannot be determined.
    pub fn new() -> Result<Self, AppPathsError> {
        #[cfg(target_os = "macos")]
        {
            let support = dirs::home_dir()
                .ok_or(AppPathsError::HomeDirUnavailable)?
                .join("Library/Application Support");
            Ok(Self::from_bases(&support, &support))
        }

        #[cfg(not(target_os = "macos"))]
        {
            let config_base = dirs::config_dir().ok_or(AppPathsError::ConfigDirUnavailable)?;
            let data_base = dirs::data_dir().ok_or(AppPathsError::DataDirUnavailable)?;
            Ok(Self::from_bases(&config_base, &data_base))
        }
    }

    /// Place the relwatch directories under the given base directories.
    #[must_use]
    pub fn from_bases(config_base: &Path, data_base: &Path) -> Self {
        Self {
            config_dir: config_base.join(APP_DIR_NAME),
            data_dir: data_base.join(APP_DIR_NAME),
        }
    }

    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("debug.log")
    }

    /// Ensure the config and data directories exist on disk.
    ///
    /// # Errors
    /// Returns an error if either directory cannot be created.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}
