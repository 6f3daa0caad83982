use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str =
    "https://api.github.com/repos/NexusRisen/PKHeXth/releases/latest";
pub const DEFAULT_ASSET_NAME: &str = "PKHeX.exe";

/// Where to look for the latest release and which attached binary to pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseFeed {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_asset_name")]
    pub asset_name: String,
}

impl ReleaseFeed {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, asset_name: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            asset_name: asset_name.into(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_asset_name() -> String {
    DEFAULT_ASSET_NAME.to_string()
}

impl Default for ReleaseFeed {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            asset_name: default_asset_name(),
        }
    }
}
