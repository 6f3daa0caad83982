use serde::Deserialize;
use serde_json::Value;

use super::{ResolveError, ResolveStrategy};
use crate::feed::ReleaseFeed;
use crate::release::ReleaseInfo;

#[derive(Debug, Deserialize)]
struct GitHubRelease {
    #[serde(default)]
    tag_name: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    assets: Option<Vec<Value>>,
}

// Asset entries without a string `name` or `browser_download_url` are skipped.
fn asset_field<'a>(asset: &'a Value, key: &str) -> Option<&'a str> {
    asset.get(key).and_then(Value::as_str)
}

/// Reads the payload as a GitHub release object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStrategy;

impl ResolveStrategy for JsonStrategy {
    fn name(&self) -> &'static str {
        "json"
    }

    fn resolve(&self, payload: &str, feed: &ReleaseFeed) -> Result<ReleaseInfo, ResolveError> {
        let document: Value =
            serde_json::from_str(payload).map_err(|_| ResolveError::Unrecognized)?;
        if !document.is_object() {
            return Err(ResolveError::MissingTag);
        }
        let release: GitHubRelease =
            serde_json::from_value(document).map_err(|_| ResolveError::MissingTag)?;
        let tag_name = release.tag_name.ok_or(ResolveError::MissingTag)?;

        let download_url = release
            .assets
            .unwrap_or_default()
            .iter()
            .find(|asset| asset_field(asset, "name") == Some(feed.asset_name.as_str()))
            .and_then(|asset| asset_field(asset, "browser_download_url"))
            .map(str::to_string);

        Ok(ReleaseInfo::new(tag_name, download_url, release.body)
            .with_release_page_url(release.html_url))
    }
}
