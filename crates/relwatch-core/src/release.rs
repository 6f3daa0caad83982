use crate::changelog::format_changelog;
use crate::version::ReleaseVersion;

/// The latest published release as seen by one update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    tag_name: String,
    version: Option<ReleaseVersion>,
    download_url: Option<String>,
    release_page_url: Option<String>,
    changelog_raw: Option<String>,
    changelog_formatted: Option<String>,
}

impl ReleaseInfo {
    /// Build a record from the extracted fields. The version and the
    /// formatted changelog are derived here and never set independently.
    #[must_use]
    pub fn new(
        tag_name: impl Into<String>,
        download_url: Option<String>,
        changelog_raw: Option<String>,
    ) -> Self {
        let tag_name = tag_name.into();
        let version = ReleaseVersion::from_tag(&tag_name);
        let changelog_formatted = changelog_raw
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| format_changelog(Some(raw)));

        Self {
            tag_name,
            version,
            download_url,
            release_page_url: None,
            changelog_raw,
            changelog_formatted,
        }
    }

    #[must_use]
    pub fn with_release_page_url(mut self, url: Option<String>) -> Self {
        self.release_page_url = url;
        self
    }

    /// The tag exactly as published, e.g. `v1.2.3-beta`.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// `None` means the tag was found but is not a comparable version.
    #[must_use]
    pub fn version(&self) -> Option<ReleaseVersion> {
        self.version
    }

    #[must_use]
    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    #[must_use]
    pub fn release_page_url(&self) -> Option<&str> {
        self.release_page_url.as_deref()
    }

    #[must_use]
    pub fn changelog_raw(&self) -> Option<&str> {
        self.changelog_raw.as_deref()
    }

    #[must_use]
    pub fn changelog_formatted(&self) -> Option<&str> {
        self.changelog_formatted.as_deref()
    }
}
