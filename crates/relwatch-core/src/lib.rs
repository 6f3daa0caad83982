//! Latest-release discovery for update checks.
//!
//! This crate holds the logic that is independent of the host application:
//! - Release payload resolution into a [`ReleaseInfo`] record.
//! - Tag normalization and dotted version parsing.
//! - Release-notes rendering into a bordered plain-text report.
//! - The fetch seam and its `reqwest` implementation.

mod changelog;
mod feed;
mod fetch;
mod release;
mod resolver;
mod update;
mod version;

/// Release-notes rendering.
pub use changelog::{format_changelog, render as render_changelog};
/// Release feed configuration.
pub use feed::{DEFAULT_ASSET_NAME, DEFAULT_ENDPOINT, ReleaseFeed};
/// Fetch seam and HTTP implementation.
pub use fetch::{FetchError, HttpFetcher, StringFetcher};
/// Resolved release record.
pub use release::ReleaseInfo;
/// Payload resolution strategies.
pub use resolver::{
    JsonStrategy, ReleaseResolver, ResolveError, ResolveStrategy, ScanStrategy, resolve_release,
};
/// Update check flow.
pub use update::{check_latest_release, latest_changelog, latest_download_url, latest_version};
/// Tag normalization and dotted versions.
pub use version::{MAX_COMPONENT, ReleaseVersion, VersionParseError, normalize_tag};
