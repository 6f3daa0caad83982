use crate::feed::ReleaseFeed;
use crate::fetch::StringFetcher;
use crate::release::ReleaseInfo;
use crate::resolver::ReleaseResolver;
use crate::version::ReleaseVersion;

/// Fetch the feed's endpoint once and resolve the latest release.
///
/// Returns `None` when the fetch fails or the payload holds no release tag.
pub async fn check_latest_release<F>(fetcher: &F, feed: &ReleaseFeed) -> Option<ReleaseInfo>
where
    F: StringFetcher + ?Sized,
{
    let payload = fetcher.fetch(&feed.endpoint).await?;
    ReleaseResolver::new(feed.clone()).resolve(&payload)
}

pub async fn latest_version<F>(fetcher: &F, feed: &ReleaseFeed) -> Option<ReleaseVersion>
where
    F: StringFetcher + ?Sized,
{
    check_latest_release(fetcher, feed).await?.version()
}

pub async fn latest_download_url<F>(fetcher: &F, feed: &ReleaseFeed) -> Option<String>
where
    F: StringFetcher + ?Sized,
{
    check_latest_release(fetcher, feed)
        .await?
        .download_url()
        .map(str::to_string)
}

pub async fn latest_changelog<F>(fetcher: &F, feed: &ReleaseFeed) -> Option<String>
where
    F: StringFetcher + ?Sized,
{
    check_latest_release(fetcher, feed)
        .await?
        .changelog_raw()
        .map(str::to_string)
}
