//! Turning a release payload into a [`ReleaseInfo`].
//!
//! Payloads are tried against each [`ResolveStrategy`] in order. A strategy
//! that does not recognise the payload hands it on to the next one; a
//! strategy that recognises it but finds no tag ends resolution.

mod json;
mod scan;

use log::debug;
use thiserror::Error;

pub use json::JsonStrategy;
pub use scan::ScanStrategy;

use crate::feed::ReleaseFeed;
use crate::release::ReleaseInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("payload is not in a shape this strategy understands")]
    Unrecognized,
    #[error("release record has no tag")]
    MissingTag,
}

pub trait ResolveStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Extract a release record from `payload`.
    ///
    /// # Errors
    /// Returns [`ResolveError::Unrecognized`] when the payload cannot be read
    /// by this strategy and [`ResolveError::MissingTag`] when it can but holds
    /// no tag.
    fn resolve(&self, payload: &str, feed: &ReleaseFeed) -> Result<ReleaseInfo, ResolveError>;
}

pub struct ReleaseResolver {
    feed: ReleaseFeed,
    strategies: Vec<Box<dyn ResolveStrategy>>,
}

impl ReleaseResolver {
    /// Structured JSON first, raw text scan as fallback.
    #[must_use]
    pub fn new(feed: ReleaseFeed) -> Self {
        let strategies: Vec<Box<dyn ResolveStrategy>> =
            vec![Box::new(JsonStrategy), Box::new(ScanStrategy)];
        Self::with_strategies(feed, strategies)
    }

    #[must_use]
    pub fn with_strategies(feed: ReleaseFeed, strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
        Self { feed, strategies }
    }

    #[must_use]
    pub fn feed(&self) -> &ReleaseFeed {
        &self.feed
    }

    #[must_use]
    pub fn resolve(&self, payload: &str) -> Option<ReleaseInfo> {
        if payload.trim().is_empty() {
            debug!("Release payload is empty");
            return None;
        }

        for strategy in &self.strategies {
            match strategy.resolve(payload, &self.feed) {
                Ok(info) => {
                    debug!(
                        "Resolved release {} with {} strategy",
                        info.tag_name(),
                        strategy.name()
                    );
                    if info.version().is_none() {
                        debug!("Tag {} is not a dotted version", info.tag_name());
                    }
                    if info.download_url().is_none() {
                        debug!("No asset named {} in release", self.feed.asset_name);
                    }
                    return Some(info);
                }
                Err(ResolveError::Unrecognized) => {
                    debug!("{} strategy did not recognise the payload", strategy.name());
                }
                Err(ResolveError::MissingTag) => {
                    debug!("{} strategy found no release tag", strategy.name());
                    return None;
                }
            }
        }

        None
    }
}

/// Resolve `payload` with the default strategies for `feed`.
#[must_use]
pub fn resolve_release(payload: &str, feed: &ReleaseFeed) -> Option<ReleaseInfo> {
    ReleaseResolver::new(feed.clone()).resolve(payload)
}
