use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A dotted numeric version: `MAJOR.MINOR[.PATCH[.BUILD]]`.
///
/// Components that were not written compare lower than any written
/// component, so `1.2 < 1.2.0 < 1.2.0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReleaseVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
    pub build: Option<u32>,
}

/// Largest value a single component may hold (`i32::MAX`).
pub const MAX_COMPONENT: u32 = 2_147_483_647;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("expected 2 to 4 dot-separated components, found {found}")]
    ComponentCount { found: usize },
    #[error("invalid version component {component:?}")]
    InvalidComponent { component: String },
}

impl ReleaseVersion {
    #[must_use]
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch: Some(patch),
            build: None,
        }
    }

    /// Parse a release tag such as `v1.2.3-beta` into a comparable version.
    ///
    /// Returns `None` when the normalized tag is not a dotted numeric version.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        normalize_tag(tag).parse().ok()
    }
}

/// Strip one leading `v` and any `-qualifier` suffix from a release tag.
///
/// A `-` at the very start of the remaining string is kept.
#[must_use]
pub fn normalize_tag(tag: &str) -> &str {
    let stripped = tag.strip_prefix('v').unwrap_or(tag);
    match stripped.find('-') {
        Some(idx) if idx > 0 => &stripped[..idx],
        _ => stripped,
    }
}

fn parse_component(component: &str) -> Result<u32, VersionParseError> {
    let trimmed = component.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionParseError::InvalidComponent {
            component: component.to_string(),
        });
    }
    trimmed
        .parse::<u32>()
        .ok()
        .filter(|value| *value <= MAX_COMPONENT)
        .ok_or_else(|| VersionParseError::InvalidComponent {
            component: component.to_string(),
        })
}

impl FromStr for ReleaseVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if !(2..=4).contains(&parts.len()) {
            return Err(VersionParseError::ComponentCount { found: parts.len() });
        }

        let major = parse_component(parts[0])?;
        let minor = parse_component(parts[1])?;
        let patch = parts.get(2).copied().map(parse_component).transpose()?;
        let build = parts.get(3).copied().map(parse_component).transpose()?;

        Ok(Self {
            major,
            minor,
            patch,
            build,
        })
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(patch) = self.patch {
            write!(f, ".{patch}")?;
        }
        if let Some(build) = self.build {
            write!(f, ".{build}")?;
        }
        Ok(())
    }
}
