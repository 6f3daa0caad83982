use super::{ResolveError, ResolveStrategy};
use crate::feed::ReleaseFeed;
use crate::release::ReleaseInfo;

/// Pulls fields straight out of the payload text.
///
/// Used for truncated or otherwise malformed payloads that still contain
/// the tag. Values are read up to the first unescaped quote; a value with no
/// closing quote is treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanStrategy;

impl ResolveStrategy for ScanStrategy {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn resolve(&self, payload: &str, feed: &ReleaseFeed) -> Result<ReleaseInfo, ResolveError> {
        let (tag, _) = string_field(payload, "tag_name", 0).ok_or(ResolveError::MissingTag)?;
        let download_url = asset_url(payload, &feed.asset_name);
        let body = string_field(payload, "body", 0).map(|(raw, _)| unescape(raw));
        let html_url = string_field(payload, "html_url", 0).map(|(raw, _)| unescape(raw));

        Ok(ReleaseInfo::new(unescape(tag), download_url, body).with_release_page_url(html_url))
    }
}

fn asset_url(payload: &str, asset_name: &str) -> Option<String> {
    let mut from = 0;
    while let Some((name, end)) = string_field(payload, "name", from) {
        if unescape(name) == asset_name {
            return string_field(payload, "browser_download_url", end).map(|(url, _)| unescape(url));
        }
        from = end;
    }
    None
}

/// Find the first `"key": "value"` at or after `from` and return the still
/// escaped value together with the offset just past its closing quote.
fn string_field<'a>(payload: &'a str, key: &str, from: usize) -> Option<(&'a str, usize)> {
    let needle = format!("\"{key}\"");
    let mut search_from = from;
    while let Some(found) = payload.get(search_from..)?.find(&needle) {
        let after_key = search_from + found + needle.len();
        if let Some((value_start, value)) = string_after_colon(payload, after_key) {
            return Some((value, value_start + value.len() + 1));
        }
        search_from = after_key;
    }
    None
}

fn string_after_colon(payload: &str, at: usize) -> Option<(usize, &str)> {
    let rest = payload.get(at..)?;
    let rest = rest.trim_start().strip_prefix(':')?.trim_start().strip_prefix('"')?;
    let value_start = payload.len() - rest.len();

    let mut escaped = false;
    for (idx, ch) in rest.char_indices() {
        match ch {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return Some((value_start, &rest[..idx])),
            _ => escaped = false,
        }
    }
    None
}

/// Decode JSON string escapes with one ordered pass per sequence.
fn unescape(raw: &str) -> String {
    raw.replace("\\n", "\n")
        .replace("\\r", "\r")
        .replace("\\t", "\t")
        .replace("\\\"", "\"")
        .replace("\\/", "/")
        .replace("\\\\", "\\")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::ReleaseVersion;

    fn feed() -> ReleaseFeed {
        ReleaseFeed::new("https://example.invalid/latest", "PKHeX.exe")
    }

    #[test]
    fn reads_fields_from_truncated_payload() {
        let payload = concat!(
            r#"{"url":"https://api/x","tag_name":"v3.1.0","assets":["#,
            r#"{"name":"PKHeX.zip","browser_download_url":"http://d/PKHeX.zip"},"#,
            r#"{"name":"PKHeX.exe","browser_download_url":"http://d/PKHeX.exe"}],"#,
            r###""body":"## Fixes\r\n- Fixed \"X\"","created_at":"2024-"###
        );

        let info = ScanStrategy.resolve(payload, &feed()).expect("tag is present");
        assert_eq!(info.tag_name(), "v3.1.0");
        assert_eq!(info.version(), Some(ReleaseVersion::new(3, 1, 0)));
        assert_eq!(info.download_url(), Some("http://d/PKHeX.exe"));
        assert_eq!(info.changelog_raw(), Some("## Fixes\r\n- Fixed \"X\""));
    }

    #[test]
    fn tolerates_whitespace_around_colon() {
        let payload = "{ \"tag_name\" : \"v1.0.1\",\n \"body\":\n\"text\"";

        let info = ScanStrategy.resolve(payload, &feed()).expect("tag is present");
        assert_eq!(info.tag_name(), "v1.0.1");
        assert_eq!(info.changelog_raw(), Some("text"));
    }

    #[test]
    fn missing_tag_or_unterminated_tag_is_missing() {
        assert_eq!(
            ScanStrategy.resolve(r#"{"body":"x"}"#, &feed()),
            Err(ResolveError::MissingTag)
        );
        assert_eq!(
            ScanStrategy.resolve(r#"{"tag_name":"v1.0"#, &feed()),
            Err(ResolveError::MissingTag)
        );
        assert_eq!(
            ScanStrategy.resolve(r#"{"tag_name":12}"#, &feed()),
            Err(ResolveError::MissingTag)
        );
    }

    #[test]
    fn escaped_key_inside_a_value_is_skipped() {
        let payload = r#"{"body":"see \"tag_name\" docs","tag_name":"v2.0"}"#;

        let info = ScanStrategy.resolve(payload, &feed()).expect("tag is present");
        assert_eq!(info.tag_name(), "v2.0");
    }

    #[test]
    fn asset_without_match_is_absent() {
        let payload = r#"{"tag_name":"v1.0","assets":[{"name":"other","browser_download_url":"u"}]}"#;

        let info = ScanStrategy.resolve(payload, &feed()).expect("tag is present");
        assert_eq!(info.download_url(), None);
    }

    #[test]
    fn unescape_applies_sequences_in_order_once() {
        assert_eq!(unescape(r"a\nb\tc"), "a\nb\tc");
        assert_eq!(unescape(r#"\"q\" \/ \\"#), "\"q\" / \\");
        assert_eq!(unescape(r"\\\\"), r"\\");
        assert_eq!(unescape(r"\\n"), "\\\n");
    }
}
