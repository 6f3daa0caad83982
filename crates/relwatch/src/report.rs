use std::fmt::Write as _;

use relwatch_core::ReleaseInfo;

/// Summary printed for a resolved release, followed by its notes.
pub fn render_report(info: &ReleaseInfo, asset_name: &str, raw_notes: bool) -> String {
    let mut out = String::new();

    match info.version() {
        Some(version) => {
            let _ = writeln!(out, "Latest release: {} (version {version})", info.tag_name());
        }
        None => {
            let _ = writeln!(
                out,
                "Latest release: {} (not a comparable version)",
                info.tag_name()
            );
        }
    }

    match info.download_url() {
        Some(url) => {
            let _ = writeln!(out, "Download: {url}");
        }
        None => {
            let _ = writeln!(out, "Download: no {asset_name} asset attached");
        }
    }

    if let Some(page) = info.release_page_url() {
        let _ = writeln!(out, "Release page: {page}");
    }

    let notes = if raw_notes {
        info.changelog_raw()
    } else {
        info.changelog_formatted()
    };
    if let Some(notes) = notes.filter(|notes| !notes.trim().is_empty()) {
        out.push('\n');
        out.push_str(notes);
        if !notes.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}
