//! Plain-text rendering of release notes.
//!
//! Release bodies are loosely structured markdown. Rendering recognises
//! `#`/`##` headers, `-`/`*` bullets and numbered items, and indents all
//! other text into a fixed-width, bordered report.

use std::fmt::Write as _;

const FULL_WIDTH: usize = 60;
const SECTION_WIDTH: usize = 40;
const TITLE: &str = "RELEASE NOTES";
const INDENT: &str = "  ";
const BULLET: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    Blank,
    Section(&'a str),
    Subsection(&'a str),
    Bullet(&'a str),
    Numbered(&'a str),
    Text(&'a str),
}

/// Format a raw changelog for display.
///
/// `None` stays `None` and blank input is returned unchanged.
#[must_use]
pub fn format_changelog(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return Some(raw.to_string());
    }
    Some(render(raw))
}

/// Render non-blank release notes into the bordered report.
#[must_use]
pub fn render(raw: &str) -> String {
    let full_border = "=".repeat(FULL_WIDTH);
    let section_border = "-".repeat(SECTION_WIDTH);
    let title_pad = " ".repeat(FULL_WIDTH.saturating_sub(TITLE.len()) / 2);

    let mut out = String::with_capacity(raw.len() * 2);
    push_line(&mut out, &full_border);
    push_line(&mut out, &format!("{title_pad}{TITLE}"));
    push_line(&mut out, &full_border);
    push_line(&mut out, "");

    for line in raw.split(['\r', '\n']).filter(|l| !l.is_empty()) {
        match classify(line.trim()) {
            LineKind::Blank => push_line(&mut out, ""),
            LineKind::Section(title) => push_header(&mut out, title, &full_border),
            LineKind::Subsection(title) => push_header(&mut out, title, &section_border),
            LineKind::Bullet(item) => push_line(&mut out, &format!("{INDENT}{BULLET} {item}")),
            LineKind::Numbered(text) | LineKind::Text(text) => {
                push_line(&mut out, &format!("{INDENT}{text}"));
            }
        }
    }

    push_line(&mut out, "");
    push_line(&mut out, &full_border);
    out
}

fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        LineKind::Blank
    } else if let Some(rest) = line.strip_prefix("## ") {
        LineKind::Subsection(rest)
    } else if let Some(rest) = line.strip_prefix("# ") {
        LineKind::Section(rest)
    } else if let Some(rest) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
    {
        LineKind::Bullet(rest)
    } else if is_numbered(line) {
        LineKind::Numbered(line)
    } else {
        LineKind::Text(line)
    }
}

// Only the characters at offsets 1 and 2 are inspected for the dot.
fn is_numbered(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
        && line.chars().count() > 2
        && line.chars().skip(1).take(2).any(|c| c == '.')
}

fn push_header(out: &mut String, title: &str, border: &str) {
    push_line(out, "");
    push_line(out, border);
    push_line(out, &format!("{INDENT}{}", title.to_uppercase()));
    push_line(out, border);
    push_line(out, "");
}

fn push_line(out: &mut String, line: &str) {
    let _ = writeln!(out, "{line}");
}
