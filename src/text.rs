//! Text utilities shared by the preview renderer and the document generator.

use regex::Regex;
use std::sync::OnceLock;

/// Token used when slugification leaves nothing behind.
pub const FALLBACK_SLUG: &str = "event-blueprint";

/// Derive a URL/file-safe token from free text.
///
/// Lowercases, collapses every run of non-alphanumeric characters to a
/// single hyphen, and strips leading/trailing hyphens. An input with no
/// usable characters falls back to [`FALLBACK_SLUG`].
pub fn slugify(text: &str) -> String {
    static NON_ALNUM_REGEX: OnceLock<Regex> = OnceLock::new();
    let non_alnum = NON_ALNUM_REGEX.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap());

    let lowered = text.trim().to_lowercase();
    let collapsed = non_alnum.replace_all(&lowered, "-");
    let slug = collapsed.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Neutralize HTML metacharacters. Ampersand goes first so entities
/// introduced by the later replacements are not double-escaped.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Split multi-line text into sanitized `<li>` entries joined with newlines.
///
/// Handles both `\n` and `\r\n` endings, trims each line, and drops empty
/// lines. Empty input yields an empty string.
pub fn lines_to_list_items(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("<li>{}</li>", escape_html(line)))
        .collect::<Vec<_>>()
        .join("\n")
}
