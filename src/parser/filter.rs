use std::sync::LazyLock;

use regex::Regex;

// ToC listing: "ABC-01 - Some Title .... 42". A real in-body ID sits alone on
// its own line and has no trailing page number.
static TOC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,}-\d{2}\s+-\s+.*\d+$").unwrap());

/// Flatten per-page text into one stream of content lines, dropping headers,
/// footers, ToC listings, and blank lines. Surviving lines keep their
/// original (untrimmed) text; only classification looks at the trimmed form.
pub fn content_lines(pages: &[String]) -> Vec<String> {
    let mut lines = Vec::new();
    for page in pages {
        for line in page.lines() {
            if !is_noise_line(line.trim()) {
                lines.push(line.to_string());
            }
        }
    }
    lines
}

fn is_noise_line(trimmed: &str) -> bool {
    trimmed.is_empty()
        || trimmed.starts_with("CHAPTER")
        || trimmed.starts_with("Chapter")
        || trimmed.starts_with("Part ")
        || trimmed.starts_with("Federal Office for Information Security")
        || TOC_RE.is_match(trimmed)
}
