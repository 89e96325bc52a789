//! Code snippet extraction for OCA source files.

use std::sync::LazyLock;

use regex::Regex;

/// Lines signalling ORM idioms, tried in order against each line.
static ORM_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"@api\.depends",
        r"def _compute",
        r"@api\.constrains",
        r"def create\(",
        r"def write\(",
        r"class.*\(models\.",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Default number of lines in a snippet.
pub const SNIPPET_LINES: usize = 2;

/// Pull a short excerpt from a source file.
///
/// Returns the first line matching an ORM pattern plus the lines after it, up
/// to `max_lines` in total. Without a match, falls back to the first
/// `max_lines` non-blank lines. Empty content yields an empty string.
pub fn extract_snippet(content: &str, max_lines: usize) -> String {
    if content.is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = content.split('\n').collect();

    for (i, line) in lines.iter().enumerate() {
        if ORM_PATTERNS.iter().any(|re| re.is_match(line)) {
            let end = (i + max_lines).min(lines.len());
            return lines[i..end].join("\n").trim().to_string();
        }
    }

    lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .take(max_lines)
        .collect::<Vec<_>>()
        .join("\n")
}
