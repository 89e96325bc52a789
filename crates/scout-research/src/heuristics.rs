//! Takeaway, tag and application derivation.
//!
//! All three are substring scans over fixed, ordered tables so the output is
//! deterministic for a given item.

use scout_core::{ResearchItem, SourceType};

/// Characters of preview text kept in a takeaway.
pub const TAKEAWAY_CHARS: usize = 100;

/// Title keyword → tag, evaluated in order.
pub const TAG_KEYWORDS: &[(&str, &str)] = &[
    ("computed", "computed-field"),
    ("api.depends", "api-depends"),
    ("record rule", "record-rules"),
    ("security", "security"),
    ("performance", "performance"),
    ("docker", "docker"),
    ("wkhtmltopdf", "wkhtmltopdf"),
    ("test", "testing"),
    ("migration", "migration"),
    ("orm", "orm"),
];

pub const MODULE_DEV_APPLICATION: &str = "odoo-module-dev";
pub const DOCKER_APPLICATION: &str = "odoo-docker-claude";

/// Application area → title keywords that select it, evaluated in order.
pub const APPLICATION_KEYWORDS: &[(&str, &[&str])] = &[
    (
        MODULE_DEV_APPLICATION,
        &["orm", "model", "computed", "api", "security"],
    ),
    (DOCKER_APPLICATION, &["docker", "container", "wkhtmltopdf"]),
];

/// One-line summary of what the item offers.
#[must_use]
pub fn takeaway(item: &ResearchItem) -> String {
    let preview = item.preview.as_deref().filter(|p| !p.is_empty());
    match item.source_type {
        SourceType::Oca => format!(
            "OCA pattern from {} - review code for implementation details",
            item.repo.as_deref().unwrap_or("repository")
        ),
        SourceType::Reddit => preview.map_or_else(
            || "Community solution - see discussion for details".to_string(),
            truncated,
        ),
        SourceType::StackOverflow => preview.map_or_else(
            || format!("{} upvotes - see answer for solution", item.upvotes),
            truncated,
        ),
        SourceType::Forum | SourceType::Official => "Manual review required".to_string(),
    }
}

fn truncated(text: &str) -> String {
    let head: String = text.chars().take(TAKEAWAY_CHARS).collect();
    format!("{head}...")
}

/// Tags from title keywords, followed by the source type.
#[must_use]
pub fn tags(item: &ResearchItem) -> Vec<String> {
    let title = item.title.to_lowercase();
    TAG_KEYWORDS
        .iter()
        .filter(|(keyword, _)| title.contains(keyword))
        .map(|(_, tag)| (*tag).to_string())
        .chain(std::iter::once(item.source_type.as_str().to_string()))
        .collect()
}

/// Which skill areas the item applies to. Never empty.
#[must_use]
pub fn applications(item: &ResearchItem) -> Vec<String> {
    let title = item.title.to_lowercase();
    let matched: Vec<String> = APPLICATION_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| title.contains(k)))
        .map(|(application, _)| (*application).to_string())
        .collect();

    if matched.is_empty() {
        vec![MODULE_DEV_APPLICATION.to_string()]
    } else {
        matched
    }
}
