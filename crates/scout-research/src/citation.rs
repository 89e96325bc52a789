//! Citation rendering.

use scout_core::ResearchItem;

use crate::heuristics::MODULE_DEV_APPLICATION;

pub const TAKEAWAY_PLACEHOLDER: &str = "Manual review required";
pub const SNIPPET_PLACEHOLDER: &str = "See link for details";

/// Render one citation block.
///
/// The quality score is recomputed from the item. Missing or empty takeaway
/// and snippet fall back to placeholders; an empty application list falls
/// back to `odoo-module-dev`. The block ends with a blank line.
#[must_use]
pub fn format_citation(
    item: &ResearchItem,
    snippet: Option<&str>,
    takeaway: Option<&str>,
    application: &[String],
    tags: &[String],
) -> String {
    let takeaway = takeaway
        .filter(|t| !t.is_empty())
        .unwrap_or(TAKEAWAY_PLACEHOLDER);
    let snippet = snippet.filter(|s| !s.is_empty()).unwrap_or(SNIPPET_PLACEHOLDER);
    let application = if application.is_empty() {
        MODULE_DEV_APPLICATION.to_string()
    } else {
        application.join(", ")
    };

    format!(
        "## {title}\n\
         \n\
         - **Link**: {url}\n\
         - **Date/Version**: {date}\n\
         - **Source Type**: {source}\n\
         - **Quality Score**: {score}\n\
         - **Takeaway**: {takeaway}\n\
         - **Snippet**: {snippet}\n\
         - **Application**: {application}\n\
         - **Tags**: {tags}\n\
         \n",
        title = item.title,
        url = item.url,
        date = item.created.format("%Y-%m-%d"),
        source = item.source_type.title_case(),
        score = item.quality_score(),
        tags = tags.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use scout_core::SourceType;

    fn reddit_item() -> ResearchItem {
        ResearchItem {
            upvotes: 12,
            ..ResearchItem::new(
                "Computed field cache",
                "https://www.reddit.com/r/odoo/comments/1/",
                SourceType::Reddit,
                Utc.with_ymd_and_hms(2025, 1, 1, 8, 30, 0).unwrap(),
            )
        }
    }

    #[test]
    fn renders_full_block() {
        let text = format_citation(
            &reddit_item(),
            Some("@api.depends('x')\ndef _compute_y(self):"),
            Some("Use stored fields..."),
            &["odoo-module-dev".to_string()],
            &["computed-field".to_string(), "reddit".to_string()],
        );

        assert_eq!(
            text,
            "## Computed field cache\n\
             \n\
             - **Link**: https://www.reddit.com/r/odoo/comments/1/\n\
             - **Date/Version**: 2025-01-01\n\
             - **Source Type**: Reddit\n\
             - **Quality Score**: 95\n\
             - **Takeaway**: Use stored fields...\n\
             - **Snippet**: @api.depends('x')\ndef _compute_y(self):\n\
             - **Application**: odoo-module-dev\n\
             - **Tags**: computed-field, reddit\n\
             \n"
        );
    }

    #[test]
    fn missing_fields_use_placeholders() {
        let text = format_citation(&reddit_item(), None, None, &[], &[]);
        assert!(text.contains("- **Takeaway**: Manual review required\n"));
        assert!(text.contains("- **Snippet**: See link for details\n"));
        assert!(text.contains("- **Application**: odoo-module-dev\n"));
        assert!(text.contains("- **Tags**: \n"));
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let text = format_citation(&reddit_item(), Some(""), Some(""), &[], &[]);
        assert!(text.contains("Manual review required"));
        assert!(text.contains("See link for details"));
    }

    #[test]
    fn source_type_is_title_cased() {
        let mut item = reddit_item();
        item.source_type = SourceType::StackOverflow;
        let text = format_citation(&item, None, None, &[], &[]);
        assert!(text.contains("- **Source Type**: Stackoverflow\n"));
    }
}
