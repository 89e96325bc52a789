//! The normalized record every crawler produces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::SourceType;
use crate::quality;

/// One search hit, normalized across sources. Lives only for the duration of
/// a run; the persisted form is the rendered citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchItem {
    pub title: String,
    pub url: String,
    pub source_type: SourceType,
    /// Publish date at the source. GitHub code search has none, so those
    /// items carry the crawl time.
    pub created: DateTime<Utc>,
    /// Source-specific vote count, 0 where the source has no votes.
    #[serde(default)]
    pub upvotes: u32,
    /// Stack Overflow "has an accepted answer".
    #[serde(default)]
    pub accepted: bool,
    /// Short code excerpt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Leading text of the post or question body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    /// `owner/name` of the repository holding the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// File path inside [`Self::repo`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ResearchItem {
    /// Minimal item with every optional signal empty.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        source_type: SourceType,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            source_type,
            created,
            upvotes: 0,
            accepted: false,
            snippet: None,
            preview: None,
            repo: None,
            path: None,
        }
    }

    /// OCA-sourced content earns the alignment bonus.
    #[must_use]
    pub fn is_oca_aligned(&self) -> bool {
        self.source_type == SourceType::Oca
    }

    #[must_use]
    pub fn quality_score(&self) -> i32 {
        quality::score(
            self.source_type,
            self.created,
            self.upvotes,
            self.accepted,
            self.is_oca_aligned(),
        )
    }

    #[must_use]
    pub fn is_acceptable(&self) -> bool {
        quality::is_acceptable(self.quality_score())
    }
}
