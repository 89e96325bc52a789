//! Stack Overflow `[odoo]` question search via the Stack Exchange API.

use std::time::Duration;

use chrono::DateTime;
use scout_config::StackOverflowConfig;
use scout_core::{ResearchItem, SourceType};

use crate::{
    Crawler, PREVIEW_CHARS,
    error::SourceError,
    http::{build_client, check_response, preview, read_json},
};

const USER_AGENT: &str = "scout/0.1";

pub const TAG: &str = "odoo";

#[derive(serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<Question>,
}

#[derive(serde::Deserialize)]
struct Question {
    title: String,
    link: String,
    #[serde(default)]
    score: i64,
    creation_date: i64,
    #[serde(default)]
    is_answered: bool,
    #[serde(default)]
    body: Option<String>,
}

pub struct StackOverflowCrawler {
    http: reqwest::Client,
    base_url: String,
    min_upvotes: u32,
}

impl StackOverflowCrawler {
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &StackOverflowConfig, timeout: Duration) -> Result<Self, SourceError> {
        Ok(Self {
            http: build_client(USER_AGENT, timeout)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            min_upvotes: config.min_upvotes,
        })
    }

    #[must_use]
    pub const fn min_upvotes(&self) -> u32 {
        self.min_upvotes
    }
}

impl Crawler for StackOverflowCrawler {
    fn source_type(&self) -> SourceType {
        SourceType::StackOverflow
    }

    async fn try_search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ResearchItem>, SourceError> {
        let limit = limit.min(100);
        let url = format!(
            "{}/search/advanced?order=desc&sort=votes&tagged={TAG}&q={}&site=stackoverflow&pagesize={limit}&filter=withbody",
            self.base_url,
            urlencoding::encode(query)
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;

        let data: SearchResponse = read_json(resp).await?;
        Ok(into_items(data, self.min_upvotes))
    }
}

fn into_items(data: SearchResponse, min_upvotes: u32) -> Vec<ResearchItem> {
    data.items
        .into_iter()
        .filter_map(|q| {
            let upvotes = u32::try_from(q.score).unwrap_or(0);
            if upvotes < min_upvotes {
                return None;
            }
            let Some(created) = DateTime::from_timestamp(q.creation_date, 0) else {
                tracing::debug!(title = %q.title, "skipping question with invalid timestamp");
                return None;
            };
            Some(ResearchItem {
                upvotes,
                accepted: q.is_answered,
                preview: preview(q.body.as_deref(), PREVIEW_CHARS),
                ..ResearchItem::new(q.title, q.link, SourceType::StackOverflow, created)
            })
        })
        .collect()
}
