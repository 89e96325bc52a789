//! Reddit `r/odoo` search crawler.

use std::time::Duration;

use chrono::DateTime;
use scout_config::RedditConfig;
use scout_core::{ResearchItem, SourceType};

use crate::{
    Crawler, PREVIEW_CHARS,
    error::SourceError,
    http::{build_client, check_response, preview, read_json},
};

pub const SUBREDDIT: &str = "odoo";

#[derive(serde::Deserialize)]
struct Listing {
    #[serde(default)]
    data: ListingData,
}

#[derive(serde::Deserialize, Default)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
}

#[derive(serde::Deserialize)]
struct Child {
    data: Post,
}

#[derive(serde::Deserialize)]
struct Post {
    title: String,
    permalink: String,
    #[serde(default)]
    ups: i64,
    created_utc: f64,
    #[serde(default)]
    selftext: Option<String>,
}

pub struct RedditCrawler {
    http: reqwest::Client,
    base_url: String,
    min_upvotes: u32,
}

impl RedditCrawler {
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &RedditConfig, timeout: Duration) -> Result<Self, SourceError> {
        Ok(Self {
            http: build_client(&config.user_agent, timeout)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            min_upvotes: config.min_upvotes,
        })
    }

    #[must_use]
    pub const fn min_upvotes(&self) -> u32 {
        self.min_upvotes
    }
}

impl Crawler for RedditCrawler {
    fn source_type(&self) -> SourceType {
        SourceType::Reddit
    }

    async fn try_search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ResearchItem>, SourceError> {
        let limit = limit.min(100);
        let url = format!(
            "{}/r/{SUBREDDIT}/search.json?q={}&restrict_sr=on&sort=relevance&limit={limit}",
            self.base_url,
            urlencoding::encode(query)
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;

        let listing: Listing = read_json(resp).await?;
        Ok(into_items(listing, &self.base_url, self.min_upvotes))
    }
}

/// Map posts to items, skipping those under the upvote floor or carrying an
/// unrepresentable timestamp.
#[allow(clippy::cast_possible_truncation)]
fn into_items(listing: Listing, base_url: &str, min_upvotes: u32) -> Vec<ResearchItem> {
    listing
        .data
        .children
        .into_iter()
        .map(|child| child.data)
        .filter_map(|post| {
            let upvotes = u32::try_from(post.ups).unwrap_or(0);
            if upvotes < min_upvotes {
                return None;
            }
            let Some(created) = DateTime::from_timestamp(post.created_utc as i64, 0) else {
                tracing::debug!(title = %post.title, "skipping post with invalid timestamp");
                return None;
            };
            Some(ResearchItem {
                upvotes,
                preview: preview(post.selftext.as_deref(), PREVIEW_CHARS),
                ..ResearchItem::new(
                    post.title,
                    format!("{base_url}{}", post.permalink),
                    SourceType::Reddit,
                    created,
                )
            })
        })
        .collect()
}
