//! GitHub code search crawler for OCA repositories.

use std::time::Duration;

use chrono::{DateTime, Utc};
use scout_config::GithubConfig;
use scout_core::{ResearchItem, SourceType};

use crate::{
    Crawler,
    error::SourceError,
    http::{build_client, check_response, read_json},
};

const USER_AGENT: &str = "scout/0.1";
const ACCEPT: &str = "application/vnd.github.v3+json";

/// GitHub organisation every search is scoped to.
pub const ORG: &str = "OCA";

#[derive(serde::Deserialize)]
struct CodeSearchResponse {
    #[serde(default)]
    items: Vec<CodeHit>,
}

#[derive(serde::Deserialize)]
struct CodeHit {
    name: String,
    path: String,
    html_url: String,
    repository: Repository,
}

#[derive(serde::Deserialize)]
struct Repository {
    full_name: String,
}

/// Searches OCA code and fetches raw file contents for snippets.
pub struct GithubCrawler {
    http: reqwest::Client,
    token: Option<String>,
    api_url: String,
    raw_host: String,
}

impl GithubCrawler {
    /// Build a crawler from explicit settings. An empty token means anonymous
    /// access.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &GithubConfig, timeout: Duration) -> Result<Self, SourceError> {
        Ok(Self {
            http: build_client(USER_AGENT, timeout)?,
            token: config.token().map(str::to_string),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            raw_host: config.raw_host.clone(),
        })
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Search within a single OCA repository (`repo:OCA/<repo> <query>`).
    ///
    /// # Errors
    ///
    /// Same as [`Crawler::try_search`].
    pub async fn search_in_repo(
        &self,
        query: &str,
        repo: &str,
        limit: usize,
    ) -> Result<Vec<ResearchItem>, SourceError> {
        self.code_search(&format!("repo:{ORG}/{repo} {query}"), limit)
            .await
    }

    async fn code_search(
        &self,
        search_query: &str,
        limit: usize,
    ) -> Result<Vec<ResearchItem>, SourceError> {
        let limit = limit.min(100);
        let url = format!(
            "{}/search/code?q={}&per_page={limit}",
            self.api_url,
            urlencoding::encode(search_query)
        );
        let mut request = self.http.get(&url).header(reqwest::header::ACCEPT, ACCEPT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let resp = check_response(request.send().await?).await?;

        let data: CodeSearchResponse = read_json(resp).await?;
        Ok(into_items(data, Utc::now()))
    }

    /// Rewrite an HTML blob URL to the raw-content host.
    ///
    /// `https://github.com/OCA/x/blob/16.0/a.py` →
    /// `https://raw.githubusercontent.com/OCA/x/16.0/a.py`
    #[must_use]
    pub fn raw_url(&self, html_url: &str) -> String {
        html_url
            .replace("github.com", &self.raw_host)
            .replace("/blob/", "/")
    }

    /// Fetch the raw contents of the file behind an HTML blob URL.
    ///
    /// Failures are logged and yield `None`.
    pub async fn fetch_file_content(&self, html_url: &str) -> Option<String> {
        let raw_url = self.raw_url(html_url);
        match self.try_fetch(&raw_url).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!(url = %raw_url, %e, "failed to fetch file content");
                None
            }
        }
    }

    async fn try_fetch(&self, raw_url: &str) -> Result<String, SourceError> {
        let resp = check_response(self.http.get(raw_url).send().await?).await?;
        Ok(resp.text().await?)
    }
}

impl Crawler for GithubCrawler {
    fn source_type(&self) -> SourceType {
        SourceType::Oca
    }

    async fn try_search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ResearchItem>, SourceError> {
        self.code_search(&format!("org:{ORG} {query}"), limit).await
    }
}

/// Code search has no dates, so every hit is stamped with `crawled_at`.
fn into_items(data: CodeSearchResponse, crawled_at: DateTime<Utc>) -> Vec<ResearchItem> {
    data.items
        .into_iter()
        .map(|hit| ResearchItem {
            repo: Some(hit.repository.full_name),
            path: Some(hit.path),
            ..ResearchItem::new(
                format!("OCA Pattern: {}", hit.name),
                hit.html_url,
                SourceType::Oca,
                crawled_at,
            )
        })
        .collect()
}
