//! # scout-sources
//!
//! Search API crawlers for Scout.
//!
//! Each crawler wraps one external search API and maps its response into the
//! shared [`ResearchItem`] shape:
//! - GitHub code search, scoped to the OCA organisation
//! - Reddit search, restricted to `r/odoo`
//! - Stack Exchange advanced search, tagged `odoo`
//!
//! Crawlers are built from explicit configuration and never read the
//! environment. Upstream ordering is preserved.

pub mod github;
pub mod reddit;
pub mod snippet;
pub mod stackoverflow;

mod error;
mod http;

pub use error::SourceError;
pub use github::GithubCrawler;
pub use reddit::RedditCrawler;
pub use snippet::extract_snippet;
pub use stackoverflow::StackOverflowCrawler;

use scout_core::{ResearchItem, SourceType};

/// Longest preview kept from a post or question body.
pub const PREVIEW_CHARS: usize = 200;

/// A search API that yields research items.
///
/// Implementors provide [`Crawler::try_search`]; callers normally use
/// [`Crawler::search`], which never fails. Both futures are `Send`, so a run
/// can be moved onto a spawned task.
pub trait Crawler: Send + Sync {
    /// The source type stamped on every item this crawler returns.
    fn source_type(&self) -> SourceType;

    /// Run one search, surfacing transport and decoding failures.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the HTTP request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    fn try_search(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ResearchItem>, SourceError>> + Send;

    /// Run one search. Failures are logged and treated as empty results, so
    /// one failing source never aborts a run.
    fn search(&self, query: &str, limit: usize) -> impl Future<Output = Vec<ResearchItem>> + Send {
        async move {
            let source = self.source_type().as_str();
            match self.try_search(query, limit).await {
                Ok(items) => {
                    tracing::info!(source, query, count = items.len(), "search complete");
                    items
                }
                Err(e) => {
                    tracing::warn!(source, query, %e, "search failed");
                    Vec::new()
                }
            }
        }
    }
}
