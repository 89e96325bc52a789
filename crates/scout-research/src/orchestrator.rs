//! Drives one research run from queries to a persisted note.
//!
//! ```text
//! idle → querying → scoring → formatting → persisted
//! ```
//!
//! Everything runs sequentially. Sources are visited in a fixed order
//! (OCA code, Reddit, Stack Overflow) and queries in playbook order, so the
//! note lists citations in that order too.

use std::path::PathBuf;

use chrono::NaiveDate;
use scout_config::ScoutConfig;
use scout_core::{Domain, ResearchItem, RunPhase, SourceType};
use scout_sources::{
    Crawler, GithubCrawler, RedditCrawler, StackOverflowCrawler, extract_snippet,
    snippet::SNIPPET_LINES,
};
use serde::Serialize;

use crate::citation::format_citation;
use crate::error::ResearchError;
use crate::heuristics;
use crate::playbook::Playbook;
use crate::sink::DailyNote;

/// Results requested from a source for each query.
pub const PER_QUERY_FETCH: usize = 3;

/// Runs accepting fewer citations than this end with a warning and a
/// non-zero exit code.
pub const MIN_CITATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub domain: Domain,
    /// Cap on items kept from each query.
    pub max_results: usize,
    /// Skip Stack Overflow to stay clear of its rate limits.
    pub test_mode: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            domain: Domain::default(),
            max_results: 5,
            test_mode: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Success,
    /// Too few citations; the note is still written.
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub domain: Domain,
    pub test_mode: bool,
    /// Items returned by the crawlers before scoring.
    pub collected: usize,
    pub note_path: PathBuf,
    /// Rendered citation blocks, in processing order.
    pub citations: Vec<String>,
}

impl RunOutcome {
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.citations.len()
    }

    #[must_use]
    pub fn status(&self) -> RunStatus {
        if self.accepted() >= MIN_CITATIONS {
            RunStatus::Success
        } else {
            RunStatus::Warning
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self.status() {
            RunStatus::Success => 0,
            RunStatus::Warning => 1,
        }
    }
}

pub struct Researcher {
    github: GithubCrawler,
    reddit: RedditCrawler,
    stackoverflow: StackOverflowCrawler,
    playbook: Playbook,
}

impl Researcher {
    /// Build all three crawlers from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::Source`] if an HTTP client cannot be built.
    pub fn new(config: &ScoutConfig, playbook: Playbook) -> Result<Self, ResearchError> {
        let timeout = config.timeout();
        Ok(Self::from_parts(
            GithubCrawler::new(&config.github, timeout)?,
            RedditCrawler::new(&config.reddit, timeout)?,
            StackOverflowCrawler::new(&config.stackoverflow, timeout)?,
            playbook,
        ))
    }

    #[must_use]
    pub fn from_parts(
        github: GithubCrawler,
        reddit: RedditCrawler,
        stackoverflow: StackOverflowCrawler,
        playbook: Playbook,
    ) -> Self {
        Self {
            github,
            reddit,
            stackoverflow,
            playbook,
        }
    }

    #[must_use]
    pub const fn playbook(&self) -> &Playbook {
        &self.playbook
    }

    /// Run every query for the domain and gather the raw items.
    ///
    /// OCA hits get a snippet pulled from the file behind them. Failed
    /// searches contribute nothing.
    pub async fn collect(&self, options: &RunOptions) -> Vec<ResearchItem> {
        tracing::info!(
            domain = %options.domain,
            github_token = self.github.has_token(),
            reddit_floor = self.reddit.min_upvotes(),
            stackoverflow_floor = self.stackoverflow.min_upvotes(),
            "starting research"
        );
        let mut results = Vec::new();

        for query in self.playbook.queries(options.domain, SourceType::Oca) {
            let items = self.github.search(query, PER_QUERY_FETCH).await;
            for mut item in items.into_iter().take(options.max_results) {
                let content = self.github.fetch_file_content(&item.url).await;
                let snippet =
                    extract_snippet(content.as_deref().unwrap_or_default(), SNIPPET_LINES);
                item.snippet = Some(snippet).filter(|s| !s.is_empty());
                results.push(item);
            }
        }

        collect_from(
            &self.reddit,
            self.playbook.queries(options.domain, SourceType::Reddit),
            options.max_results,
            &mut results,
        )
        .await;

        if options.test_mode {
            tracing::info!("test mode: skipping stackoverflow");
        } else {
            collect_from(
                &self.stackoverflow,
                self.playbook.queries(options.domain, SourceType::StackOverflow),
                options.max_results,
                &mut results,
            )
            .await;
        }

        tracing::info!(total = results.len(), "research complete");
        results
    }

    /// Full run: collect, score, format and append to today's note.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::Io`] if the note cannot be written. Search
    /// failures never surface here.
    pub async fn run(
        &self,
        options: &RunOptions,
        sink: &DailyNote,
        today: NaiveDate,
    ) -> Result<RunOutcome, ResearchError> {
        let mut phase = RunPhase::Idle;

        advance(&mut phase, RunPhase::Querying)?;
        let items = self.collect(options).await;
        let collected = items.len();

        advance(&mut phase, RunPhase::Scoring)?;
        let accepted = filter_acceptable(items);
        tracing::info!(accepted = accepted.len(), collected, "filtered to high-quality results");
        if accepted.len() < MIN_CITATIONS {
            tracing::warn!(
                accepted = accepted.len(),
                minimum = MIN_CITATIONS,
                "fewer citations than expected, consider broadening search"
            );
        }

        advance(&mut phase, RunPhase::Formatting)?;
        let citations = render_citations(&accepted);

        advance(&mut phase, RunPhase::Persisted)?;
        tracing::debug!(dir = %sink.dir().display(), "appending to daily note");
        let note_path = sink.append(today, &citations.join("\n"))?;

        Ok(RunOutcome {
            domain: options.domain,
            test_mode: options.test_mode,
            collected,
            note_path,
            citations,
        })
    }
}

fn advance(phase: &mut RunPhase, next: RunPhase) -> Result<(), ResearchError> {
    phase.advance(next)?;
    tracing::debug!(phase = %next, "research phase");
    Ok(())
}

async fn collect_from<C: Crawler>(
    crawler: &C,
    queries: &[String],
    max_results: usize,
    results: &mut Vec<ResearchItem>,
) {
    for query in queries {
        let items = crawler.search(query, PER_QUERY_FETCH).await;
        results.extend(items.into_iter().take(max_results));
    }
}

/// Keep items whose quality score passes the acceptance threshold.
#[must_use]
pub fn filter_acceptable(items: Vec<ResearchItem>) -> Vec<ResearchItem> {
    items
        .into_iter()
        .filter(|item| {
            let keep = item.is_acceptable();
            if !keep {
                tracing::debug!(
                    title = %item.title,
                    score = item.quality_score(),
                    "dropping low-quality item"
                );
            }
            keep
        })
        .collect()
}

/// Render one citation per item with derived takeaway, tags and
/// applications.
#[must_use]
pub fn render_citations(items: &[ResearchItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            let takeaway = heuristics::takeaway(item);
            format_citation(
                item,
                item.snippet.as_deref(),
                Some(takeaway.as_str()),
                &heuristics::applications(item),
                &heuristics::tags(item),
            )
        })
        .collect()
}
