//! Crawlers against a local fixture server.

mod common;

use std::time::Duration;

use common::{FixtureServer, UNREACHABLE};
use pretty_assertions::assert_eq;
use scout_config::{GithubConfig, RedditConfig, StackOverflowConfig};
use scout_core::SourceType;
use scout_sources::{Crawler, GithubCrawler, RedditCrawler, SourceError, StackOverflowCrawler};

const TIMEOUT: Duration = Duration::from_secs(5);

fn github(base_url: &str, token: &str) -> GithubCrawler {
    let config = GithubConfig {
        token: token.to_string(),
        api_url: base_url.to_string(),
        ..Default::default()
    };
    GithubCrawler::new(&config, TIMEOUT).unwrap()
}

fn reddit(base_url: &str) -> RedditCrawler {
    let config = RedditConfig {
        base_url: base_url.to_string(),
        ..Default::default()
    };
    RedditCrawler::new(&config, TIMEOUT).unwrap()
}

fn stackoverflow(base_url: &str) -> StackOverflowCrawler {
    let config = StackOverflowConfig {
        base_url: base_url.to_string(),
        ..Default::default()
    };
    StackOverflowCrawler::new(&config, TIMEOUT).unwrap()
}

#[tokio::test]
async fn github_scopes_query_to_org_and_sends_token() {
    let body = r#"{"items": [{"name": "a.py", "path": "m/a.py", "html_url": "https://github.com/OCA/web/blob/16.0/m/a.py", "repository": {"full_name": "OCA/web"}}]}"#;
    let server = FixtureServer::start(vec![("/search/code", 200, body.to_string())]);

    let items = github(&server.base_url, "ghp_secret")
        .search("@api.depends computed field", 3)
        .await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].source_type, SourceType::Oca);
    let requests = server.requests();
    assert_eq!(
        requests[0].url,
        "/search/code?q=org%3AOCA%20%40api.depends%20computed%20field&per_page=3"
    );
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer ghp_secret"));
}

#[tokio::test]
async fn github_repo_scope_and_anonymous_access() {
    let server = FixtureServer::start(vec![("/search/code", 200, r#"{"items": []}"#.into())]);

    let items = github(&server.base_url, "")
        .search_in_repo("def _compute", "sale-workflow", 2)
        .await
        .unwrap();

    assert!(items.is_empty());
    let requests = server.requests();
    assert_eq!(
        requests[0].url,
        "/search/code?q=repo%3AOCA%2Fsale-workflow%20def%20_compute&per_page=2"
    );
    assert_eq!(requests[0].authorization, None);
}

#[tokio::test]
async fn github_fetches_raw_content() {
    let server = FixtureServer::start(vec![(
        "/OCA/web/16.0/m/a.py",
        200,
        "class A(models.Model):\n    _name = 'a'\n".into(),
    )]);
    let crawler = github(UNREACHABLE, "");

    let content = crawler
        .fetch_file_content(&format!("{}/OCA/web/blob/16.0/m/a.py", server.base_url))
        .await;

    assert_eq!(content.as_deref(), Some("class A(models.Model):\n    _name = 'a'\n"));
    assert_eq!(server.requests()[0].url, "/OCA/web/16.0/m/a.py");
}

#[tokio::test]
async fn github_missing_file_is_none() {
    let server = FixtureServer::start(vec![]);
    let content = github(UNREACHABLE, "")
        .fetch_file_content(&format!("{}/OCA/web/blob/16.0/gone.py", server.base_url))
        .await;
    assert_eq!(content, None);
}

#[tokio::test]
async fn reddit_sends_user_agent_and_filters() {
    let body = r#"{"data": {"children": [
        {"data": {"title": "Keep", "permalink": "/r/odoo/comments/1/", "ups": 7, "created_utc": 1735689600.0}},
        {"data": {"title": "Drop", "permalink": "/r/odoo/comments/2/", "ups": 1, "created_utc": 1735689600.0}}
    ]}}"#;
    let server = FixtureServer::start(vec![("/r/odoo/search.json", 200, body.to_string())]);

    let items = reddit(&server.base_url).search("computed field cache", 3).await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].url, format!("{}/r/odoo/comments/1/", server.base_url));
    let requests = server.requests();
    assert_eq!(
        requests[0].url,
        "/r/odoo/search.json?q=computed%20field%20cache&restrict_sr=on&sort=relevance&limit=3"
    );
    assert_eq!(
        requests[0].user_agent.as_deref(),
        Some(RedditConfig::default().user_agent.as_str())
    );
}

#[tokio::test]
async fn stackoverflow_builds_tagged_vote_sorted_query() {
    let server = FixtureServer::start(vec![("/search/advanced", 200, r#"{"items": []}"#.into())]);

    let items = stackoverflow(&server.base_url).search("record rule performance", 3).await;

    assert!(items.is_empty());
    assert_eq!(
        server.requests()[0].url,
        "/search/advanced?order=desc&sort=votes&tagged=odoo&q=record%20rule%20performance&site=stackoverflow&pagesize=3&filter=withbody"
    );
}

#[tokio::test]
async fn network_failure_degrades_to_empty() {
    assert!(github(UNREACHABLE, "").search("x", 3).await.is_empty());
    assert!(reddit(UNREACHABLE).search("x", 3).await.is_empty());
    assert!(stackoverflow(UNREACHABLE).search("x", 3).await.is_empty());

    let err = reddit(UNREACHABLE).try_search("x", 3).await.unwrap_err();
    assert!(matches!(err, SourceError::Http(_)));
}

#[tokio::test]
async fn rate_limit_and_bad_payloads_degrade_to_empty() {
    let server = FixtureServer::start(vec![
        ("/search/code", 429, String::new()),
        ("/r/odoo/search.json", 200, "<html>blocked</html>".into()),
        ("/search/advanced", 500, "oops".into()),
    ]);

    let gh = github(&server.base_url, "");
    assert!(matches!(
        gh.try_search("x", 3).await,
        Err(SourceError::RateLimited { retry_after_secs: 60 })
    ));
    assert!(gh.search("x", 3).await.is_empty());

    let rd = reddit(&server.base_url);
    assert!(matches!(rd.try_search("x", 3).await, Err(SourceError::Parse(_))));

    let so = stackoverflow(&server.base_url);
    assert!(matches!(
        so.try_search("x", 3).await,
        Err(SourceError::Api { status: 500, .. })
    ));
    assert!(so.search("x", 3).await.is_empty());
}

#[tokio::test]
#[ignore] // requires network
async fn live_search_per_source() {
    let timeout = Duration::from_secs(30);
    let gh = GithubCrawler::new(&GithubConfig::default(), timeout).unwrap();
    let rd = RedditCrawler::new(&RedditConfig::default(), timeout).unwrap();
    let so = StackOverflowCrawler::new(&StackOverflowConfig::default(), timeout).unwrap();

    for (label, result) in [
        ("oca", gh.try_search("@api.depends", 3).await),
        ("reddit", rd.try_search("computed field", 3).await),
        ("stackoverflow", so.try_search("computed field", 3).await),
    ] {
        match result {
            Ok(items) => {
                println!("\n── {label} ── {} results", items.len());
                for i in &items {
                    println!("  [{:>3}] {} | {}", i.upvotes, i.title, i.url);
                }
            }
            Err(e) => println!("\n── {label} ── ERROR: {e}"),
        }
    }
}
