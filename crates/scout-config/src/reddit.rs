//! Reddit search configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://www.reddit.com".to_string()
}

fn default_user_agent() -> String {
    "scout-research-bot/0.1".to_string()
}

const fn default_min_upvotes() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedditConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Reddit rejects requests without a descriptive user agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Posts below this many upvotes are skipped before scoring.
    #[serde(default = "default_min_upvotes")]
    pub min_upvotes: u32,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            min_upvotes: default_min_upvotes(),
        }
    }
}
