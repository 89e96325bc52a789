//! Stack Exchange API configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.stackexchange.com/2.3".to_string()
}

const fn default_min_upvotes() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StackOverflowConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Questions scoring below this are skipped before scoring.
    #[serde(default = "default_min_upvotes")]
    pub min_upvotes: u32,
}

impl Default for StackOverflowConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            min_upvotes: default_min_upvotes(),
        }
    }
}
