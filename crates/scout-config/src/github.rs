//! GitHub code search configuration.

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_raw_host() -> String {
    "raw.githubusercontent.com".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubConfig {
    /// Personal access token. Code search is heavily rate limited without one.
    /// Also read from a plain `GITHUB_TOKEN` variable.
    #[serde(default)]
    pub token: String,

    /// REST API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Host serving raw file contents, substituted for `github.com` in blob URLs.
    #[serde(default = "default_raw_host")]
    pub raw_host: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: default_api_url(),
            raw_host: default_raw_host(),
        }
    }
}

impl GithubConfig {
    /// The token, if one is set.
    pub fn token(&self) -> Option<&str> {
        Some(self.token.as_str()).filter(|t| !t.is_empty())
    }

    pub fn is_configured(&self) -> bool {
        self.token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_anonymous() {
        let config = GithubConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.token(), None);
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.raw_host, "raw.githubusercontent.com");
    }

    #[test]
    fn configured_when_token_set() {
        let config = GithubConfig {
            token: "ghp_test".into(),
            ..Default::default()
        };
        assert_eq!(config.token(), Some("ghp_test"));
    }
}
