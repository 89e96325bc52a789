//! General application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_notes_dir() -> PathBuf {
    PathBuf::from("knowledge/notes")
}

/// Default cap on results kept per query.
const fn default_max_results() -> usize {
    5
}

/// Per-request timeout.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory holding the dated research notes.
    #[serde(default = "default_notes_dir")]
    pub notes_dir: PathBuf,

    #[serde(default = "default_max_results")]
    pub max_results: usize,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// TOML file replacing the built-in query sets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playbook: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            notes_dir: default_notes_dir(),
            max_results: default_max_results(),
            timeout_secs: default_timeout_secs(),
            playbook: None,
        }
    }
}
