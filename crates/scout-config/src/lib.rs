//! # scout-config
//!
//! Layered configuration loading for Scout using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SCOUT_*` prefix, `__` as separator)
//! 2. A plain `GITHUB_TOKEN` variable, mapped to `github.token`
//! 3. Project-level `.scout/config.toml` (or an explicit `--config` file)
//! 4. User-level `~/.config/scout/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SCOUT_GITHUB__TOKEN` -> `github.token`,
//! `SCOUT_GENERAL__MAX_RESULTS` -> `general.max_results`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use scout_config::ScoutConfig;
//!
//! let config = ScoutConfig::load_with_dotenv(None).expect("config");
//! if config.github.is_configured() {
//!     println!("searching GitHub with a token");
//! }
//! ```

mod error;
mod general;
mod github;
mod reddit;
mod stackoverflow;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use github::GithubConfig;
pub use reddit::RedditConfig;
pub use stackoverflow::StackOverflowConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScoutConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub reddit: RedditConfig,
    #[serde(default)]
    pub stackoverflow: StackOverflowConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ScoutConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `file` in place of `.scout/config.toml`.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(file).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// A missing `.env` is not an error. Variables already set in the
    /// process environment win over the file.
    pub fn load_with_dotenv(file: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load_from(file)
    }

    /// Build the figment provider chain.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local or explicit config
        let local_path =
            file.map_or_else(|| PathBuf::from(".scout/config.toml"), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Conventional GitHub token variable
        figment = figment.merge(
            Env::raw()
                .only(&["GITHUB_TOKEN"])
                .map(|_| "github.token".into()),
        );

        // Layer 4: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("SCOUT_").split("__"))
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.general.max_results == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.max_results".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Per-request timeout as a [`Duration`].
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.general.timeout_secs)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("scout").join("config.toml"))
    }
}
