//! Research pipeline error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the research pipeline.
///
/// Search failures are not among them: crawlers degrade to empty results.
#[derive(Debug, Error)]
pub enum ResearchError {
    /// Reading or writing a file failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A playbook file could not be parsed.
    #[error("invalid playbook {}: {source}", path.display())]
    Playbook {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A crawler could not be constructed.
    #[error(transparent)]
    Source(#[from] scout_sources::SourceError),

    /// The run state machine was driven out of order.
    #[error(transparent)]
    Core(#[from] scout_core::CoreError),
}
