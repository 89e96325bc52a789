//! Source, domain and run-phase enums for Scout.
//!
//! All enums use `snake_case` serialization. [`RunPhase`] provides
//! `allowed_next_states()` so the orchestrator can enforce forward-only
//! progress through a research run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// SourceType
// ---------------------------------------------------------------------------

/// Where a research item came from. Every item carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Code in an Odoo Community Association repository.
    Oca,
    Reddit,
    #[serde(rename = "stackoverflow")]
    StackOverflow,
    Forum,
    /// Official Odoo documentation.
    Official,
}

impl SourceType {
    pub const ALL: [Self; 5] = [
        Self::Oca,
        Self::Reddit,
        Self::StackOverflow,
        Self::Forum,
        Self::Official,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oca => "oca",
            Self::Reddit => "reddit",
            Self::StackOverflow => "stackoverflow",
            Self::Forum => "forum",
            Self::Official => "official",
        }
    }

    /// Display name used in citations: underscores become spaces and every
    /// word is capitalised (`oca` → `Oca`, `stackoverflow` → `Stackoverflow`).
    #[must_use]
    pub fn title_case(self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect::<String>()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| CoreError::UnknownValue {
                kind: "source type",
                value: s.to_string(),
                expected: Self::ALL.map(Self::as_str).join(", "),
            })
    }
}

// ---------------------------------------------------------------------------
// Domain
// ---------------------------------------------------------------------------

/// Research focus selecting which query set a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    #[default]
    ModuleDev,
    Docker,
    Studio,
    OdooSh,
}

impl Domain {
    pub const ALL: [Self; 4] = [Self::ModuleDev, Self::Docker, Self::Studio, Self::OdooSh];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModuleDev => "module_dev",
            Self::Docker => "docker",
            Self::Studio => "studio",
            Self::OdooSh => "odoo_sh",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|domain| domain.as_str() == s)
            .ok_or_else(|| CoreError::UnknownValue {
                kind: "domain",
                value: s.to_string(),
                expected: Self::ALL.map(Self::as_str).join(", "),
            })
    }
}

// ---------------------------------------------------------------------------
// RunPhase
// ---------------------------------------------------------------------------

/// Phase of a single research run.
///
/// ```text
/// idle → querying → scoring → formatting → persisted
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    #[default]
    Idle,
    Querying,
    Scoring,
    Formatting,
    Persisted,
}

impl RunPhase {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Querying],
            Self::Querying => &[Self::Scoring],
            Self::Scoring => &[Self::Formatting],
            Self::Formatting => &[Self::Persisted],
            Self::Persisted => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Move to `next`, rejecting anything but the single forward step.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] when `next` is not reachable
    /// from the current phase.
    pub fn advance(&mut self, next: Self) -> Result<(), CoreError> {
        if !self.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                from: self.to_string(),
                to: next.to_string(),
            });
        }
        *self = next;
        Ok(())
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Querying => "querying",
            Self::Scoring => "scoring",
            Self::Formatting => "formatting",
            Self::Persisted => "persisted",
        }
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
