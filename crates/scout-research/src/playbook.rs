//! Query sets per research domain.
//!
//! The built-in playbook covers `module_dev` and `docker`; `studio` and
//! `odoo_sh` have no queries and produce empty runs. A TOML file can replace
//! it:
//!
//! ```toml
//! [module_dev]
//! oca = ["@api.depends computed field"]
//! reddit = ["OCA module best practices"]
//! stackoverflow = ["record rule performance"]
//! ```
//!
//! Only sources with a crawler may carry queries. `forum` or `official`
//! entries are rejected when the file is parsed.

use std::collections::HashMap;
use std::path::Path;

use scout_core::{Domain, SourceType};

use crate::error::ResearchError;

type SourceQueries = HashMap<SourceType, Vec<String>>;

/// Sources a run actually queries, in visiting order.
pub const SEARCHED_SOURCES: [SourceType; 3] =
    [SourceType::Oca, SourceType::Reddit, SourceType::StackOverflow];

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "HashMap<Domain, SourceQueries>")]
pub struct Playbook {
    domains: HashMap<Domain, SourceQueries>,
}

impl TryFrom<HashMap<Domain, SourceQueries>> for Playbook {
    type Error = String;

    fn try_from(domains: HashMap<Domain, SourceQueries>) -> Result<Self, Self::Error> {
        for (domain, sources) in &domains {
            if let Some(source) = sources.keys().find(|s| !SEARCHED_SOURCES.contains(*s)) {
                return Err(format!(
                    "{domain}.{source}: no crawler (expected oca, reddit or stackoverflow)"
                ));
            }
        }
        Ok(Self { domains })
    }
}

impl Default for Playbook {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Playbook {
    /// The built-in query sets.
    #[must_use]
    pub fn builtin() -> Self {
        let module_dev = [
            (
                SourceType::Oca,
                &[
                    "@api.depends computed field",
                    "record rule domain multi-company",
                    "pytest-odoo TransactionCase",
                ][..],
            ),
            (
                SourceType::Reddit,
                &["OCA module best practices", "computed field cache"][..],
            ),
            (
                SourceType::StackOverflow,
                &["@api.depends computed field", "record rule performance"][..],
            ),
        ];
        let docker = [
            (
                SourceType::Reddit,
                &["docker wkhtmltopdf fonts", "docker compose odoo postgres"][..],
            ),
            (
                SourceType::StackOverflow,
                &["docker odoo wkhtmltopdf", "docker odoo non-root"][..],
            ),
        ];

        let to_map = |entries: &[(SourceType, &[&str])]| -> SourceQueries {
            entries
                .iter()
                .map(|(source, queries)| {
                    (*source, queries.iter().map(ToString::to_string).collect())
                })
                .collect()
        };

        Self {
            domains: HashMap::from([
                (Domain::ModuleDev, to_map(&module_dev)),
                (Domain::Docker, to_map(&docker)),
            ]),
        }
    }

    /// Parse a playbook from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error when the text is not a table of domains mapping
    /// searched source types to query lists.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read a playbook file.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::Io`] if the file cannot be read and
    /// [`ResearchError::Playbook`] if it does not parse.
    pub fn from_file(path: &Path) -> Result<Self, ResearchError> {
        let text = std::fs::read_to_string(path).map_err(|source| ResearchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ResearchError::Playbook {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Queries for one source within a domain. Unknown pairs are empty.
    #[must_use]
    pub fn queries(&self, domain: Domain, source: SourceType) -> &[String] {
        self.domains
            .get(&domain)
            .and_then(|sources| sources.get(&source))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of queries configured for a domain.
    #[must_use]
    pub fn query_count(&self, domain: Domain) -> usize {
        self.domains
            .get(&domain)
            .map_or(0, |sources| sources.values().map(Vec::len).sum())
    }
}
