//! # scout-research
//!
//! Research orchestration for Scout: query playbooks, citation heuristics
//! and formatting, and the dated note sink.
//!
//! A run visits each source's queries for a domain, scores every item with
//! the quality rubric from `scout-core`, renders the survivors as citations
//! and appends them to `<notes_dir>/<YYYY-MM-DD>.md`.

pub mod citation;
pub mod heuristics;
pub mod orchestrator;
pub mod playbook;
pub mod sink;

mod error;

pub use citation::format_citation;
pub use error::ResearchError;
pub use orchestrator::{
    MIN_CITATIONS, PER_QUERY_FETCH, Researcher, RunOptions, RunOutcome, RunStatus,
    filter_acceptable, render_citations,
};
pub use playbook::Playbook;
pub use sink::DailyNote;
