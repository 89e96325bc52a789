//! # scout-core
//!
//! Core types and quality scoring for Scout.
//!
//! This crate provides the foundational types shared across all Scout crates:
//! - Source, domain and run-phase enums
//! - The normalized [`ResearchItem`] every crawler produces
//! - The quality rubric used to accept or reject items
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod item;
pub mod quality;

pub use enums::{Domain, RunPhase, SourceType};
pub use errors::CoreError;
pub use item::ResearchItem;
