//! Quality rubric for research sources.
//!
//! A score is the unweighted sum of three terms:
//! - a base score picked by source type (and, for Reddit and Stack Overflow,
//!   by upvote bands and the accepted-answer flag),
//! - a recency adjustment keyed by publication year, applied only from 2021
//!   onwards,
//! - a flat bonus for OCA-aligned content.
//!
//! Scores are never clamped or normalized. Every function here is pure: the
//! only notion of time is the explicit `date` argument.

use chrono::{DateTime, Datelike, Utc};

use crate::enums::SourceType;

/// Items scoring below this are dropped.
pub const MIN_ACCEPTABLE_SCORE: i32 = 60;

pub const OFFICIAL_DOCS: i32 = 100;
pub const OCA_REPOSITORY_CODE: i32 = 90;
pub const STACKOVERFLOW_ACCEPTED_20_PLUS: i32 = 85;
pub const REDDIT_10_PLUS_UPVOTES: i32 = 75;
pub const STACKOVERFLOW_ACCEPTED_10_19: i32 = 70;
pub const FORUM_OFFICIAL_RESPONSE: i32 = 70;
pub const REDDIT_5_9_UPVOTES: i32 = 60;
pub const STACKOVERFLOW_UNACCEPTED_10_PLUS: i32 = 50;

/// First year that takes part in the recency adjustment.
pub const RECENCY_CUTOFF_YEAR: i32 = 2021;

/// Adjustment for years >= the cutoff that are not listed in the table.
pub const STALE_YEAR_PENALTY: i32 = -20;

const RECENCY_BONUS: [(i32, i32); 4] = [(2025, 20), (2024, 15), (2023, 10), (2022, 0)];

/// Bonus for content following OCA conventions.
pub const OCA_ALIGNMENT_BONUS: i32 = 15;

/// Base score from the source-type table.
#[must_use]
pub const fn base_score(source_type: SourceType, upvotes: u32, accepted: bool) -> i32 {
    match source_type {
        SourceType::Official => OFFICIAL_DOCS,
        SourceType::Oca => OCA_REPOSITORY_CODE,
        SourceType::Forum => FORUM_OFFICIAL_RESPONSE,
        SourceType::Reddit => {
            if upvotes >= 10 {
                REDDIT_10_PLUS_UPVOTES
            } else if upvotes >= 5 {
                REDDIT_5_9_UPVOTES
            } else {
                0
            }
        }
        SourceType::StackOverflow => {
            if accepted && upvotes >= 20 {
                STACKOVERFLOW_ACCEPTED_20_PLUS
            } else if accepted && upvotes >= 10 {
                STACKOVERFLOW_ACCEPTED_10_19
            } else if upvotes >= 10 {
                STACKOVERFLOW_UNACCEPTED_10_PLUS
            } else {
                0
            }
        }
    }
}

/// Recency adjustment for a publication year. Years before the cutoff
/// contribute nothing.
#[must_use]
pub fn recency_bonus(year: i32) -> i32 {
    if year < RECENCY_CUTOFF_YEAR {
        return 0;
    }
    RECENCY_BONUS
        .iter()
        .find(|(y, _)| *y == year)
        .map_or(STALE_YEAR_PENALTY, |(_, bonus)| *bonus)
}

/// Total quality score for a source.
#[must_use]
pub fn score(
    source_type: SourceType,
    date: DateTime<Utc>,
    upvotes: u32,
    accepted: bool,
    oca_aligned: bool,
) -> i32 {
    let alignment = if oca_aligned { OCA_ALIGNMENT_BONUS } else { 0 };
    base_score(source_type, upvotes, accepted) + recency_bonus(date.year()) + alignment
}

/// Whether a score meets [`MIN_ACCEPTABLE_SCORE`].
#[must_use]
pub const fn is_acceptable(score: i32) -> bool {
    score >= MIN_ACCEPTABLE_SCORE
}
