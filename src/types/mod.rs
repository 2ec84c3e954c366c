//! Shared data structures for the coding-practice platform core
//!
//! This module defines the types flowing through the recommendation pipeline:
//! - Problem catalog entities (`Problem`, `TopicTag`, `Difficulty`)
//! - User progress state (`User`, `ProblemRecord`, `GoalRecord`)
//! - Code submissions with optional embeddings (`Submission`)
//! - Ephemeral tag-count / tag-score maps used by the scorer

mod problem;
mod user;
mod submission;

pub use problem::*;
pub use user::*;
pub use submission::*;

use std::collections::BTreeMap;

/// Tag name → occurrence count, produced by the goal and history extractors.
///
/// `BTreeMap` keeps iteration in tag-name order, which the ranker relies on
/// as the deterministic tie-break when picking top tags.
pub type TagCounts = BTreeMap<String, u32>;

/// Tag name → signed relevance score, produced by the tag scorer.
/// Rebuilt on every recommendation request; never persisted.
pub type TagScores = BTreeMap<String, i64>;
