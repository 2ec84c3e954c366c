//! Tag scorer.
//!
//! Merges the three extraction maps into one signed score per tag:
//! goal matches pull hardest (+4 each), liked-history tags pull (+2 each),
//! completed-history tags push away (−2 each) on the assumption the user
//! wants new material. Pure function over its inputs.

use crate::types::{TagCounts, TagScores};

/// Combine goal, liked and completed tag counts into signed scores.
///
/// A tag present in any input gets an entry; missing counts are zero.
/// Scores may be negative.
pub fn score_tags(goal: &TagCounts, liked: &TagCounts, completed: &TagCounts) -> TagScores {
    let mut scores = TagScores::new();

    for (tag, &count) in goal {
        *scores.entry(tag.clone()).or_insert(0) += i64::from(count) * super::GOAL_WEIGHT;
    }
    for (tag, &count) in liked {
        *scores.entry(tag.clone()).or_insert(0) += i64::from(count) * super::LIKED_WEIGHT;
    }
    for (tag, &count) in completed {
        *scores.entry(tag.clone()).or_insert(0) += i64::from(count) * super::COMPLETED_WEIGHT;
    }

    scores
}
