//! Goal tag extraction.
//!
//! Turns a user's recent free-text goals into weighted tag counts. Only
//! goals from the last [`GOAL_WINDOW_DAYS`](super::GOAL_WINDOW_DAYS) count;
//! older goals are ignored, not deleted.

use std::sync::OnceLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;

use crate::tags;
use crate::types::{GoalRecord, TagCounts};

/// Matches every character the goal sanitizer strips.
static NON_TOKEN_CHARS: OnceLock<Regex> = OnceLock::new();

fn non_token_chars() -> &'static Regex {
    NON_TOKEN_CHARS.get_or_init(|| Regex::new(r"[^a-z0-9\s]").expect("static regex is valid"))
}

/// Lowercase a goal string, strip everything outside `[a-z0-9\s]`, and split
/// into whitespace-delimited tokens.
fn tokenize(goal: &str) -> Vec<String> {
    let lowered = goal.to_lowercase();
    let cleaned = non_token_chars().replace_all(&lowered, "");
    cleaned
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Count vocabulary-tag matches across the user's recent goals.
///
/// Each (token, tag) whole-word hit increments that tag's count, so one goal
/// can raise the same tag several times when several of its words hit it
/// (e.g. "binary search trees and binary heaps" counts "Binary Search"
/// twice via "binary").
pub fn count_goal_tags(goals: &[GoalRecord], now: DateTime<Utc>) -> TagCounts {
    let cutoff = now - Duration::days(super::GOAL_WINDOW_DAYS);
    let mut counts = TagCounts::new();

    for record in goals {
        if record.timestamp <= cutoff {
            continue;
        }
        for token in tokenize(&record.goal) {
            for &tag in tags::tags_for_word(&token) {
                *counts.entry(tag.to_string()).or_insert(0) += 1;
            }
        }
    }

    counts
}
