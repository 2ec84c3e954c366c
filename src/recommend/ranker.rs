//! Candidate ranking.
//!
//! Step 1: score the user's liked-but-unfinished problems and sort them by
//! relevance. Step 2: when that yields fewer than
//! [`TARGET_CANDIDATES`](super::TARGET_CANDIDATES), backfill from the wider
//! catalog using the top-scoring tags, never re-introducing a problem the
//! user has already seen.

use std::collections::HashSet;

use crate::error::StoreError;
use crate::store::{ProblemFilter, ProblemStore};
use crate::types::{Problem, ProblemId, TagScores, User};

/// Sum of the score map's entries for each of the problem's tags.
/// Tags absent from the map contribute nothing.
fn problem_score(problem: &Problem, scores: &TagScores) -> i64 {
    problem
        .topic_tags
        .iter()
        .map(|tag| scores.get(&tag.name).copied().unwrap_or(0))
        .sum()
}

/// Sort problems by score, highest first. `sort_by` is stable, so equal
/// scores keep their incoming relative order.
fn sort_scored(problems: Vec<Problem>, scores: &TagScores) -> Vec<Problem> {
    let mut scored: Vec<(i64, Problem)> = problems
        .into_iter()
        .map(|p| (problem_score(&p, scores), p))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, p)| p).collect()
}

/// The top scoring tag names, ties broken by name ascending.
///
/// The score map iterates in name order and the sort is stable, so the
/// tie-break falls out without a secondary comparator.
fn top_tags(scores: &TagScores, limit: usize) -> Vec<String> {
    let mut entries: Vec<(&String, i64)> = scores.iter().map(|(t, &s)| (t, s)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
        .into_iter()
        .take(limit)
        .map(|(tag, _)| tag.clone())
        .collect()
}

/// Assemble the ranked candidate list for `user`, at most
/// [`TARGET_CANDIDATES`](super::TARGET_CANDIDATES) problems, most relevant
/// first. An empty result is valid; the caller decides what that means.
pub async fn rank_candidates<S: ProblemStore + ?Sized>(
    user: &User,
    scores: &TagScores,
    store: &S,
) -> Result<Vec<Problem>, StoreError> {
    let completed_ids: HashSet<&ProblemId> =
        user.completed.iter().map(|r| &r.problem_id).collect();

    // Liked problems the user has not finished, in liked-list order.
    // That order is what stable sorting preserves for equal scores.
    let liked_unfinished: Vec<&ProblemId> = user
        .liked
        .iter()
        .map(|r| &r.problem_id)
        .filter(|id| !completed_ids.contains(*id))
        .collect();

    let mut primary = Vec::with_capacity(liked_unfinished.len());
    for id in &liked_unfinished {
        // Dangling likes are skipped, same as in history extraction.
        if let Some(problem) = store.find_by_id(id).await? {
            primary.push(problem);
        }
    }
    let mut ranked = sort_scored(primary, scores);
    // The output bound applies to the whole list, not just backfill growth:
    // a user with many qualifying likes gets the top-scored ten.
    ranked.truncate(super::TARGET_CANDIDATES);
    tracing::debug!(primary = ranked.len(), "scored liked-unfinished candidates");

    if ranked.len() < super::TARGET_CANDIDATES && !scores.is_empty() {
        let tags = top_tags(scores, super::BACKFILL_TAG_COUNT);

        let mut exclude: HashSet<ProblemId> =
            completed_ids.iter().map(|id| (*id).clone()).collect();
        exclude.extend(liked_unfinished.iter().map(|id| (*id).clone()));

        let filter = ProblemFilter {
            exclude,
            any_tags: Some(tags),
            ..ProblemFilter::default()
        };
        let pool = store.query(&filter).await?;
        let backfill = sort_scored(pool, scores);
        tracing::debug!(backfill = backfill.len(), "scored backfill pool");

        for problem in backfill {
            if ranked.len() >= super::TARGET_CANDIDATES {
                break;
            }
            ranked.push(problem);
        }
    }

    Ok(ranked)
}
