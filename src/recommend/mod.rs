//! Tag-and-goal based problem recommendation.
//!
//! Pipeline, leaf to root:
//! 1. goal extraction — recent free-text goals → tag counts
//! 2. history extraction — recent liked/completed records → tag counts (×2)
//! 3. scoring — the three maps merged into signed per-tag scores
//! 4. ranking — liked-unfinished problems scored and ordered, backfilled
//!    from the catalog up to [`TARGET_CANDIDATES`]
//! 5. selection — one uniform random pick from the ranked pool
//!
//! The whole computation is pure given the user, the store contents and the
//! evaluation time; nothing is cached between requests.

mod goal_tags;
mod history_tags;
mod ranker;
mod scorer;
mod selector;

pub use goal_tags::count_goal_tags;
pub use history_tags::count_history_tags;
pub use ranker::rank_candidates;
pub use scorer::score_tags;
pub use selector::select_one;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::error::RecommendError;
use crate::store::ProblemStore;
use crate::types::{Problem, TagScores, User};

/// Goals older than this many days do not influence scoring.
pub const GOAL_WINDOW_DAYS: i64 = 30;
/// Liked/completed records older than this many days do not influence scoring.
pub const HISTORY_WINDOW_DAYS: i64 = 180;
/// Score contribution per goal-token match.
pub const GOAL_WEIGHT: i64 = 4;
/// Score contribution per liked-history tag occurrence.
pub const LIKED_WEIGHT: i64 = 2;
/// Score contribution per completed-history tag occurrence (negative:
/// finished topics are deprioritized in favor of new material).
pub const COMPLETED_WEIGHT: i64 = -2;
/// The ranker stops growing the candidate list at this many problems.
pub const TARGET_CANDIDATES: usize = 10;
/// How many top-scoring tags drive the backfill query.
pub const BACKFILL_TAG_COUNT: usize = 5;

/// Recommendation pipeline over a problem store.
pub struct Recommender<'a, S: ProblemStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ProblemStore + ?Sized> Recommender<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Build the per-tag score map for `user` as of `now`.
    ///
    /// The two history passes share no mutable state and run concurrently
    /// against the store.
    pub async fn tag_scores_at(
        &self,
        user: &User,
        now: DateTime<Utc>,
    ) -> Result<TagScores, RecommendError> {
        let goal_counts = count_goal_tags(&user.goals, now);
        let (liked_counts, completed_counts) = futures::try_join!(
            count_history_tags(&user.liked, self.store, now),
            count_history_tags(&user.completed, self.store, now),
        )?;
        tracing::debug!(
            goal_tags = goal_counts.len(),
            liked_tags = liked_counts.len(),
            completed_tags = completed_counts.len(),
            "extracted tag signals"
        );
        Ok(score_tags(&goal_counts, &liked_counts, &completed_counts))
    }

    /// The ranked candidate list for `user` as of `now`, most relevant
    /// first, at most [`TARGET_CANDIDATES`] long. May be empty.
    pub async fn ranked_candidates_at(
        &self,
        user: &User,
        now: DateTime<Utc>,
    ) -> Result<Vec<Problem>, RecommendError> {
        let scores = self.tag_scores_at(user, now).await?;
        let ranked = rank_candidates(user, &scores, self.store).await?;
        tracing::debug!(user = %user.id, candidates = ranked.len(), "ranked recommendation pool");
        Ok(ranked)
    }

    /// [`ranked_candidates_at`](Self::ranked_candidates_at) evaluated at the
    /// wall clock.
    pub async fn ranked_candidates(&self, user: &User) -> Result<Vec<Problem>, RecommendError> {
        self.ranked_candidates_at(user, Utc::now()).await
    }

    /// Rank and pick one problem for `user`.
    ///
    /// Fails with [`RecommendError::NoCandidates`] when the user has no
    /// qualifying history and the backfill found nothing.
    pub async fn recommend_one_at<R: Rng + ?Sized>(
        &self,
        user: &User,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Problem, RecommendError> {
        let ranked = self.ranked_candidates_at(user, now).await?;
        select_one(&ranked, rng).map(Clone::clone)
    }

    /// [`recommend_one_at`](Self::recommend_one_at) with the wall clock and
    /// thread-local RNG.
    pub async fn recommend_one(&self, user: &User) -> Result<Problem, RecommendError> {
        let ranked = self.ranked_candidates_at(user, Utc::now()).await?;
        select_one(&ranked, &mut rand::thread_rng()).map(Clone::clone)
    }
}
