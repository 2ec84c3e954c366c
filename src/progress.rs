//! User progress mutations.
//!
//! Toggle a problem in the liked or completed list, and append free-text
//! goals with a bounded history. These operate on an in-memory `User`;
//! persisting the mutated lists is the storage layer's job.

use chrono::{DateTime, Utc};

use crate::error::RecommendError;
use crate::store::ProblemStore;
use crate::types::{GoalRecord, ProblemId, ProblemRecord, User};

/// Goal history keeps only this many most-recent entries.
pub const GOAL_CAP: usize = 100;

/// Which interaction list a toggle targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemList {
    Liked,
    Completed,
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Added,
    Removed,
}

/// Validated toggle request.
///
/// Construction is the boundary check: empty problem ids are refused here
/// so list operations never see them.
#[derive(Debug, Clone)]
pub struct ToggleRequest {
    problem_id: ProblemId,
    title: String,
}

impl ToggleRequest {
    pub fn new(
        problem_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, RecommendError> {
        let problem_id = problem_id.into();
        if problem_id.trim().is_empty() {
            return Err(RecommendError::InvalidInput(
                "problem id must not be empty".into(),
            ));
        }
        Ok(Self {
            problem_id: ProblemId::new(problem_id),
            title: title.into(),
        })
    }

    pub fn problem_id(&self) -> &ProblemId {
        &self.problem_id
    }
}

/// Toggle a problem record in one of the user's lists.
///
/// Removes the record when present, otherwise appends one with the
/// denormalized title and `now`. Each list holds at most one record per
/// problem, so toggling twice is a no-op pair.
pub fn toggle_record(
    user: &mut User,
    list: ProblemList,
    request: &ToggleRequest,
    now: DateTime<Utc>,
) -> ToggleAction {
    let records = match list {
        ProblemList::Liked => &mut user.liked,
        ProblemList::Completed => &mut user.completed,
    };

    match records.iter().position(|r| r.problem_id == request.problem_id) {
        Some(index) => {
            records.remove(index);
            ToggleAction::Removed
        }
        None => {
            records.push(ProblemRecord {
                problem_id: request.problem_id.clone(),
                title: request.title.clone(),
                timestamp: now,
            });
            ToggleAction::Added
        }
    }
}

/// Store-verified toggle: refuses to record an interaction with a problem
/// the catalog does not know.
pub async fn toggle_verified<S: ProblemStore + ?Sized>(
    user: &mut User,
    list: ProblemList,
    request: &ToggleRequest,
    store: &S,
    now: DateTime<Utc>,
) -> Result<ToggleAction, RecommendError> {
    if store.find_by_id(&request.problem_id).await?.is_none() {
        return Err(RecommendError::ProblemNotFound(request.problem_id.clone()));
    }
    Ok(toggle_record(user, list, request, now))
}

/// Append a goal, evicting the oldest entries beyond [`GOAL_CAP`].
pub fn push_goal(
    user: &mut User,
    goal: impl Into<String>,
    now: DateTime<Utc>,
) -> Result<(), RecommendError> {
    let goal = goal.into();
    if goal.trim().is_empty() {
        return Err(RecommendError::InvalidInput(
            "goal text must not be empty".into(),
        ));
    }

    user.goals.push(GoalRecord {
        goal,
        timestamp: now,
    });
    if user.goals.len() > GOAL_CAP {
        let overflow = user.goals.len() - GOAL_CAP;
        user.goals.drain(..overflow);
    }
    Ok(())
}
