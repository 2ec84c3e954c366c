//! In-memory store implementations.
//!
//! Insertion-ordered so queries are deterministic, which the ranker's
//! stable-sort guarantees depend on in tests.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{Problem, ProblemId, Submission, UserId};

use super::{ProblemFilter, ProblemStore, SubmissionStore};

/// Problem catalog held in a `Vec`, insertion-ordered.
///
/// O(n) lookups are fine at this scale; the point is a faithful, ordered
/// implementation of [`ProblemStore`] for tests and embedders.
#[derive(Default)]
pub struct MemoryProblemStore {
    problems: RwLock<Vec<Problem>>,
}

impl MemoryProblemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-loaded with `problems`.
    pub fn with_problems(problems: impl IntoIterator<Item = Problem>) -> Self {
        Self {
            problems: RwLock::new(problems.into_iter().collect()),
        }
    }

    /// Insert or replace a problem, keyed by identity.
    pub fn upsert(&self, problem: Problem) {
        let mut problems = self.problems.write().expect("problem store lock poisoned");
        match problems.iter_mut().find(|p| p.id == problem.id) {
            Some(slot) => *slot = problem,
            None => problems.push(problem),
        }
    }
}

#[async_trait]
impl ProblemStore for MemoryProblemStore {
    async fn find_by_id(&self, id: &ProblemId) -> Result<Option<Problem>, StoreError> {
        let problems = self.problems.read().expect("problem store lock poisoned");
        Ok(problems.iter().find(|p| &p.id == id).cloned())
    }

    async fn query(&self, filter: &ProblemFilter) -> Result<Vec<Problem>, StoreError> {
        let title_re = filter.title_regex();
        let problems = self.problems.read().expect("problem store lock poisoned");
        Ok(problems
            .iter()
            .filter(|p| filter.matches_with(p, title_re.as_ref()))
            .cloned()
            .collect())
    }
}

/// Submission log held in a `Vec`, append-ordered.
#[derive(Default)]
pub struct MemorySubmissionStore {
    submissions: RwLock<Vec<Submission>>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn insert(&self, submission: Submission) -> Result<(), StoreError> {
        let mut submissions = self
            .submissions
            .write()
            .expect("submission store lock poisoned");
        submissions.push(submission);
        Ok(())
    }

    async fn for_user_problem(
        &self,
        user_id: &UserId,
        problem_id: &ProblemId,
    ) -> Result<Vec<Submission>, StoreError> {
        let submissions = self
            .submissions
            .read()
            .expect("submission store lock poisoned");
        let mut matched: Vec<Submission> = submissions
            .iter()
            .filter(|s| &s.user_id == user_id && &s.problem_id == problem_id)
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(matched)
    }
}
