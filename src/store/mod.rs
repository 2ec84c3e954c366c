//! Storage capability traits.
//!
//! The core never talks to a concrete database. It consumes two narrow
//! capabilities — problem lookup/query and submission append/fetch — and the
//! embedding application wires in whatever backend it runs against.
//! [`memory`] provides in-process implementations used by tests and small
//! deployments.

mod memory;

pub use memory::{MemoryProblemStore, MemorySubmissionStore};

use std::collections::HashSet;

use async_trait::async_trait;
use regex::{Regex, RegexBuilder};

use crate::error::StoreError;
use crate::types::{Difficulty, Problem, ProblemId, Submission, UserId};

/// Catalog query: identity whitelist/blacklist, any-of tag matching, fuzzy
/// title search, and a difficulty filter.
///
/// All fields compose with AND; an unset field matches everything. Mirrors
/// the shape of the backfill query (`exclude` + `any_tags`), the liked-list
/// fetch (`include`), and the catalog-browse query (`title_search` +
/// `difficulty`).
#[derive(Debug, Clone, Default)]
pub struct ProblemFilter {
    /// Only return problems with these identities.
    pub include: Option<HashSet<ProblemId>>,
    /// Never return problems with these identities.
    pub exclude: HashSet<ProblemId>,
    /// Only return problems carrying at least one of these tag names.
    pub any_tags: Option<Vec<String>>,
    /// Fuzzy, case-insensitive title search: the query's characters must
    /// appear in the title in order, with anything in between.
    pub title_search: Option<String>,
    /// Only return problems of this difficulty.
    pub difficulty: Option<Difficulty>,
}

impl ProblemFilter {
    /// Compile the fuzzy title pattern: each query character escaped and
    /// interleaved with `.*`, matched case-insensitively.
    pub fn title_regex(&self) -> Option<Regex> {
        self.title_search.as_ref().map(|search| {
            let pattern = search
                .chars()
                .map(|c| regex::escape(&c.to_string()))
                .collect::<Vec<_>>()
                .join(".*");
            RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .expect("escaped pattern is valid")
        })
    }

    /// True when `problem` satisfies every set constraint.
    ///
    /// Compiles the title pattern per call; stores filtering many problems
    /// should compile once via [`title_regex`](Self::title_regex) and use
    /// [`matches_with`](Self::matches_with).
    pub fn matches(&self, problem: &Problem) -> bool {
        self.matches_with(problem, self.title_regex().as_ref())
    }

    /// [`matches`](Self::matches) with a pre-compiled title pattern.
    pub fn matches_with(&self, problem: &Problem, title_re: Option<&Regex>) -> bool {
        if let Some(include) = &self.include {
            if !include.contains(&problem.id) {
                return false;
            }
        }
        if self.exclude.contains(&problem.id) {
            return false;
        }
        if let Some(tags) = &self.any_tags {
            if !tags.iter().any(|t| problem.has_tag(t)) {
                return false;
            }
        }
        if let Some(re) = title_re {
            if !re.is_match(&problem.title) {
                return false;
            }
        }
        if let Some(difficulty) = self.difficulty {
            if problem.difficulty != difficulty {
                return false;
            }
        }
        true
    }
}

/// Read-only problem catalog access.
#[async_trait]
pub trait ProblemStore: Send + Sync {
    /// Look up a single problem. `Ok(None)` means the identity is unknown —
    /// callers in the recommendation pipeline treat that as "skip", not as
    /// a failure.
    async fn find_by_id(&self, id: &ProblemId) -> Result<Option<Problem>, StoreError>;

    /// Return every problem satisfying `filter`, in a stable store-defined
    /// order.
    async fn query(&self, filter: &ProblemFilter) -> Result<Vec<Problem>, StoreError>;
}

/// Submission persistence.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn insert(&self, submission: Submission) -> Result<(), StoreError>;

    /// All submissions one user made for one problem, newest first.
    async fn for_user_problem(
        &self,
        user_id: &UserId,
        problem_id: &ProblemId,
    ) -> Result<Vec<Submission>, StoreError>;
}
