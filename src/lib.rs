//! codecoach: coding-practice platform core
//!
//! In-process engine behind a coding-practice backend: the problem catalog
//! model, per-user progress tracking, and the tag-based recommendation
//! pipeline that scores unsolved problems from a user's goals, likes and
//! completion history.
//!
//! ## Architecture
//!
//! - **Tags**: fixed topic-tag vocabulary used to interpret free-text goals
//! - **Recommend**: goal/history extraction → tag scoring → candidate
//!   ranking with catalog backfill → uniform random selection
//! - **Catalog**: paged browsing with fuzzy title search, difficulty
//!   filtering, and per-user liked/completed views
//! - **Progress**: like/complete toggles and capped goal history
//! - **Submissions**: code submissions embedded at ingest, with per-problem
//!   embedding history for model context
//! - **Store / LLM**: capability traits for the storage and
//!   generative-model collaborators; both stay outside this crate

pub mod catalog;
pub mod error;
pub mod llm;
pub mod progress;
pub mod recommend;
pub mod store;
pub mod submissions;
pub mod tags;
pub mod types;

// Re-export the core pipeline surface
pub use recommend::{
    rank_candidates, score_tags, select_one, Recommender, BACKFILL_TAG_COUNT, COMPLETED_WEIGHT,
    GOAL_WEIGHT, GOAL_WINDOW_DAYS, HISTORY_WINDOW_DAYS, LIKED_WEIGHT, TARGET_CANDIDATES,
};

// Re-export commonly used types
pub use types::{
    Difficulty, GoalRecord, Problem, ProblemId, ProblemRecord, Submission, TagCounts, TagScores,
    TopicTag, User, UserId,
};

// Re-export catalog browsing
pub use catalog::{fetch_page, CatalogPage, CatalogView, PageRequest};

// Re-export errors and store capabilities
pub use error::{ProviderError, RecommendError, StoreError};
pub use store::{
    MemoryProblemStore, MemorySubmissionStore, ProblemFilter, ProblemStore, SubmissionStore,
};
