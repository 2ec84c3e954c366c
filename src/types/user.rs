//! User progress state.
//!
//! The core reads and mutates in-memory copies of these lists; writing them
//! back is the storage layer's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProblemId;

/// Opaque user identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user's marked interaction with a problem (like or completion).
///
/// Carries a denormalized title snapshot so lists can render without a
/// catalog round-trip. Each liked/completed list holds at most one record
/// per problem; toggling removes an existing record instead of duplicating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub problem_id: ProblemId,
    pub title: String,
    pub timestamp: DateTime<Utc>,
}

/// A free-text aspiration the user submitted, time-stamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRecord {
    pub goal: String,
    pub timestamp: DateTime<Utc>,
}

/// A platform user.
///
/// `password_hash` is opaque here: credential verification and hashing are
/// the auth layer's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub password_hash: String,
    pub liked: Vec<ProblemRecord>,
    pub completed: Vec<ProblemRecord>,
    pub goals: Vec<GoalRecord>,
}

impl User {
    /// A fresh user with empty lists.
    pub fn new(id: UserId, password_hash: impl Into<String>) -> Self {
        Self {
            id,
            password_hash: password_hash.into(),
            liked: Vec::new(),
            completed: Vec::new(),
            goals: Vec::new(),
        }
    }
}
