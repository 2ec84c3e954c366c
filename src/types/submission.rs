//! Code submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ProblemId, UserId};

/// A single code submission, optionally annotated with the embedding the
/// provider computed for it at ingest time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub user_id: UserId,
    pub problem_id: ProblemId,
    pub code: String,
    pub lang: String,
    pub timestamp: DateTime<Utc>,
    /// Absent when the embedding provider was unavailable at submit time.
    pub embedding: Option<Vec<f32>>,
}
