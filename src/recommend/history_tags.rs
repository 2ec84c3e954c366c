//! History tag extraction.
//!
//! Turns a user's liked or completed problem records into tag occurrence
//! counts by looking each problem up in the catalog. Applied once per list,
//! producing two independent maps.

use chrono::{DateTime, Duration, Utc};

use crate::error::StoreError;
use crate::store::ProblemStore;
use crate::types::{ProblemRecord, TagCounts};

/// Count tag occurrences across the problems a user interacted with in the
/// last [`HISTORY_WINDOW_DAYS`](super::HISTORY_WINDOW_DAYS).
///
/// A record whose problem no longer exists contributes nothing; only a store
/// failure propagates.
pub async fn count_history_tags<S: ProblemStore + ?Sized>(
    records: &[ProblemRecord],
    store: &S,
    now: DateTime<Utc>,
) -> Result<TagCounts, StoreError> {
    let cutoff = now - Duration::days(super::HISTORY_WINDOW_DAYS);
    let mut counts = TagCounts::new();

    for record in records {
        if record.timestamp <= cutoff {
            continue;
        }
        let Some(problem) = store.find_by_id(&record.problem_id).await? else {
            tracing::debug!(problem_id = %record.problem_id, "history record references missing problem, skipping");
            continue;
        };
        for tag in &problem.topic_tags {
            *counts.entry(tag.name.clone()).or_insert(0) += 1;
        }
    }

    Ok(counts)
}
