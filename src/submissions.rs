//! Submission recording and embedding history.
//!
//! On ingest, a submission's code is embedded via the provider and persisted
//! alongside it. On review, the user's prior embeddings for the same problem
//! are retrieved (newest first) to give the model context about how their
//! attempts have evolved.

use chrono::Utc;
use uuid::Uuid;

use crate::error::{ProviderError, StoreError};
use crate::llm::EmbeddingProvider;
use crate::store::SubmissionStore;
use crate::types::{ProblemId, Submission, UserId};

/// Failures while recording a submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Submission pipeline over a store and an embedding provider.
pub struct SubmissionPipeline<'a, S: SubmissionStore + ?Sized, E: EmbeddingProvider + ?Sized> {
    store: &'a S,
    embedder: &'a E,
}

impl<'a, S: SubmissionStore + ?Sized, E: EmbeddingProvider + ?Sized> SubmissionPipeline<'a, S, E> {
    pub fn new(store: &'a S, embedder: &'a E) -> Self {
        Self { store, embedder }
    }

    /// Embed `code` and persist the submission. Returns the stored record.
    pub async fn record(
        &self,
        user_id: UserId,
        problem_id: ProblemId,
        code: String,
        lang: String,
    ) -> Result<Submission, SubmissionError> {
        let embedding = self.embedder.embed(&code).await?;
        let submission = Submission {
            id: Uuid::new_v4(),
            user_id,
            problem_id,
            code,
            lang,
            timestamp: Utc::now(),
            embedding: Some(embedding),
        };
        self.store.insert(submission.clone()).await?;
        tracing::debug!(submission = %submission.id, "recorded submission with embedding");
        Ok(submission)
    }

    /// Embeddings of the user's prior submissions for one problem, newest
    /// first. Submissions stored without an embedding are dropped.
    pub async fn embedding_history(
        &self,
        user_id: &UserId,
        problem_id: &ProblemId,
    ) -> Result<Vec<Vec<f32>>, SubmissionError> {
        let submissions = self.store.for_user_problem(user_id, problem_id).await?;
        Ok(submissions
            .into_iter()
            .filter_map(|s| s.embedding)
            .collect())
    }
}
