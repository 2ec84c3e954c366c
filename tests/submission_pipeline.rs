//! Submission Pipeline Tests
//!
//! Recording submissions through a stub embedding provider and retrieving
//! the embedding history used as review-prompt context.

use async_trait::async_trait;

use codecoach::error::ProviderError;
use codecoach::llm::{prompts, EmbeddingProvider};
use codecoach::store::MemorySubmissionStore;
use codecoach::submissions::SubmissionPipeline;
use codecoach::types::{ProblemId, UserId};

/// Embeds code as a single dimension: its length.
struct LengthEmbedder;

#[async_trait]
impl EmbeddingProvider for LengthEmbedder {
    async fn embed(&self, code: &str) -> Result<Vec<f32>, ProviderError> {
        Ok(vec![code.len() as f32])
    }
}

/// Always fails, as an unreachable provider would.
struct DownEmbedder;

#[async_trait]
impl EmbeddingProvider for DownEmbedder {
    async fn embed(&self, _code: &str) -> Result<Vec<f32>, ProviderError> {
        Err(ProviderError::Request("connection refused".into()))
    }
}

#[tokio::test]
async fn recorded_submission_carries_its_embedding() {
    let store = MemorySubmissionStore::new();
    let pipeline = SubmissionPipeline::new(&store, &LengthEmbedder);

    let submission = pipeline
        .record(
            UserId::new("u1"),
            ProblemId::new("p1"),
            "fn main() {}".into(),
            "rust".into(),
        )
        .await
        .unwrap();
    assert_eq!(submission.embedding, Some(vec![12.0]));
}

#[tokio::test]
async fn embedding_history_is_scoped_to_user_and_problem() {
    let store = MemorySubmissionStore::new();
    let pipeline = SubmissionPipeline::new(&store, &LengthEmbedder);
    let user = UserId::new("u1");
    let problem = ProblemId::new("p1");

    pipeline
        .record(user.clone(), problem.clone(), "a".into(), "rust".into())
        .await
        .unwrap();
    pipeline
        .record(user.clone(), problem.clone(), "abc".into(), "rust".into())
        .await
        .unwrap();
    // A different problem must not leak into the history.
    pipeline
        .record(user.clone(), ProblemId::new("p2"), "abcdef".into(), "rust".into())
        .await
        .unwrap();

    let history = pipeline.embedding_history(&user, &problem).await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.contains(&vec![1.0]));
    assert!(history.contains(&vec![3.0]));
}

#[tokio::test]
async fn provider_failure_surfaces_and_stores_nothing() {
    let store = MemorySubmissionStore::new();
    let pipeline = SubmissionPipeline::new(&store, &DownEmbedder);
    let user = UserId::new("u1");
    let problem = ProblemId::new("p1");

    let result = pipeline
        .record(user.clone(), problem.clone(), "x".into(), "rust".into())
        .await;
    assert!(result.is_err());

    let history = pipeline.embedding_history(&user, &problem).await.unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn history_feeds_the_review_prompt() {
    let store = MemorySubmissionStore::new();
    let pipeline = SubmissionPipeline::new(&store, &LengthEmbedder);
    let user = UserId::new("u1");
    let problem = ProblemId::new("p1");

    pipeline
        .record(user.clone(), problem.clone(), "ab".into(), "rust".into())
        .await
        .unwrap();

    let history = pipeline.embedding_history(&user, &problem).await.unwrap();
    let prompt = prompts::review_prompt("Two Sum", "fn solve() {}", &history);
    assert!(prompt.contains("### Previous Code Embeddings:\n2"));
}
