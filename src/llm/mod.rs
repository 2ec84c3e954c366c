//! Generative-model boundary.
//!
//! The platform forwards code to a third-party generative model for three
//! jobs: reviewing a submission, producing a reference answer, and
//! explaining a problem. This module owns the prompt assembly and the two
//! capability traits; the HTTP client behind them lives outside this crate.

pub mod prompts;

use async_trait::async_trait;

use crate::error::ProviderError;

/// Text-completion capability (chat-style, single prompt in, text out).
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Code-embedding capability.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, code: &str) -> Result<Vec<f32>, ProviderError>;
}
