//! Problem catalog entities.
//!
//! Problems are read-only from the core's perspective: the storage layer
//! owns them, the recommendation pipeline only looks at `topic_tags`.

use serde::{Deserialize, Serialize};

/// Opaque problem identity, as issued by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemId(pub String);

impl ProblemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProblemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Topic/category label attached to a problem (e.g. "Dynamic Programming").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicTag {
    pub name: String,
    pub slug: String,
}

impl TopicTag {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// Problem difficulty bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Starter code snippet for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub lang: String,
    pub code: String,
}

/// Acceptance statistics as reported by the upstream catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemStats {
    pub total_accepted: String,
    pub total_submission: String,
    pub total_accepted_raw: u64,
    pub total_submission_raw: u64,
    pub ac_rate: String,
}

/// A catalog problem.
///
/// Only `id`, `title` and `topic_tags` participate in scoring; the rest is
/// carried for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: ProblemId,
    pub title: String,
    pub content: String,
    pub difficulty: Difficulty,
    pub likes: u64,
    pub dislikes: u64,
    pub example_testcases: String,
    pub code_snippets: Vec<CodeSnippet>,
    pub topic_tags: Vec<TopicTag>,
    pub stats: ProblemStats,
    pub hints: Vec<String>,
}

impl Problem {
    /// True when any of the problem's tags matches `name` exactly.
    pub fn has_tag(&self, name: &str) -> bool {
        self.topic_tags.iter().any(|t| t.name == name)
    }
}
