//! Seeded walkthrough of the recommendation pipeline.
//!
//! Loads a handful of problems into the in-memory store, replays a short
//! user history, and prints the ranked pool plus one selected problem.
//! Useful for eyeballing scoring changes without a backend.

use anyhow::Result;
use chrono::Utc;

use codecoach::progress::{push_goal, toggle_record, ProblemList, ToggleRequest};
use codecoach::recommend::Recommender;
use codecoach::store::MemoryProblemStore;
use codecoach::types::{
    Difficulty, Problem, ProblemId, ProblemStats, TopicTag, User, UserId,
};

fn problem(id: &str, title: &str, difficulty: Difficulty, tags: &[&str]) -> Problem {
    Problem {
        id: ProblemId::new(id),
        title: title.to_string(),
        content: String::new(),
        difficulty,
        likes: 0,
        dislikes: 0,
        example_testcases: String::new(),
        code_snippets: vec![],
        topic_tags: tags
            .iter()
            .map(|t| TopicTag::new(*t, t.to_lowercase().replace(' ', "-")))
            .collect(),
        stats: ProblemStats::default(),
        hints: vec![],
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "codecoach=debug".into()),
        )
        .init();

    let store = MemoryProblemStore::with_problems([
        problem("1", "Two Sum", Difficulty::Easy, &["Array", "Hash Table"]),
        problem("53", "Maximum Subarray", Difficulty::Medium, &["Array", "Dynamic Programming"]),
        problem("70", "Climbing Stairs", Difficulty::Easy, &["Dynamic Programming", "Math"]),
        problem("200", "Number of Islands", Difficulty::Medium, &["Graph", "Depth-First Search"]),
        problem("208", "Implement Trie", Difficulty::Medium, &["Trie", "Design"]),
        problem("300", "Longest Increasing Subsequence", Difficulty::Medium, &["Dynamic Programming", "Binary Search"]),
    ]);

    let now = Utc::now();
    let mut user = User::new(UserId::new("demo"), "unused");
    push_goal(&mut user, "improve dynamic programming", now)?;
    toggle_record(
        &mut user,
        ProblemList::Liked,
        &ToggleRequest::new("53", "Maximum Subarray")?,
        now,
    );
    toggle_record(
        &mut user,
        ProblemList::Completed,
        &ToggleRequest::new("1", "Two Sum")?,
        now,
    );

    let recommender = Recommender::new(&store);
    let ranked = recommender.ranked_candidates_at(&user, now).await?;

    println!("ranked pool ({} candidates):", ranked.len());
    for p in &ranked {
        println!("  [{}] {}", p.id, p.title);
    }

    let picked = recommender
        .recommend_one_at(&user, now, &mut rand::thread_rng())
        .await?;
    println!("\nselected:\n{}", serde_json::to_string_pretty(&picked)?);

    Ok(())
}
