//! Prompt templates for the three model jobs.
//!
//! Pure string assembly, unit-testable without a provider. The review
//! prompt carries the user's historical submission embeddings as a compact
//! context block (values comma-joined, submissions semicolon-joined).

/// Serialize embedding vectors for the review prompt's context block.
fn embeddings_block(embeddings: &[Vec<f32>]) -> String {
    embeddings
        .iter()
        .map(|e| {
            e.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join(";")
}

/// Structured code-review prompt: score, issues, and exactly one next step.
pub fn review_prompt(title: &str, code: &str, embeddings: &[Vec<f32>]) -> String {
    format!(
        r#"You are a professional LeetCode code reviewer. Review the user's submission using the following structured and concise format:

1. **Code Score (0-10)**: Give a numeric score, followed by a *very short* justification (max 20 words).
2. **Issues Detected**: Identify any bugs, inefficiencies, or code smells (max 100 words, be specific and technical).
3. **Next Step Only**: Suggest exactly one next step to improve or debug the code. Do not reveal full answers or code (max 100 words, no code, only concise clue-style advice).

### Previous Code Embeddings:
{embeddings}

### Problem:
{title}

### Code:
```
{code}
```
"#,
        embeddings = embeddings_block(embeddings),
        title = title,
        code = code,
    )
}

/// Answer-generation prompt. The problem statement is truncated at its
/// first "Example" section so worked examples don't leak into the request.
pub fn answer_prompt(title: &str, content: &str, lang: &str) -> String {
    let statement = content.split("Example").next().unwrap_or("").trim();
    format!(
        "Please solve the following LeetCode problem and only return the code in {lang}.\n\
         Do not include any explanation.\n\
         Title: {title}\n\
         Content: {statement}\n"
    )
}

/// Problem-analysis prompt: explain the problem without solving it.
pub fn analysis_prompt(content: &str) -> String {
    format!(
        r#"You are a LeetCode assistant that helps users understand algorithm problems.

Analyze the following problem description and explain it clearly to a student who has intermediate-level programming skills.

Your output must include:

1. **Problem Summary**: A concise rephrasing of what the problem is asking.
2. **Constraints and Edge Cases**: What are the important constraints and any tricky edge cases to consider?
3. **Core Requirement**: What is the essence of the problem and what kind of algorithm is likely needed? (e.g. sliding window, greedy, DP)
4. **Clarification Example**: Take one sample input and walk through it step by step.

Do **not** provide the solution or hints toward solving it. Just explain the problem.

### Problem Description:
{content}
"#
    )
}
