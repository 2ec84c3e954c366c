//! Static topic-tag vocabulary.
//!
//! Fixed list of tag names used to interpret free-text goals. The upstream
//! catalog historically carried duplicate entries (e.g. "Reservoir Sampling"
//! twice, several "Persistent B-Tree" variants four times over); those
//! inflated goal-match counts proportionally. The vocabulary here is the
//! deduplicated set, initialized once per process, so each distinct tag
//! counts once per matching goal token.
//!
//! Matching rule: a lowercase goal token matches a tag when the tag's name,
//! lowercased and split on whitespace, contains that token as a whole word.
//! The word index for that rule is built lazily on first use.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Every known topic-tag name, deduplicated, in catalog order.
pub static VOCABULARY: &[&str] = &[
    "Array",
    "String",
    "Hash Table",
    "Math",
    "Dynamic Programming",
    "Greedy",
    "Depth-First Search",
    "Breadth-First Search",
    "Binary Search",
    "Divide and Conquer",
    "Backtracking",
    "Stack",
    "Heap (Priority Queue)",
    "Graph",
    "Two Pointers",
    "Sliding Window",
    "Union Find",
    "Bit Manipulation",
    "Tree",
    "Trie",
    "Design",
    "Topological Sort",
    "Segment Tree",
    "Binary Indexed Tree",
    "Recursion",
    "Memoization",
    "Counting",
    "Matrix",
    "Simulation",
    "Geometry",
    "Game Theory",
    "Number Theory",
    "Linked List",
    "Monotonic Stack",
    "Monotonic Queue",
    "Shortest Path",
    "Minimum Spanning Tree",
    "Reservoir Sampling",
    "Randomized",
    "Rolling Hash",
    "Hash Function",
    "String Matching",
    "Combinatorics",
    "Probability and Statistics",
    "Prefix Sum",
    "Suffix Array",
    "Bitmask",
    "Greedy Algorithms",
    "Sliding Window Maximum",
    "Binary Search Tree",
    "Fenwick Tree",
    "Sparse Table",
    "Line Sweep",
    "Scanline",
    "Bucket Sort",
    "Radix Sort",
    "Counting Sort",
    "Shell Sort",
    "Quickselect",
    "Floyd-Warshall",
    "Dijkstra",
    "Bellman-Ford",
    "A* Search",
    "Eulerian Path",
    "Hamiltonian Path",
    "Disjoint Set Union",
    "Heavy-Light Decomposition",
    "Centroid Decomposition",
    "Mo's Algorithm",
    "Suffix Automaton",
    "Z-Algorithm",
    "Manacher's Algorithm",
    "KMP Algorithm",
    "Rabin-Karp Algorithm",
    "Trie Tree",
    "Suffix Tree",
    "Suffix Trie",
    "Palindromic Tree",
    "Link-Cut Tree",
    "Persistent Segment Tree",
    "Persistent Trie",
    "Persistent Union Find",
    "Persistent Stack",
    "Persistent Queue",
    "Persistent Deque",
    "Persistent Heap",
    "Persistent BST",
    "Persistent AVL Tree",
    "Persistent Treap",
    "Persistent Splay Tree",
    "Persistent Red-Black Tree",
    "Persistent B-Tree",
    "Persistent B+ Tree",
    "Persistent B* Tree",
];

/// Lowercase word → tag names containing that word.
static WORD_INDEX: OnceLock<HashMap<String, Vec<&'static str>>> = OnceLock::new();

fn word_index() -> &'static HashMap<String, Vec<&'static str>> {
    WORD_INDEX.get_or_init(|| {
        let mut index: HashMap<String, Vec<&'static str>> = HashMap::new();
        for &tag in VOCABULARY {
            for word in tag.to_lowercase().split_whitespace() {
                let tags = index.entry(word.to_string()).or_default();
                // A word never repeats within one tag name today, but the
                // guard keeps counts correct if one ever does.
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }
        index
    })
}

/// All tags whose name contains `word` as a whole (lowercase) word.
///
/// Returns an empty slice for unknown words.
pub fn tags_for_word(word: &str) -> &'static [&'static str] {
    word_index().get(word).map(Vec::as_slice).unwrap_or(&[])
}
