//! Cursor completion for SQL scripts.
//!
//! Candidates come from three sources: the grammar symbols acceptable at
//! the cursor token (via `parse_until`), names visible in scope (current
//! script and catalog), and the precomputed keyword suffix trie scoring
//! partially typed input. Scores combine match quality, tag weights, and
//! locality; the final ranking runs through the bounded
//! [`TopKHeap`](sql_arena::TopKHeap).

mod complete;
mod index;
mod trie;

pub use complete::{
    Completion, CompletionContext, CompletionLocality, CompletionTag, DEFAULT_LIMIT, complete,
};
pub use index::CompletionIndex;
pub use trie::{SuffixTrie, TrieEntry};
