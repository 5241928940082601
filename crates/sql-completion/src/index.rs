//! The precomputed completion index.

use std::sync::OnceLock;

use crate::trie::SuffixTrie;

/// Precomputed completion data shared by every script.
#[derive(Debug)]
pub struct CompletionIndex {
    /// Suffix trie over the keyword table
    pub suffix_trie: SuffixTrie,
}

impl CompletionIndex {
    /// The keyword index, built once per process.
    pub fn keywords() -> &'static CompletionIndex {
        static KEYWORDS: OnceLock<CompletionIndex> = OnceLock::new();
        KEYWORDS.get_or_init(|| CompletionIndex {
            suffix_trie: SuffixTrie::build(sql_scanner::keywords::all()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keyword_suffix_count() {
        let keywords = CompletionIndex::keywords();
        assert_eq!(keywords.suffix_trie.entries().len(), 2875);
    }
}
