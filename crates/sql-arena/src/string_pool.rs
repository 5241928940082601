//! Interned string storage for scanned names.

use rustc_hash::FxHashMap;

/// Id of an interned string. Valid for the lifetime of its [`StringPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PooledString(u32);

impl PooledString {
    /// Raw index into the pool's entry table.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Block-allocated copies of scanned text.
///
/// The scanner interns every name it encounters exactly once; later stages
/// address names by [`PooledString`] id instead of carrying slices that
/// borrow the source rope. Blocks are never reallocated, entries only grow.
#[derive(Debug, Default, PartialEq)]
pub struct StringPool {
    /// The text blocks
    blocks: Vec<String>,
    /// (block, byte range) per interned string
    entries: Vec<(u32, u32, u32)>,
    /// Dedup map from interned text to entry id
    ids: FxHashMap<String, PooledString>,
}

/// Byte capacity of a fresh block. Oversized strings get a dedicated block.
const BLOCK_CAPACITY: usize = 4096;

impl StringPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct interned strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Intern a copy of `text`, deduplicating repeated inserts.
    pub fn allocate_copy(&mut self, text: &str) -> PooledString {
        if let Some(&id) = self.ids.get(text) {
            return id;
        }
        let needs_block = match self.blocks.last() {
            Some(block) => block.len() + text.len() > block.capacity(),
            None => true,
        };
        if needs_block {
            self.blocks.push(String::with_capacity(BLOCK_CAPACITY.max(text.len())));
        }
        let block_id = self.blocks.len() - 1;
        let block = &mut self.blocks[block_id];
        let begin = block.len();
        block.push_str(text);
        let id = PooledString(self.entries.len() as u32);
        self.entries.push((block_id as u32, begin as u32, text.len() as u32));
        self.ids.insert(text.to_owned(), id);
        id
    }

    /// Look up an already-interned string.
    pub fn find(&self, text: &str) -> Option<PooledString> {
        self.ids.get(text).copied()
    }

    /// Read an interned string back.
    pub fn get(&self, id: PooledString) -> Option<&str> {
        let &(block, begin, len) = self.entries.get(id.0 as usize)?;
        self.blocks.get(block as usize).map(|b| &b[begin as usize..(begin + len) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn intern_and_read_back() {
        let mut pool = StringPool::new();
        let foo = pool.allocate_copy("foo");
        let bar = pool.allocate_copy("bar");
        assert_ne!(foo, bar);
        assert_eq!(pool.get(foo), Some("foo"));
        assert_eq!(pool.get(bar), Some("bar"));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn interning_deduplicates() {
        let mut pool = StringPool::new();
        let a = pool.allocate_copy("select");
        let b = pool.allocate_copy("select");
        assert_eq!(a, b);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.find("select"), Some(a));
        assert_eq!(pool.find("from"), None);
    }

    #[test]
    fn oversized_strings_get_their_own_block() {
        let mut pool = StringPool::new();
        let big = "x".repeat(BLOCK_CAPACITY * 2);
        let small = pool.allocate_copy("small");
        let huge = pool.allocate_copy(&big);
        assert_eq!(pool.get(huge), Some(big.as_str()));
        assert_eq!(pool.get(small), Some("small"));
    }
}
