//! The per-script name dictionary.

use rustc_hash::FxHashMap;
use sql_arena::{PooledString, StringPool};
use sql_ast::{Location, NameTag, NameTags};

/// Backing storage of one dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq)]
enum NameText {
    /// Interned copy of input text
    Pooled(PooledString),
    /// Static text (keywords), no copy
    Static(&'static str),
}

/// Ordered dictionary of the names appearing in a script.
///
/// Entry ids are dense and stable; the first registration of a text wins
/// and later registrations merge their tags into the existing entry. Names
/// taken from the input are copied into the string pool; keywords register
/// their static text without a copy.
#[derive(Debug, Default, PartialEq)]
pub struct NameDictionary {
    /// Location of the first occurrence, per entry
    locations: Vec<Location>,
    /// Usage tags, per entry
    tags: Vec<NameTags>,
    /// The entry text
    texts: Vec<NameText>,
    /// The interned input names
    pool: StringPool,
    /// Text to entry id
    ids: FxHashMap<String, u32>,
}

impl NameDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Register an input name, copying it into the pool.
    pub fn register(&mut self, text: &str, location: Location, tag: Option<NameTag>) -> u32 {
        if let Some(&id) = self.ids.get(text) {
            if let Some(tag) = tag {
                self.tags[id as usize].insert(tag);
            }
            return id;
        }
        let pooled = self.pool.allocate_copy(text);
        self.push_entry(text, NameText::Pooled(pooled), location, tag)
    }

    /// Register a keyword used as a name. The static text is referenced,
    /// not copied.
    pub fn register_keyword_as_name(
        &mut self,
        text: &'static str,
        location: Location,
    ) -> u32 {
        if let Some(&id) = self.ids.get(text) {
            self.tags[id as usize].insert(NameTag::Keyword);
            return id;
        }
        self.push_entry(text, NameText::Static(text), location, Some(NameTag::Keyword))
    }

    fn push_entry(
        &mut self,
        text: &str,
        stored: NameText,
        location: Location,
        tag: Option<NameTag>,
    ) -> u32 {
        let id = self.locations.len() as u32;
        self.locations.push(location);
        let mut tags = NameTags::empty();
        if let Some(tag) = tag {
            tags.insert(tag);
        }
        self.tags.push(tags);
        self.texts.push(stored);
        self.ids.insert(text.to_owned(), id);
        id
    }

    /// Read an entry's text.
    pub fn text(&self, id: u32) -> Option<&str> {
        match self.texts.get(id as usize)? {
            NameText::Pooled(pooled) => self.pool.get(*pooled),
            NameText::Static(text) => Some(text),
        }
    }

    /// An entry's first-occurrence location.
    pub fn location(&self, id: u32) -> Option<Location> {
        self.locations.get(id as usize).copied()
    }

    /// An entry's usage tags.
    pub fn tags(&self, id: u32) -> NameTags {
        self.tags.get(id as usize).copied().unwrap_or_default()
    }

    /// Merge a tag into an existing entry.
    pub fn tag(&mut self, id: u32, tag: NameTag) {
        if let Some(tags) = self.tags.get_mut(id as usize) {
            tags.insert(tag);
        }
    }

    /// Find an entry by exact text.
    pub fn find(&self, text: &str) -> Option<u32> {
        self.ids.get(text).copied()
    }

    /// Iterate over `(id, text, tags)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str, NameTags)> {
        (0..self.len() as u32).filter_map(move |id| {
            self.text(id).map(|text| (id, text, self.tags(id)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registration_deduplicates_and_merges_tags() {
        let mut dict = NameDictionary::new();
        let a = dict.register("orders", Location::new(0, 6), Some(NameTag::TableName));
        let b = dict.register("orders", Location::new(20, 6), Some(NameTag::ColumnName));
        assert_eq!(a, b);
        assert_eq!(dict.len(), 1);
        assert!(dict.tags(a).contains(NameTag::TableName));
        assert!(dict.tags(a).contains(NameTag::ColumnName));
        // First location wins.
        assert_eq!(dict.location(a), Some(Location::new(0, 6)));
    }

    #[test]
    fn keyword_names_are_static() {
        let mut dict = NameDictionary::new();
        let id = dict.register_keyword_as_name("select", Location::new(0, 6));
        assert_eq!(dict.text(id), Some("select"));
        assert!(dict.tags(id).contains(NameTag::Keyword));
    }

    #[test]
    fn location_reads_back_to_text() {
        let input = "select a, b from t";
        let mut dict = NameDictionary::new();
        for (begin, len) in [(7usize, 1usize), (10, 1), (17, 1)] {
            let text = &input[begin..begin + len];
            let id = dict.register(text, Location::new(begin as u32, len as u32), None);
            let loc = dict.location(id).map(|l| (l.offset as usize, l.length as usize));
            assert_eq!(loc, Some((begin, len)));
            assert_eq!(dict.text(id), Some(text));
        }
    }
}
