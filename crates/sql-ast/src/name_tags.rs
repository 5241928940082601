//! Usage tags on name-dictionary entries.

use serde::{Deserialize, Serialize};

/// A single way a name was used in a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum NameTag {
    Keyword = 1,
    DatabaseName = 2,
    SchemaName = 4,
    TableName = 8,
    TableAlias = 16,
    ColumnName = 32,
}

/// Bitset of [`NameTag`]s, ORed in as the pipeline learns how a name is
/// used. Completion weighs candidates by these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameTags(u8);

impl NameTags {
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn contains(&self, tag: NameTag) -> bool {
        self.0 & (tag as u8) != 0
    }

    #[inline]
    pub fn insert(&mut self, tag: NameTag) {
        self.0 |= tag as u8;
    }

    #[inline]
    pub fn remove(&mut self, tag: NameTag) {
        self.0 &= !(tag as u8);
    }

    #[inline]
    pub fn union(&mut self, other: NameTags) {
        self.0 |= other.0;
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Visit every set tag.
    pub fn for_each(&self, mut f: impl FnMut(NameTag)) {
        for tag in [
            NameTag::Keyword,
            NameTag::DatabaseName,
            NameTag::SchemaName,
            NameTag::TableName,
            NameTag::TableAlias,
            NameTag::ColumnName,
        ] {
            if self.contains(tag) {
                f(tag);
            }
        }
    }
}

impl From<NameTag> for NameTags {
    fn from(tag: NameTag) -> Self {
        Self(tag as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut tags = NameTags::empty();
        tags.insert(NameTag::TableName);
        tags.insert(NameTag::ColumnName);
        assert!(tags.contains(NameTag::TableName));
        assert!(!tags.contains(NameTag::Keyword));
        tags.remove(NameTag::TableName);
        assert!(!tags.contains(NameTag::TableName));
        assert!(tags.contains(NameTag::ColumnName));
    }

    #[test]
    fn for_each_visits_set_tags() {
        let mut tags = NameTags::from(NameTag::SchemaName);
        tags.insert(NameTag::TableAlias);
        let mut seen = Vec::new();
        tags.for_each(|tag| seen.push(tag));
        assert_eq!(seen, vec![NameTag::SchemaName, NameTag::TableAlias]);
    }
}
