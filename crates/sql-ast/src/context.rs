//! Cross-script object identities.

use serde::{Deserialize, Serialize};

/// Context id reserved for built-in names (keywords).
pub const KEYWORD_CONTEXT_ID: u32 = u32::MAX;

/// Index value representing "no object".
pub const NULL_OBJECT_INDEX: u32 = u32::MAX;

/// A 64-bit identity for a value owned by some script context.
///
/// The high half is the owning script's context id (`0xFFFFFFFF` for
/// built-in keywords), the low half an index into that script's storage
/// (`0xFFFFFFFF` = null). All cross-script references travel as this pair
/// and are resolved lazily through the catalog, never as owning pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextObjectId {
    /// The owning context
    context_id: u32,
    /// The index within the context
    index: u32,
}

impl ContextObjectId {
    /// The null id (keyword context, null index).
    pub const NULL: ContextObjectId =
        ContextObjectId { context_id: KEYWORD_CONTEXT_ID, index: NULL_OBJECT_INDEX };

    #[inline]
    pub fn new(context_id: u32, index: u32) -> Self {
        debug_assert!(context_id != 0, "context id 0 is reserved");
        Self { context_id, index }
    }

    /// Identity of a built-in keyword name.
    #[inline]
    pub const fn keyword(index: u32) -> Self {
        Self { context_id: KEYWORD_CONTEXT_ID, index }
    }

    #[inline]
    pub const fn context_id(&self) -> u32 {
        self.context_id
    }

    #[inline]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// An id is null iff its index is null, whatever its context.
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.index == NULL_OBJECT_INDEX
    }
}

impl Default for ContextObjectId {
    fn default() -> Self {
        Self::NULL
    }
}

impl From<ContextObjectId> for u64 {
    fn from(id: ContextObjectId) -> u64 {
        (u64::from(id.context_id) << 32) | u64::from(id.index)
    }
}

impl From<u64> for ContextObjectId {
    fn from(raw: u64) -> Self {
        Self { context_id: (raw >> 32) as u32, index: raw as u32 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_compares_both_halves() {
        let a = ContextObjectId::new(1, 7);
        let b = ContextObjectId::new(2, 7);
        let c = ContextObjectId::new(1, 8);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, ContextObjectId::new(1, 7));
    }

    #[test]
    fn null_is_index_based() {
        assert!(ContextObjectId::NULL.is_null());
        assert!(ContextObjectId::new(3, NULL_OBJECT_INDEX).is_null());
        assert!(!ContextObjectId::new(3, 0).is_null());
    }

    #[test]
    fn u64_roundtrip() {
        let id = ContextObjectId::new(0xDEAD, 0xBEEF);
        let raw: u64 = id.into();
        assert_eq!(raw, 0x0000_DEAD_0000_BEEF);
        assert_eq!(ContextObjectId::from(raw), id);
    }
}
