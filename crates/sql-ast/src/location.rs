//! Byte-based source locations.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[offset, offset + length)` in the script text.
///
/// Stored as offset + length (not start/end) because that is the shape the
/// packed node buffer and the highlighting arrays carry across the host
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    /// Starting byte offset
    pub offset: u32,
    /// Length in bytes
    pub length: u32,
}

impl Location {
    #[inline]
    pub const fn new(offset: u32, length: u32) -> Self {
        Self { offset, length }
    }

    /// An empty location at a position.
    #[inline]
    pub const fn at(offset: u32) -> Self {
        Self { offset, length: 0 }
    }

    #[inline]
    pub const fn begin(&self) -> u32 {
        self.offset
    }

    #[inline]
    pub const fn end(&self) -> u32 {
        self.offset + self.length
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// True if the byte offset falls inside the range.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        offset >= self.offset && offset < self.end()
    }

    /// The smallest location covering both.
    pub fn union(&self, other: Location) -> Location {
        let begin = self.offset.min(other.offset);
        let end = self.end().max(other.end());
        Location { offset: begin, length: end - begin }
    }

    /// The smallest location covering all of `locations`. Empty input
    /// yields an empty location at 0.
    pub fn spanning(locations: impl IntoIterator<Item = Location>) -> Location {
        let mut iter = locations.into_iter();
        let Some(first) = iter.next() else {
            return Location::at(0);
        };
        iter.fold(first, |acc, loc| acc.union(loc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn contains_is_half_open() {
        let loc = Location::new(4, 3);
        assert!(!loc.contains(3));
        assert!(loc.contains(4));
        assert!(loc.contains(6));
        assert!(!loc.contains(7));
    }

    #[test]
    fn spanning_covers_all() {
        let span = Location::spanning([Location::new(10, 2), Location::new(4, 3), Location::new(20, 1)]);
        assert_eq!(span, Location::new(4, 17));
        assert_eq!(Location::spanning([]), Location::at(0));
    }
}
