//! The mutable script text.

use ropey::Rope;

use crate::boundary::is_codepoint_boundary_byte;

/// A chunked mutable text buffer addressed by byte offset.
///
/// Edits run in O(log N) through the backing rope. All incoming byte
/// positions are snapped to UTF-8 code-point boundaries (bias left), so an
/// edit can never split a code point regardless of what the host hands in.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    pub fn from_text(text: &str) -> Self {
        Self { rope: Rope::from_str(text) }
    }

    /// Total length in bytes.
    #[inline]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Snap a byte offset to the closest code-point boundary at or before
    /// it, clamping to the buffer length.
    pub fn snap_offset(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.rope.len_bytes());
        while offset > 0 && offset < self.rope.len_bytes() {
            let (chunk, chunk_start, _, _) = self.rope.chunk_at_byte(offset);
            let byte = chunk.as_bytes()[offset - chunk_start];
            if is_codepoint_boundary_byte(byte) {
                break;
            }
            offset -= 1;
        }
        offset
    }

    /// Insert `text` at a byte offset. Returns the snapped offset the text
    /// actually landed on.
    pub fn insert_text_at(&mut self, offset: usize, text: &str) -> usize {
        let offset = self.snap_offset(offset);
        let char_idx = self.rope.byte_to_char(offset);
        self.rope.insert(char_idx, text);
        offset
    }

    /// Erase `length` bytes starting at a byte offset. The range is clamped
    /// to the buffer and both ends snap to code-point boundaries. Returns
    /// the (offset, length) actually erased.
    pub fn erase_text_at(&mut self, offset: usize, length: usize) -> (usize, usize) {
        let begin = self.snap_offset(offset);
        let end = self.snap_offset(offset.saturating_add(length));
        if begin >= end {
            return (begin, 0);
        }
        let char_begin = self.rope.byte_to_char(begin);
        let char_end = self.rope.byte_to_char(end);
        self.rope.remove(char_begin..char_end);
        (begin, end - begin)
    }

    /// Read `[offset, offset + length)` as one contiguous `&str`.
    ///
    /// When the range lies inside a single rope chunk the slice borrows the
    /// rope directly; otherwise the bytes are copied into `scratch` and the
    /// copy is returned.
    pub fn read<'a>(&'a self, offset: usize, length: usize, scratch: &'a mut String) -> &'a str {
        let begin = self.snap_offset(offset);
        let end = self.snap_offset(offset.saturating_add(length).min(self.rope.len_bytes()));
        if begin >= end {
            return "";
        }
        let slice = self.rope.byte_slice(begin..end);
        match slice.as_str() {
            Some(contiguous) => contiguous,
            None => {
                scratch.clear();
                for chunk in slice.chunks() {
                    scratch.push_str(chunk);
                }
                scratch.as_str()
            }
        }
    }

    /// Copy the whole buffer out.
    pub fn to_text(&self) -> String {
        self.rope.to_string()
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_and_read() {
        let mut buffer = TextBuffer::new();
        buffer.insert_text_at(0, "select 1");
        let mut scratch = String::new();
        assert_eq!(buffer.read(0, 8, &mut scratch), "select 1");
        assert_eq!(buffer.read(7, 1, &mut scratch), "1");
        assert_eq!(buffer.len_bytes(), 8);
    }

    #[test]
    fn insert_snaps_into_multibyte() {
        let mut buffer = TextBuffer::from_text("a€b");
        // Offset 2 is inside the euro sign; the insert lands before it.
        let landed = buffer.insert_text_at(2, "x");
        assert_eq!(landed, 1);
        assert_eq!(buffer.to_text(), "ax€b");
    }

    #[test]
    fn erase_clamps_and_aligns() {
        let mut buffer = TextBuffer::from_text("a€b");
        let (offset, length) = buffer.erase_text_at(2, 100);
        assert_eq!((offset, length), (1, 4));
        assert_eq!(buffer.to_text(), "a");

        let mut buffer = TextBuffer::from_text("abc");
        let (offset, length) = buffer.erase_text_at(3, 5);
        assert_eq!((offset, length), (3, 0));
        assert_eq!(buffer.to_text(), "abc");
    }

    #[test]
    fn read_past_end_is_clamped() {
        let buffer = TextBuffer::from_text("abc");
        let mut scratch = String::new();
        assert_eq!(buffer.read(1, 100, &mut scratch), "bc");
        assert_eq!(buffer.read(100, 5, &mut scratch), "");
    }

    #[test]
    fn read_spanning_chunks_copies() {
        let text = "x".repeat(10_000);
        let buffer = TextBuffer::from_text(&text);
        let mut scratch = String::new();
        assert_eq!(buffer.read(0, 10_000, &mut scratch).len(), 10_000);
    }
}
