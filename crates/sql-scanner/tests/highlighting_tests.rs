//! Highlighting pack evolution while typing character by character.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use sql_scanner::{TokenType, scan, scan_text};
use sql_text::TextBuffer;

fn match_tokens(
    text: &str,
    offsets: Vec<u32>,
    token_types: Vec<TokenType>,
    breaks: Vec<u32>,
) {
    let scanned = scan_text(text, 1, 0).unwrap();
    let packed = scanned.pack_highlighting();
    assert_eq!(packed.token_offsets, offsets, "offsets for {text:?}");
    assert_eq!(packed.token_types, token_types, "types for {text:?}");
    assert_eq!(packed.token_breaks, breaks, "breaks for {text:?}");
}

#[test]
fn insert_chars_one_at_a_time() {
    use TokenType::{Identifier, Keyword, LiteralInteger, None};

    let mut buffer = TextBuffer::new();
    let mut add_char = |c: char, offsets: Vec<u32>, types: Vec<TokenType>, breaks: Vec<u32>| {
        let at = buffer.len_bytes();
        buffer.insert_text_at(at, &c.to_string());
        match_tokens(&buffer.to_text(), offsets, types, breaks);
    };

    add_char('s', vec![0, 1], vec![Identifier, None], vec![]);
    add_char('e', vec![0, 2], vec![Identifier, None], vec![]);
    add_char('l', vec![0, 3], vec![Identifier, None], vec![]);
    add_char('e', vec![0, 4], vec![Identifier, None], vec![]);
    add_char('c', vec![0, 5], vec![Identifier, None], vec![]);
    add_char('t', vec![0, 6], vec![Keyword, None], vec![]);
    add_char('\n', vec![0, 6], vec![Keyword, None], vec![1]);
    add_char('1', vec![0, 6, 7, 8], vec![Keyword, None, LiteralInteger, None], vec![1]);
}

#[test]
fn scan_over_the_rope_matches_scan_over_text() {
    let buffer = TextBuffer::from_text("select x from t");
    let over_rope = scan(&buffer, 1, 0).unwrap();
    let over_text = scan_text("select x from t", 1, 0).unwrap();
    assert_eq!(over_rope.pack_highlighting(), over_text.pack_highlighting());
}
