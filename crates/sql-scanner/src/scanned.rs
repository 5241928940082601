//! The scanner's output artifact.

use sql_ast::Location;

use crate::dictionary::NameDictionary;
use crate::token::{Highlighting, Token, TokenType};

/// Everything the scanner learned about one script version.
#[derive(Debug, Default, PartialEq)]
pub struct ScannedScript {
    /// The owning script context
    pub context_id: u32,
    /// The scanned text version
    pub text_version: u64,
    /// The tokens, locations strictly increasing and non-overlapping.
    /// Comments and whitespace are not tokens; they are tracked separately.
    pub tokens: Vec<Token>,
    /// The line break locations
    pub line_breaks: Vec<Location>,
    /// The comment locations
    pub comments: Vec<Location>,
    /// Recoverable scanner errors
    pub errors: Vec<(Location, String)>,
    /// The name dictionary
    pub names: NameDictionary,
}

impl ScannedScript {
    /// The token whose range contains `offset`, or the nearest preceding
    /// token when the offset sits in whitespace. `None` on an empty stream.
    pub fn find_token_at_offset(&self, offset: u32) -> Option<usize> {
        if self.tokens.is_empty() {
            return None;
        }
        // Last token starting at or before the offset.
        let after = self.tokens.partition_point(|t| t.location.offset <= offset);
        Some(after.saturating_sub(1))
    }

    /// Pack highlighting for editor consumption.
    ///
    /// Every token contributes one `(offset, type)` entry; a gap before the
    /// next token (or the end of the last token) contributes a
    /// [`TokenType::None`] entry at the token's end. `token_breaks` holds
    /// the packed-entry index containing each line break.
    pub fn pack_highlighting(&self) -> Highlighting {
        let mut packed = Highlighting::default();
        for (index, token) in self.tokens.iter().enumerate() {
            packed.token_offsets.push(token.location.offset);
            packed.token_types.push(token.token_type);
            let end = token.location.end();
            let gap = match self.tokens.get(index + 1) {
                Some(next) => next.location.offset > end,
                None => true,
            };
            if gap {
                packed.token_offsets.push(end);
                packed.token_types.push(TokenType::None);
            }
        }
        for line_break in &self.line_breaks {
            let entry = packed
                .token_offsets
                .partition_point(|&offset| offset <= line_break.offset)
                .saturating_sub(1);
            packed.token_breaks.push(entry as u32);
        }
        packed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn token(offset: u32, length: u32, token_type: TokenType) -> Token {
        Token::new(Location::new(offset, length), token_type)
    }

    #[test]
    fn find_token_prefers_containing_then_preceding() {
        let scanned = ScannedScript {
            tokens: vec![
                token(0, 6, TokenType::Keyword),
                token(7, 1, TokenType::LiteralInteger),
            ],
            ..Default::default()
        };
        assert_eq!(scanned.find_token_at_offset(0), Some(0));
        assert_eq!(scanned.find_token_at_offset(5), Some(0));
        // Whitespace after the keyword: nearest preceding token.
        assert_eq!(scanned.find_token_at_offset(6), Some(0));
        assert_eq!(scanned.find_token_at_offset(7), Some(1));
        assert_eq!(scanned.find_token_at_offset(100), Some(1));
    }

    #[test]
    fn pack_adjacent_tokens_without_gap_entries() {
        let scanned = ScannedScript {
            tokens: vec![
                token(0, 1, TokenType::LeftParen),
                token(1, 1, TokenType::LiteralInteger),
                token(2, 1, TokenType::RightParen),
            ],
            ..Default::default()
        };
        let packed = scanned.pack_highlighting();
        assert_eq!(packed.token_offsets, vec![0, 1, 2, 3]);
        assert_eq!(
            packed.token_types,
            vec![
                TokenType::LeftParen,
                TokenType::LiteralInteger,
                TokenType::RightParen,
                TokenType::None
            ]
        );
        assert_eq!(packed.token_breaks, Vec::<u32>::new());
    }
}
