//! The scanner: SQL text to typed tokens.

use sql_ast::Location;
use sql_text::TextBuffer;
use thiserror::Error;

use crate::dictionary::NameDictionary;
use crate::keywords;
use crate::scanned::ScannedScript;
use crate::token::{Token, TokenType};

/// Unrecoverable scanner failures. Malformed tokens are not errors at this
/// level; they land in [`ScannedScript::errors`] and scanning continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Extended state (block comment, dollar quote) still open at EOF.
    #[error("unbalanced extended scanner state at end of input, opened at offset {opened_at}")]
    UnbalancedExtendedState { opened_at: u32 },
}

/// Scan a text buffer into a [`ScannedScript`].
pub fn scan(
    buffer: &TextBuffer,
    context_id: u32,
    text_version: u64,
) -> Result<ScannedScript, ScanError> {
    let mut scratch = String::new();
    let text = buffer.read(0, buffer.len_bytes(), &mut scratch);
    scan_text(text, context_id, text_version)
}

/// Scan a contiguous text slice.
pub fn scan_text(
    text: &str,
    context_id: u32,
    text_version: u64,
) -> Result<ScannedScript, ScanError> {
    let mut scanner = Scanner {
        bytes: text.as_bytes(),
        text,
        pos: 0,
        ext_begin: Location::at(0),
        ext_depth: 0,
        tokens: Vec::new(),
        line_breaks: Vec::new(),
        comments: Vec::new(),
        errors: Vec::new(),
        names: NameDictionary::new(),
    };
    scanner.run()?;
    let output = ScannedScript {
        context_id,
        text_version,
        tokens: scanner.tokens,
        line_breaks: scanner.line_breaks,
        comments: scanner.comments,
        errors: scanner.errors,
        names: scanner.names,
    };
    tracing::debug!(
        context_id,
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "scanned script"
    );
    Ok(output)
}

struct Scanner<'text> {
    bytes: &'text [u8],
    text: &'text str,
    pos: usize,
    /// Begin of the active extended lexer state
    ext_begin: Location,
    /// Nesting depth of the active extended lexer state
    ext_depth: usize,
    tokens: Vec<Token>,
    line_breaks: Vec<Location>,
    comments: Vec<Location>,
    errors: Vec<(Location, String)>,
    names: NameDictionary,
}

impl<'text> Scanner<'text> {
    fn run(&mut self) -> Result<(), ScanError> {
        while self.pos < self.bytes.len() {
            let begin = self.pos;
            match self.bytes[begin] {
                b' ' | b'\t' | b'\r' => self.pos += 1,
                b'\n' => {
                    self.line_breaks.push(Location::new(begin as u32, 1));
                    self.pos += 1;
                }
                b'-' if self.peek(1) == Some(b'-') => self.line_comment(),
                b'/' if self.peek(1) == Some(b'*') => self.block_comment()?,
                b'\'' => self.string_literal(begin, TokenType::LiteralString),
                b'"' => self.quoted_identifier(),
                b'x' | b'X' if self.peek(1) == Some(b'\'') => {
                    self.pos += 1;
                    self.string_literal(begin, TokenType::LiteralHexString);
                }
                b'b' | b'B' if self.peek(1) == Some(b'\'') => {
                    self.pos += 1;
                    self.string_literal(begin, TokenType::LiteralBitString);
                }
                b'$' => self.dollar()?,
                b':' => self.colon(),
                b'0'..=b'9' => self.number(),
                b'.' => {
                    if matches!(self.peek(1), Some(b'0'..=b'9')) {
                        self.number();
                    } else {
                        self.punct(TokenType::Dot);
                    }
                }
                b'(' => self.punct(TokenType::LeftParen),
                b')' => self.punct(TokenType::RightParen),
                b'[' => self.punct(TokenType::LeftBracket),
                b']' => self.punct(TokenType::RightBracket),
                b',' => self.punct(TokenType::Comma),
                b';' => self.punct(TokenType::Semicolon),
                b'<' | b'>' | b'=' | b'!' | b'+' | b'-' | b'*' | b'/' | b'%' | b'^' | b'~'
                | b'|' | b'&' | b'#' | b'?' => self.operator(),
                _ => self.identifier_or_unexpected(),
            }
        }
        Ok(())
    }

    #[inline]
    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn emit(&mut self, begin: usize, token_type: TokenType) -> &mut Token {
        let location = Location::new(begin as u32, (self.pos - begin) as u32);
        debug_assert!(
            self.tokens.last().map(|t| t.location.end() <= location.offset).unwrap_or(true),
            "token locations must be strictly increasing"
        );
        self.tokens.push(Token::new(location, token_type));
        let index = self.tokens.len() - 1;
        &mut self.tokens[index]
    }

    fn error(&mut self, location: Location, message: impl Into<String>) {
        self.errors.push((location, message.into()));
    }

    /// Record a line break inside multi-line token content.
    fn note_line_break(&mut self, at: usize) {
        self.line_breaks.push(Location::new(at as u32, 1));
    }

    fn line_comment(&mut self) {
        let begin = self.pos;
        self.pos = memchr::memchr(b'\n', &self.bytes[begin..])
            .map(|i| begin + i)
            .unwrap_or(self.bytes.len());
        self.comments.push(Location::new(begin as u32, (self.pos - begin) as u32));
    }

    /// Nested block comment, tracked through the extended state.
    fn block_comment(&mut self) -> Result<(), ScanError> {
        let begin = self.pos;
        self.ext_begin = Location::at(begin as u32);
        self.ext_depth = 1;
        self.pos += 2;
        while self.ext_depth > 0 {
            match self.bytes.get(self.pos) {
                None => {
                    let opened_at = self.ext_begin.offset;
                    self.error(self.ext_begin, "unterminated block comment");
                    return Err(ScanError::UnbalancedExtendedState { opened_at });
                }
                Some(b'\n') => {
                    self.note_line_break(self.pos);
                    self.pos += 1;
                }
                Some(b'/') if self.peek(1) == Some(b'*') => {
                    self.ext_depth += 1;
                    self.pos += 2;
                }
                Some(b'*') if self.peek(1) == Some(b'/') => {
                    self.ext_depth -= 1;
                    self.pos += 2;
                }
                Some(_) => self.pos += 1,
            }
        }
        self.comments.push(Location::new(begin as u32, (self.pos - begin) as u32));
        Ok(())
    }

    /// Single-quoted string with backslash escapes. `begin` may precede the
    /// quote for hex/bit variants.
    fn string_literal(&mut self, begin: usize, token_type: TokenType) {
        debug_assert_eq!(self.bytes[self.pos], b'\'');
        self.pos += 1;
        loop {
            match self.bytes.get(self.pos) {
                None => {
                    let location = Location::new(begin as u32, (self.pos - begin) as u32);
                    self.error(location, "unterminated string literal");
                    self.emit(begin, token_type);
                    return;
                }
                Some(b'\\') => {
                    // Escape consumes the next byte, whatever it is.
                    self.pos += 2;
                    self.pos = self.pos.min(self.bytes.len());
                }
                Some(b'\n') => {
                    self.note_line_break(self.pos);
                    self.pos += 1;
                }
                Some(b'\'') => {
                    self.pos += 1;
                    break;
                }
                Some(_) => self.pos += 1,
            }
        }
        self.emit(begin, token_type);
    }

    /// Double-quoted identifier, `""` escapes a quote. Case is preserved.
    fn quoted_identifier(&mut self) {
        let begin = self.pos;
        self.pos += 1;
        let content_begin = self.pos;
        let mut closed = false;
        loop {
            match self.bytes.get(self.pos) {
                None => {
                    let location = Location::new(begin as u32, (self.pos - begin) as u32);
                    self.error(location, "unterminated quoted identifier");
                    break;
                }
                Some(b'"') if self.peek(1) == Some(b'"') => self.pos += 2,
                Some(b'"') => {
                    self.pos += 1;
                    closed = true;
                    break;
                }
                Some(b'\n') => {
                    self.note_line_break(self.pos);
                    self.pos += 1;
                }
                Some(_) => self.pos += 1,
            }
        }
        let content_end = if closed { self.pos - 1 } else { self.pos };
        let location = Location::new(begin as u32, (self.pos - begin) as u32);
        let name_id = self.names.register(
            &self.text[content_begin..content_end],
            location,
            None,
        );
        let token = self.emit(begin, TokenType::QuotedIdentifier);
        token.name_id = name_id;
    }

    /// `$1`, `$$..$$`, or `$tag$..$tag$`.
    fn dollar(&mut self) -> Result<(), ScanError> {
        let begin = self.pos;
        if matches!(self.peek(1), Some(b'0'..=b'9')) {
            self.pos += 1;
            while matches!(self.peek(0), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
            self.emit(begin, TokenType::PositionalParameter);
            return Ok(());
        }
        // Try to read an opening tag `$tag$` / `$$`.
        let mut tag_end = begin + 1;
        while tag_end < self.bytes.len()
            && (self.bytes[tag_end].is_ascii_alphanumeric() || self.bytes[tag_end] == b'_')
        {
            tag_end += 1;
        }
        if self.bytes.get(tag_end) != Some(&b'$') {
            let location = Location::new(begin as u32, 1);
            self.error(location, "unexpected character '$'");
            self.pos += 1;
            return Ok(());
        }
        let tag = &self.bytes[begin..=tag_end];
        self.ext_begin = Location::at(begin as u32);
        self.ext_depth = 1;
        self.pos = tag_end + 1;
        loop {
            match self.bytes.get(self.pos) {
                None => {
                    let opened_at = self.ext_begin.offset;
                    self.error(self.ext_begin, "unterminated dollar-quoted string");
                    return Err(ScanError::UnbalancedExtendedState { opened_at });
                }
                Some(b'\n') => {
                    self.note_line_break(self.pos);
                    self.pos += 1;
                }
                Some(b'$') if self.bytes[self.pos..].starts_with(tag) => {
                    self.pos += tag.len();
                    self.ext_depth = 0;
                    break;
                }
                Some(_) => self.pos += 1,
            }
        }
        self.emit(begin, TokenType::LiteralDollarString);
        Ok(())
    }

    /// `::` and `:=` are operators, `:name` is a named parameter.
    fn colon(&mut self) {
        let begin = self.pos;
        match self.peek(1) {
            Some(b':') | Some(b'=') => {
                let op = if self.peek(1) == Some(b':') {
                    crate::token::Operator::TypeCast
                } else {
                    crate::token::Operator::Assign
                };
                self.pos += 2;
                let token = self.emit(begin, TokenType::Operator);
                token.op = Some(op);
            }
            Some(c) if c == b'_' || c.is_ascii_alphabetic() => {
                self.pos += 1;
                while matches!(
                    self.peek(0),
                    Some(c) if c == b'_' || c.is_ascii_alphanumeric()
                ) {
                    self.pos += 1;
                }
                self.emit(begin, TokenType::NamedParameter);
            }
            _ => {
                self.pos += 1;
                self.emit(begin, TokenType::Operator);
            }
        }
    }

    fn number(&mut self) {
        let begin = self.pos;
        let mut is_float = false;
        while matches!(self.peek(0), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if self.peek(0) == Some(b'.') && !matches!(self.peek(1), Some(b'.')) {
            is_float = true;
            self.pos += 1;
            while matches!(self.peek(0), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }
        if matches!(self.peek(0), Some(b'e') | Some(b'E')) {
            let mut ahead = 1;
            if matches!(self.peek(1), Some(b'+') | Some(b'-')) {
                ahead = 2;
            }
            if matches!(self.peek(ahead), Some(b'0'..=b'9')) {
                is_float = true;
                self.pos += ahead;
                while matches!(self.peek(0), Some(b'0'..=b'9')) {
                    self.pos += 1;
                }
            }
        }
        let token_type =
            if is_float { TokenType::LiteralFloat } else { TokenType::LiteralInteger };
        self.emit(begin, token_type);
    }

    fn operator(&mut self) {
        use crate::token::Operator::*;
        let begin = self.pos;
        let (op, len) = match (self.bytes[begin], self.peek(1).unwrap_or(0)) {
            (b'<', b'=') => (LessEqual, 2),
            (b'>', b'=') => (GreaterEqual, 2),
            (b'<', b'>') | (b'!', b'=') => (NotEqual, 2),
            (b'|', b'|') => (Concat, 2),
            (b'<', _) => (Less, 1),
            (b'>', _) => (Greater, 1),
            (b'=', _) => (Equal, 1),
            (b'+', _) => (Plus, 1),
            (b'-', _) => (Minus, 1),
            (b'*', _) => (Star, 1),
            (b'/', _) => (Slash, 1),
            (b'%', _) => (Percent, 1),
            (b'^', _) => (Caret, 1),
            (b'~', _) => (Tilde, 1),
            (b'!', _) => (Bang, 1),
            (b'&', _) => (Ampersand, 1),
            (b'|', _) => (Pipe, 1),
            (b'#', _) => (Hash, 1),
            (b'?', _) => (Question, 1),
            _ => (Question, 1),
        };
        self.pos += len;
        let token = self.emit(begin, TokenType::Operator);
        token.op = Some(op);
    }

    fn punct(&mut self, token_type: TokenType) {
        let begin = self.pos;
        self.pos += 1;
        self.emit(begin, token_type);
    }

    /// Identifier, keyword, or an unexpected byte.
    fn identifier_or_unexpected(&mut self) {
        let begin = self.pos;
        let Some(first) = self.text[begin..].chars().next() else {
            self.pos += 1;
            return;
        };
        let starts_identifier =
            first == '_' || first.is_ascii_alphabetic() || unicode_ident::is_xid_start(first);
        if !starts_identifier {
            let location = Location::new(begin as u32, first.len_utf8() as u32);
            self.error(location, format!("unexpected character '{first}'"));
            self.pos += first.len_utf8();
            return;
        }
        self.pos += first.len_utf8();
        for c in self.text[self.pos..].chars() {
            let continues = c == '_'
                || c == '$'
                || c.is_ascii_alphanumeric()
                || unicode_ident::is_xid_continue(c);
            if !continues {
                break;
            }
            self.pos += c.len_utf8();
        }
        let raw = &self.text[begin..self.pos];
        let location = Location::new(begin as u32, raw.len() as u32);
        let folded = raw.to_ascii_lowercase();
        if let Some((&keyword_text, &keyword)) = keywords::KEYWORDS.get_entry(folded.as_str()) {
            let name_id = self.names.register_keyword_as_name(keyword_text, location);
            let token = self.emit(begin, TokenType::Keyword);
            token.name_id = name_id;
            token.keyword = Some(keyword);
        } else {
            let name_id = self.names.register(raw, location, None);
            let token = self.emit(begin, TokenType::Identifier);
            token.name_id = name_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::Keyword;
    use pretty_assertions::assert_eq;

    fn types(text: &str) -> Vec<TokenType> {
        let scanned = scan_text(text, 1, 0).unwrap_or_default();
        scanned.tokens.iter().map(|t| t.token_type).collect()
    }

    #[test]
    fn keywords_fold_but_names_keep_case() {
        let scanned = scan_text("SELECT Amount FROM Orders", 1, 0).unwrap_or_default();
        let token_types: Vec<_> = scanned.tokens.iter().map(|t| t.token_type).collect();
        assert_eq!(
            token_types,
            vec![
                TokenType::Keyword,
                TokenType::Identifier,
                TokenType::Keyword,
                TokenType::Identifier
            ]
        );
        assert_eq!(scanned.tokens[0].keyword, Some(Keyword::Select));
        let amount = scanned.tokens[1].name_id;
        assert_eq!(scanned.names.text(amount), Some("Amount"));
    }

    #[test]
    fn token_kinds() {
        assert_eq!(
            types("a.b, 1 1.5 .5 1e3 'x' x'ff' b'01' \"Q\" $1 :p ; ( )"),
            vec![
                TokenType::Identifier,
                TokenType::Dot,
                TokenType::Identifier,
                TokenType::Comma,
                TokenType::LiteralInteger,
                TokenType::LiteralFloat,
                TokenType::LiteralFloat,
                TokenType::LiteralFloat,
                TokenType::LiteralString,
                TokenType::LiteralHexString,
                TokenType::LiteralBitString,
                TokenType::QuotedIdentifier,
                TokenType::PositionalParameter,
                TokenType::NamedParameter,
                TokenType::Semicolon,
                TokenType::LeftParen,
                TokenType::RightParen,
            ]
        );
    }

    #[test]
    fn operators_take_longest_match() {
        assert_eq!(
            types("a <= b <> c || d :: int"),
            vec![
                TokenType::Identifier,
                TokenType::Operator,
                TokenType::Identifier,
                TokenType::Operator,
                TokenType::Identifier,
                TokenType::Operator,
                TokenType::Identifier,
                TokenType::Operator,
                TokenType::Keyword,
            ]
        );
    }

    #[test]
    fn comments_and_line_breaks() {
        let scanned = scan_text("select 1 -- tail\n+ 2 /* a /* nested */ b */", 1, 0)
            .unwrap_or_default();
        assert_eq!(scanned.comments.len(), 2);
        assert_eq!(scanned.line_breaks.len(), 1);
        assert_eq!(scanned.line_breaks[0].offset, 16);
        // Comments never become tokens.
        let token_types: Vec<_> = scanned.tokens.iter().map(|t| t.token_type).collect();
        assert_eq!(
            token_types,
            vec![
                TokenType::Keyword,
                TokenType::LiteralInteger,
                TokenType::Operator,
                TokenType::LiteralInteger
            ]
        );
    }

    #[test]
    fn dollar_quotes() {
        let scanned = scan_text("$tag$ body $x$ inner $tag$ + $$y$$", 1, 0).unwrap_or_default();
        let token_types: Vec<_> = scanned.tokens.iter().map(|t| t.token_type).collect();
        assert_eq!(
            token_types,
            vec![
                TokenType::LiteralDollarString,
                TokenType::Operator,
                TokenType::LiteralDollarString
            ]
        );
    }

    #[test]
    fn unbalanced_block_comment_fails_the_stage() {
        let result = scan_text("select /* open /* deeper */", 1, 0);
        assert_eq!(result, Err(ScanError::UnbalancedExtendedState { opened_at: 7 }));
    }

    #[test]
    fn unterminated_string_is_recoverable() {
        let scanned = scan_text("select 'abc", 1, 0).unwrap_or_default();
        assert_eq!(scanned.errors.len(), 1);
        assert_eq!(scanned.tokens.len(), 2);
    }

    #[test]
    fn unexpected_character_is_reported_and_skipped() {
        let scanned = scan_text("select @ 1", 1, 0).unwrap_or_default();
        assert_eq!(scanned.errors.len(), 1);
        assert_eq!(scanned.tokens.len(), 2);
    }

    #[test]
    fn name_locations_read_back_to_their_text() {
        let input = "select Amount, \"Qty\" from Orders o where o.Amount > 1";
        let scanned = scan_text(input, 1, 0).unwrap_or_default();
        for (id, text, tags) in scanned.names.iter() {
            if tags.contains(sql_ast::NameTag::Keyword) {
                // Keywords fold to their static spelling.
                continue;
            }
            let location = scanned.names.location(id).unwrap_or_default();
            let begin = location.offset as usize;
            let end = begin + location.length as usize;
            let source = &input[begin..end];
            let source = source.trim_matches('"');
            assert_eq!(source, text, "entry {id}");
        }
    }

    #[test]
    fn token_locations_are_strictly_increasing() {
        let scanned =
            scan_text("select a, b from t where a.x = 'v' and b > 1.5", 1, 0).unwrap_or_default();
        let mut last_end = 0;
        for token in &scanned.tokens {
            assert!(token.location.offset >= last_end);
            last_end = token.location.end();
        }
    }
}
