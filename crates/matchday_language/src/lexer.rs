//! Lexer for league reports.
//!
//! The lexer converts report text into a stream of tokens. Spaces and tabs
//! between tokens are skipped, `#` starts a comment that runs to the end of
//! the line, and runs of line breaks collapse into a single
//! [`TokenKind::Newline`].

use crate::span::Span;
use crate::token::{Label, Token, TokenKind};

/// Lexer for league report text.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_blanks();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::point(start, start_line, start_column),
            );
        };

        let kind = match c {
            '\n' | '\r' => self.scan_newlines(),
            '#' => {
                if self.peek_char_n(1) == Some('#') {
                    self.advance();
                    self.advance();
                    TokenKind::Separator
                } else {
                    self.scan_comment()
                }
            }
            '-' => {
                if self.rest.starts_with("---") {
                    self.advance_n(3);
                    TokenKind::Separator
                } else {
                    self.advance();
                    TokenKind::Error("unexpected '-'".into())
                }
            }
            ',' => {
                self.advance();
                TokenKind::Comma
            }
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() => self.scan_word(),
            c => {
                self.advance();
                TokenKind::Error(format!("unexpected character: {c:?}"))
            }
        };

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// Comments are included in the output.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Returns the full source text.
    #[must_use]
    pub const fn source(&self) -> &'src str {
        self.source
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks `n` characters ahead.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Advances past the next `n` characters.
    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Skips spaces and tabs. Line breaks are significant and stay.
    fn skip_blanks(&mut self) {
        while matches!(self.peek_char(), Some(' ' | '\t')) {
            self.advance();
        }
    }

    /// Consumes a single `\n` or `\r\n`. Returns false if neither is next.
    fn eat_line_break(&mut self) -> bool {
        match self.peek_char() {
            Some('\n') => {
                self.advance();
                true
            }
            Some('\r') if self.peek_char_n(1) == Some('\n') => {
                self.advance_n(2);
                true
            }
            _ => false,
        }
    }

    /// Scans a run of line breaks, swallowing blank and comment-only lines
    /// between them.
    fn scan_newlines(&mut self) -> TokenKind {
        if !self.eat_line_break() {
            self.advance();
            return TokenKind::Error("unexpected carriage return".into());
        }
        loop {
            self.skip_blanks();
            if self.peek_char() == Some('#') && self.peek_char_n(1) != Some('#') {
                self.scan_comment();
            }
            if !self.eat_line_break() {
                break;
            }
        }
        TokenKind::Newline
    }

    /// Scans a comment starting with `#`.
    fn scan_comment(&mut self) -> TokenKind {
        let start = self.position;
        while let Some(c) = self.peek_char() {
            if c == '\n' || (c == '\r' && self.peek_char_n(1) == Some('\n')) {
                break;
            }
            self.advance();
        }
        TokenKind::Comment(self.source[start..self.position].to_string())
    }

    /// Scans a digit run and whatever shape follows it: an apostrophe for a
    /// minute, or more digit groups joined by `-` or `/`.
    fn scan_number(&mut self) -> TokenKind {
        let start = self.position;
        self.scan_digits();

        match self.peek_char() {
            Some('\'') => {
                self.advance();
                TokenKind::Minute(self.source[start..self.position].to_string())
            }
            Some(joiner @ ('-' | '/'))
                if self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit()) =>
            {
                while self.peek_char() == Some(joiner)
                    && self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit())
                {
                    self.advance();
                    self.scan_digits();
                }
                let text = self.source[start..self.position].to_string();
                if joiner == '-' {
                    TokenKind::Dashed(text)
                } else {
                    TokenKind::Slashed(text)
                }
            }
            _ => TokenKind::Int(self.source[start..self.position].to_string()),
        }
    }

    /// Consumes consecutive ASCII digits.
    fn scan_digits(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Scans a line label, a card color, or a team code.
    fn scan_word(&mut self) -> TokenKind {
        if let Some(label) = Label::match_prefix(self.rest) {
            self.advance_n(label.literal().chars().count());
            return TokenKind::Label(label);
        }

        let start = self.position;
        while self.peek_char().is_some_and(char::is_alphabetic) {
            self.advance();
        }
        let word = &self.source[start..self.position];

        match word {
            "Amarilla" | "Roja" => TokenKind::Color(word.to_string()),
            _ if word.len() == 3 && word.bytes().all(|b| b.is_ascii_alphabetic()) => {
                TokenKind::Code(word.to_string())
            }
            _ => TokenKind::Error(format!("unexpected word '{word}'")),
        }
    }
}
