//! Core scanner implementation.
//!
//! This module contains the main Scanner struct, the per-token dispatch,
//! and the recovery path for illegal characters.

use yaslc_util::{Diagnostic, DiagnosticCode, Handler, Span};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Scanner for YASL source text.
///
/// Each call to [`next_token`] skips whitespace and comments, then returns
/// exactly one token. When the input is exhausted it returns an
/// end-of-input token, and keeps doing so on every further call, at a
/// stable position.
///
/// Recoverable lexical errors are reported to the [`Handler`] and the
/// offending span is discarded up to the next whitespace; the token stream
/// continues past them. An unterminated `{` comment is fatal: the scanner
/// reports it once, then returns the same [`LexError`] from this and every
/// subsequent call.
///
/// The scanner borrows the source text and the handler; dropping it
/// releases both borrows.
///
/// [`next_token`]: Scanner::next_token
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Sink for lexical diagnostics.
    handler: &'a Handler,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,

    /// Latched fatal error; set once, returned forever after.
    pub(crate) fatal: Option<LexError>,

    /// Whether iteration has finished (end of input or fatal error seen).
    iter_done: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over the given source text.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            fatal: None,
            iter_done: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// This is the main entry point for tokenization. It skips whitespace
    /// and comments, then dispatches on the first meaningful character.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if let Some(err) = self.fatal {
            return Err(err);
        }

        loop {
            self.skip_trivia()?;
            self.begin_token();

            if self.cursor.is_at_end() {
                return Ok(self.emit(TokenKind::Eof));
            }

            let c = self.cursor.current_char();
            let kind = match c {
                ';' => self.single(TokenKind::Semicolon),
                '+' => self.single(TokenKind::Plus),
                '-' => self.single(TokenKind::Minus),
                '*' => self.single(TokenKind::Star),
                '=' => self.single(TokenKind::Assign),
                '.' => self.single(TokenKind::Period),
                c if c.is_ascii_digit() => self.scan_number(),
                c if c.is_ascii_alphabetic() => self.scan_word(),
                c => {
                    // Recoverable: drop everything up to the next whitespace
                    // and rescan from there.
                    self.discard_to_whitespace();
                    self.report(
                        Diagnostic::error(format!("illegal character '{}'", c), self.token_span())
                            .with_code(DiagnosticCode::E0101),
                    );
                    continue;
                },
            };
            return Ok(self.emit(kind));
        }
    }

    /// Marks the current cursor position as the start of the next token.
    pub(crate) fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// The span from the token start to the current cursor position.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Consumes one character and returns its fixed token kind.
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Wraps a kind into a token at the current token span.
    fn emit(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_span())
    }

    /// Sends a diagnostic to the handler.
    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.handler.emit(diagnostic);
    }

    /// Advances until the next whitespace character or end of input.
    ///
    /// This is the shared recovery move: the discarded run is not
    /// re-tokenized.
    pub(crate) fn discard_to_whitespace(&mut self) {
        while !self.cursor.is_at_end() && !self.cursor.current_char().is_whitespace() {
            self.cursor.advance();
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to (not including) end-of-input. A fatal error is
    /// yielded once, after which the iterator is fused.
    fn next(&mut self) -> Option<Self::Item> {
        if self.iter_done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.iter_done = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.iter_done = true;
                Some(Err(err))
            },
        }
    }
}
