//! Whitespace and comment skipping.
//!
//! Trivia never produces a token. Two comment forms exist: brace-delimited
//! (`{ ... }`, not nested) and line comments (`// ...` through end of line).
//! A lone `/` is a recoverable error; a `{` left open at end of input is
//! fatal.

use yaslc_util::{Diagnostic, DiagnosticCode, Span};

use crate::error::LexError;
use crate::scanner::Scanner;

impl<'a> Scanner<'a> {
    /// Skips whitespace and comments.
    ///
    /// Called before scanning each token. Returns an error only on the
    /// fatal unterminated-comment path.
    pub(crate) fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            if self.cursor.is_at_end() {
                return Ok(());
            }
            match self.cursor.current_char() {
                c if c.is_whitespace() => self.cursor.advance(),
                '{' => self.skip_brace_comment()?,
                '/' => self.skip_line_comment(),
                _ => return Ok(()),
            }
        }
    }

    /// Skips a brace comment, `{` through the next `}`.
    ///
    /// Running out of input first is fatal: there is no safe place to
    /// resynchronize, so the error is latched and the run ends.
    fn skip_brace_comment(&mut self) -> Result<(), LexError> {
        let open_start = self.cursor.position();
        let open_line = self.cursor.line();
        let open_column = self.cursor.column();
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '}' {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            let open_span = Span::new(open_start, open_start + 1, open_line, open_column);
            self.report(
                Diagnostic::error("unterminated comment", open_span)
                    .with_code(DiagnosticCode::E0103)
                    .with_help("terminate the comment with `}`"),
            );
            let err = LexError::UnterminatedComment {
                line: open_line,
                column: open_column,
            };
            self.fatal = Some(err);
            return Err(err);
        }

        self.cursor.advance();
        Ok(())
    }

    /// Skips a `//` line comment through (and including) the newline.
    ///
    /// A `/` not followed by a second `/` is a recoverable error: it is
    /// reported and the run up to the next whitespace is discarded.
    fn skip_line_comment(&mut self) {
        let slash_start = self.cursor.position();
        let slash_line = self.cursor.line();
        let slash_column = self.cursor.column();
        self.cursor.advance();

        if self.cursor.match_char('/') {
            while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                self.cursor.advance();
            }
            if !self.cursor.is_at_end() {
                self.cursor.advance();
            }
        } else {
            self.discard_to_whitespace();
            let span = Span::new(
                slash_start,
                self.cursor.position(),
                slash_line,
                slash_column,
            );
            self.report(
                Diagnostic::error("malformed comment: expected a second '/'", span)
                    .with_code(DiagnosticCode::E0102),
            );
        }
    }
}
