//! yaslc-lex - Lexical Analyzer for the YASL Teaching Language
//!
//! This crate turns YASL source text into a stream of classified tokens for
//! the parser. Lexical analysis is the first phase of compilation; beyond
//! plain classification it handles keyword recognition with longest-match
//! fallback, comment suppression, and per-token error recovery.
//!
//! # Example Usage
//!
//! ```
//! use yaslc_lex::{Scanner, TokenKind};
//! use yaslc_util::Handler;
//!
//! let source = "program demo; begin print 42 end.";
//! let handler = Handler::new();
//! let mut scanner = Scanner::new(source, &handler);
//!
//! let first = scanner.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::Program);
//!
//! // Or iterate; iteration stops at end of input.
//! for token in &mut scanner {
//!     println!("{}", token.unwrap());
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`scanner`] - The scanner state machine
//! - [`cursor`] - Character cursor for source traversal
//! - [`keywords`] - Keyword prefix trie
//! - [`source`] - Source text acquisition
//! - [`error`] - Fatal error types
//!
//! # Error handling
//!
//! Recoverable errors (an illegal character, a `/` that does not start a
//! `//` comment) are reported to the shared diagnostic [`Handler`] and the
//! token stream continues past them. An unterminated `{` comment is fatal:
//! [`Scanner::next_token`] returns a typed [`LexError`] and no further
//! tokens are produced.
//!
//! [`Handler`]: yaslc_util::Handler

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod keywords;
pub mod scanner;
pub mod source;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, SourceError};
pub use scanner::Scanner;
pub use source::SourceFile;
pub use token::{Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;
    use yaslc_util::{Handler, Symbol};

    /// Helper to collect all tokens (excluding end-of-input) from source.
    fn lex_all(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        Scanner::new(source, &handler)
            .map(|r| r.expect("no fatal error expected"))
            .map(|t| t.kind)
            .collect()
    }

    fn ident(text: &str) -> TokenKind {
        TokenKind::Ident(Symbol::intern(text))
    }

    fn number(text: &str) -> TokenKind {
        TokenKind::Number(Symbol::intern(text))
    }

    #[test]
    fn test_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_whitespace_and_comments_only() {
        assert!(lex_all("  \t \n { nothing here } // nor here\n  ").is_empty());
    }

    #[test]
    fn test_trivia_only_source_yields_eof_immediately() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(" { x } ", &handler);
        assert!(scanner.next_token().unwrap().is_eof());
        assert!(scanner.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_small_program() {
        let source = "program p;\nconst n = 3;\nbegin\n  print n * 2\nend.";
        assert_eq!(
            lex_all(source),
            vec![
                TokenKind::Program,
                ident("p"),
                TokenKind::Semicolon,
                TokenKind::Const,
                ident("n"),
                TokenKind::Assign,
                number("3"),
                TokenKind::Semicolon,
                TokenKind::Begin,
                TokenKind::Print,
                ident("n"),
                TokenKind::Star,
                number("2"),
                TokenKind::End,
                TokenKind::Period,
            ]
        );
    }

    #[test]
    fn test_all_operators_and_punctuation() {
        assert_eq!(
            lex_all("; + - * = ."),
            vec![
                TokenKind::Semicolon,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Assign,
                TokenKind::Period,
            ]
        );
    }

    #[test]
    fn test_operators_without_whitespace() {
        assert_eq!(
            lex_all("a+b*c"),
            vec![ident("a"), TokenKind::Plus, ident("b"), TokenKind::Star, ident("c")]
        );
    }

    #[test]
    fn test_keyword_vs_identifier() {
        assert_eq!(lex_all("begin"), vec![TokenKind::Begin]);
        assert_eq!(lex_all("beginner"), vec![ident("beginner")]);
        assert_eq!(lex_all("print"), vec![TokenKind::Print]);
    }

    #[test]
    fn test_zero_numeral_rules() {
        assert_eq!(lex_all("0 "), vec![number("0")]);
        assert_eq!(lex_all("0123"), vec![number("0"), number("123")]);
    }

    #[test]
    fn test_digit_letter_merge() {
        assert_eq!(lex_all("12ab"), vec![ident("12ab")]);
    }

    #[test]
    fn test_comment_transparency() {
        let with_comment = lex_all("x {this is ignored} + y");
        let without_comment = lex_all("x + y");
        assert_eq!(with_comment, without_comment);
        assert_eq!(
            with_comment,
            vec![ident("x"), TokenKind::Plus, ident("y")]
        );
    }

    #[test]
    fn test_line_comment_discards_rest_of_line() {
        assert_eq!(
            lex_all("x // trailing\n+ y"),
            vec![ident("x"), TokenKind::Plus, ident("y")]
        );
    }

    #[test]
    fn test_recoverable_error_continuation() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("@ x", &handler);
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind, ident("x"));
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_idempotent_eof_tail() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("x", &handler);
        scanner.next_token().unwrap();

        let first = scanner.next_token().unwrap();
        let second = scanner.next_token().unwrap();
        let third = scanner.next_token().unwrap();
        assert!(first.is_eof() && second.is_eof() && third.is_eof());
        assert_eq!(first.span, second.span);
        assert_eq!(second.span, third.span);
    }

    #[test]
    fn test_position_after_newline_and_indent() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("\n  val", &handler);
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Val);
        assert_eq!((token.line(), token.column()), (2, 3));
    }

    #[test]
    fn test_positions_skip_trivia() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("{ banner }\nprogram", &handler);
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Program);
        assert_eq!((token.line(), token.column()), (2, 1));
    }

    #[test]
    fn test_scanner_reports_cursor_position() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("val\nx", &handler);
        assert_eq!((scanner.line(), scanner.column()), (1, 1));
        scanner.next_token().unwrap(); // `val`
        scanner.next_token().unwrap(); // `x`
        assert_eq!((scanner.line(), scanner.column()), (2, 2));
    }

    #[test]
    fn test_scanning_from_source_file() {
        let source = SourceFile::new("<mem>", "val answer = 42;");
        let handler = Handler::new();
        let tokens: Vec<_> = Scanner::new(source.text(), &handler)
            .map(|r| r.unwrap().kind)
            .collect();
        assert_eq!(
            tokens,
            vec![
                TokenKind::Val,
                ident("answer"),
                TokenKind::Assign,
                number("42"),
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_iterator_yields_fatal_error_once_then_fuses() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("x { open", &handler);
        assert_eq!(scanner.next().unwrap().unwrap().kind, ident("x"));
        assert!(scanner.next().unwrap().is_err());
        assert!(scanner.next().is_none());
        assert!(scanner.next().is_none());
    }
}
