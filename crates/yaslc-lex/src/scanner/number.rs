//! Numeric literal scanning.
//!
//! Numerals have no leading zeros: `0` is a complete numeral by itself, so
//! any digit or letter directly after an isolated `0` belongs to the next
//! token. A nonzero digit run that touches a letter with no whitespace in
//! between is reclassified as an identifier rather than split in two.

use yaslc_util::Symbol;

use crate::scanner::word::is_word_continue;
use crate::scanner::Scanner;
use crate::token::TokenKind;

impl<'a> Scanner<'a> {
    /// Scans a numeric literal starting at the current digit.
    pub(crate) fn scan_number(&mut self) -> TokenKind {
        if self.cursor.current_char() == '0' {
            self.cursor.advance();
            return TokenKind::Number(Symbol::intern("0"));
        }

        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current_char().is_ascii_alphabetic() {
            // Adjacent letters glue the whole run into one identifier.
            while is_word_continue(self.cursor.current_char()) {
                self.cursor.advance();
            }
            let text = self.cursor.slice_from(self.token_start);
            return TokenKind::Ident(Symbol::intern(text));
        }

        let text = self.cursor.slice_from(self.token_start);
        TokenKind::Number(Symbol::intern(text))
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::Scanner;
    use crate::token::TokenKind;
    use yaslc_util::{Handler, Symbol};

    fn kinds(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        Scanner::new(source, &handler)
            .map(|r| r.unwrap().kind)
            .collect()
    }

    #[test]
    fn test_simple_number() {
        assert_eq!(kinds("123"), vec![TokenKind::Number(Symbol::intern("123"))]);
    }

    #[test]
    fn test_zero_is_complete_by_itself() {
        assert_eq!(kinds("0"), vec![TokenKind::Number(Symbol::intern("0"))]);
    }

    #[test]
    fn test_leading_zero_splits() {
        assert_eq!(
            kinds("0123"),
            vec![
                TokenKind::Number(Symbol::intern("0")),
                TokenKind::Number(Symbol::intern("123")),
            ]
        );
    }

    #[test]
    fn test_zero_then_letters_splits() {
        assert_eq!(
            kinds("0x"),
            vec![
                TokenKind::Number(Symbol::intern("0")),
                TokenKind::Ident(Symbol::intern("x")),
            ]
        );
    }

    #[test]
    fn test_digits_then_letters_merge_into_identifier() {
        assert_eq!(kinds("12ab"), vec![TokenKind::Ident(Symbol::intern("12ab"))]);
    }

    #[test]
    fn test_merge_keeps_consuming_digits_and_letters() {
        assert_eq!(
            kinds("1a2b3"),
            vec![TokenKind::Ident(Symbol::intern("1a2b3"))]
        );
    }

    #[test]
    fn test_number_before_punctuation_stays_a_number() {
        assert_eq!(
            kinds("42;"),
            vec![
                TokenKind::Number(Symbol::intern("42")),
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_number_position() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("  987", &handler);
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Number(Symbol::intern("987")));
        assert_eq!((token.line(), token.column()), (1, 3));
    }
}
