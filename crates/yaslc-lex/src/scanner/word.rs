//! Keyword/identifier resolution.
//!
//! A word is scanned in a single forward pass: the keyword trie is walked
//! while the word could still be a keyword, and the walk is abandoned the
//! moment no keyword path continues. Whatever was consumed keeps being
//! consumed as identifier characters, so no backtracking is ever needed.
//! A keyword is recognized only as a whole word; `beginner` is one
//! identifier, not `begin` plus `ner`.

use yaslc_util::Symbol;

use crate::keywords::KEYWORD_TRIE;
use crate::scanner::Scanner;
use crate::token::TokenKind;

/// Characters that may continue an identifier: digits are allowed anywhere
/// after the leading letter.
pub(crate) fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

impl<'a> Scanner<'a> {
    /// Scans a keyword or identifier starting at the current letter.
    pub(crate) fn scan_word(&mut self) -> TokenKind {
        let mut node = Some(KEYWORD_TRIE.root());

        while is_word_continue(self.cursor.current_char()) {
            node = node.and_then(|n| KEYWORD_TRIE.step(n, self.cursor.current_char()));
            self.cursor.advance();
        }

        if let Some(kind) = node.and_then(|n| KEYWORD_TRIE.accept(n)) {
            return kind;
        }

        let text = self.cursor.slice_from(self.token_start);
        TokenKind::Ident(Symbol::intern(text))
    }
}
