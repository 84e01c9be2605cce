//! Keyword recognition via an explicit prefix trie.
//!
//! The scanner resolves keywords with longest-match-and-fallback: it walks
//! the trie letter by letter while the word could still be a keyword, and
//! abandons to identifier scanning the moment no keyword path continues.
//! A keyword is only accepted when the walk ends exactly on an accepting
//! node, so `beginner` falls back to an identifier even though it starts
//! with the full spelling of `begin`.
//!
//! Keywords are lowercase ASCII and matching is case-sensitive.

use crate::token::TokenKind;
use std::sync::LazyLock;

/// The fixed keyword set of the language.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("program", TokenKind::Program),
    ("val", TokenKind::Val),
    ("begin", TokenKind::Begin),
    ("end", TokenKind::End),
    ("div", TokenKind::Div),
    ("mod", TokenKind::Mod),
    ("print", TokenKind::Print),
    ("const", TokenKind::Const),
];

/// Shared trie over the keyword set, built on first use.
pub static KEYWORD_TRIE: LazyLock<KeywordTrie> =
    LazyLock::new(|| KeywordTrie::build(KEYWORDS));

/// Handle to a trie node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(u32);

#[derive(Default)]
struct Node {
    /// Keyword recognized when a word ends exactly at this node.
    accept: Option<TokenKind>,
    /// Child node per lowercase letter; 0 means no edge (the root is node 0
    /// and is never a child).
    children: [u32; 26],
}

/// A prefix trie over a fixed set of lowercase-ASCII keywords.
pub struct KeywordTrie {
    nodes: Vec<Node>,
}

impl KeywordTrie {
    fn build(words: &[(&str, TokenKind)]) -> Self {
        let mut trie = Self {
            nodes: vec![Node::default()],
        };
        for &(word, kind) in words {
            trie.insert(word, kind);
        }
        trie
    }

    fn insert(&mut self, word: &str, kind: TokenKind) {
        debug_assert!(word.bytes().all(|b| b.is_ascii_lowercase()));
        let mut node = 0usize;
        for b in word.bytes() {
            let slot = (b - b'a') as usize;
            let next = self.nodes[node].children[slot];
            node = if next == 0 {
                let id = self.nodes.len() as u32;
                self.nodes.push(Node::default());
                self.nodes[node].children[slot] = id;
                id as usize
            } else {
                next as usize
            };
        }
        debug_assert!(self.nodes[node].accept.is_none(), "duplicate keyword");
        self.nodes[node].accept = Some(kind);
    }

    /// The starting node for a keyword walk.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Follows the edge for `c`, or returns `None` if no keyword continues
    /// this way (the walk abandons to identifier scanning).
    pub fn step(&self, node: NodeId, c: char) -> Option<NodeId> {
        if !c.is_ascii_lowercase() {
            return None;
        }
        let slot = (c as u8 - b'a') as usize;
        let next = self.nodes[node.0 as usize].children[slot];
        if next == 0 {
            None
        } else {
            Some(NodeId(next))
        }
    }

    /// The keyword recognized when a word ends exactly at `node`.
    pub fn accept(&self, node: NodeId) -> Option<TokenKind> {
        self.nodes[node.0 as usize].accept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(trie: &KeywordTrie, word: &str) -> Option<NodeId> {
        let mut node = trie.root();
        for c in word.chars() {
            node = trie.step(node, c)?;
        }
        Some(node)
    }

    #[test]
    fn test_every_keyword_is_accepted() {
        for &(word, kind) in KEYWORDS {
            let node = walk(&KEYWORD_TRIE, word).expect(word);
            assert_eq!(KEYWORD_TRIE.accept(node), Some(kind), "{}", word);
        }
    }

    #[test]
    fn test_proper_prefix_is_not_accepted() {
        let node = walk(&KEYWORD_TRIE, "beg").unwrap();
        assert_eq!(KEYWORD_TRIE.accept(node), None);
        let node = walk(&KEYWORD_TRIE, "pr").unwrap();
        assert_eq!(KEYWORD_TRIE.accept(node), None);
    }

    #[test]
    fn test_divergent_letter_abandons_walk() {
        let node = walk(&KEYWORD_TRIE, "di").unwrap();
        assert_eq!(KEYWORD_TRIE.step(node, 'x'), None);
    }

    #[test]
    fn test_no_edge_past_a_complete_keyword() {
        let node = walk(&KEYWORD_TRIE, "end").unwrap();
        assert_eq!(KEYWORD_TRIE.step(node, 'e'), None);
    }

    #[test]
    fn test_uppercase_never_continues() {
        assert_eq!(KEYWORD_TRIE.step(KEYWORD_TRIE.root(), 'B'), None);
    }

    #[test]
    fn test_shared_prefixes_split() {
        // `program` and `print` share only `pr`.
        let pr = walk(&KEYWORD_TRIE, "pr").unwrap();
        assert!(KEYWORD_TRIE.step(pr, 'o').is_some());
        assert!(KEYWORD_TRIE.step(pr, 'i').is_some());
        assert_eq!(KEYWORD_TRIE.step(pr, 'z'), None);
    }
}
