// Copyright (c) 2025 WordTrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Streaming phrase search over a token stream.
//!
//! The search extends the current match for as long as the next token continues a
//! trie path, and only resolves when the path breaks. At that point the node the
//! match stopped on is emitted if it holds a value, and the breaking token is
//! retried against the root so that it can start the next match.
//!
//! A match that breaks on a node without a value emits nothing, even when a shorter
//! valued phrase was passed on the way: with `a -> 1` and `a b c -> 2`, the stream
//! `a b x` yields no hits.

use std::iter::FusedIterator;

use super::node::TrieNode;

/// A phrase found by a streaming search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'t, V> {
    /// The tokens that make up the matched phrase, in stream order
    pub span: Vec<String>,

    /// The value stored for the phrase
    pub value: &'t V,
}

impl<'t, V> SearchHit<'t, V> {
    /// Converts the hit into an owned `(span, value)` pair.
    pub fn into_owned(self) -> (Vec<String>, V)
    where
        V: Clone,
    {
        (self.span, self.value.clone())
    }
}

/// Iterator over the phrases found in a token stream.
///
/// Created by [`WordTrie::search_iter`](super::WordTrie::search_iter). Tokens are
/// pulled lazily, so the stream may be arbitrarily long.
#[derive(Debug)]
pub struct SearchIter<'t, V, I: Iterator> {
    /// Root of the searched trie
    root: &'t TrieNode<V>,

    /// Node reached by the current match, or the root when idle
    node: &'t TrieNode<V>,

    /// Remaining tokens
    tokens: std::iter::Fuse<I>,

    /// Tokens of the current match
    span: Vec<String>,

    /// Whether a match is in progress
    matching: bool,

    /// Whether matched tokens are recorded in `span`
    record_spans: bool,
}

impl<'t, V, I> SearchIter<'t, V, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub(crate) fn new(root: &'t TrieNode<V>, tokens: I, record_spans: bool) -> Self {
        Self {
            root,
            node: root,
            tokens: tokens.fuse(),
            span: Vec::new(),
            matching: false,
            record_spans,
        }
    }

    /// Resolves the match in progress, returning a hit if it ended on a value.
    fn finish_match(&mut self) -> Option<SearchHit<'t, V>> {
        let span = std::mem::take(&mut self.span);
        let node = std::mem::replace(&mut self.node, self.root);
        self.matching = false;
        node.value().map(|value| SearchHit { span, value })
    }

    /// Moves to `child` and records `token` as part of the current match.
    fn advance(&mut self, child: &'t TrieNode<V>, token: &str) {
        self.node = child;
        self.matching = true;
        if self.record_spans {
            self.span.push(token.to_owned());
        }
    }
}

impl<'t, V, I> Iterator for SearchIter<'t, V, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = SearchHit<'t, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(token) = self.tokens.next() {
            let token = token.as_ref();

            if let Some(child) = self.node.child(token) {
                self.advance(child, token);
                continue;
            }

            if !self.matching {
                // Idle: the pointer is the root, so the token starts nothing.
                continue;
            }

            let hit = self.finish_match();

            // Restart: the breaking token may begin the next phrase.
            if let Some(child) = self.root.child(token) {
                self.advance(child, token);
            }

            if hit.is_some() {
                return hit;
            }
        }

        if self.matching {
            return self.finish_match();
        }
        None
    }
}

impl<'t, V, I> FusedIterator for SearchIter<'t, V, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}

#[cfg(test)]
mod tests {
    use crate::trie::WordTrie;
    use test_case::test_case;

    /// `a b -> 1`, `c -> 2`, `x y z -> 3`, `x -> 4`.
    fn fixture() -> WordTrie<i32> {
        let mut trie = WordTrie::new();
        trie.add("a b", 1);
        trie.add("c", 2);
        trie.add("x y z", 3);
        trie.add("x", 4);
        trie
    }

    #[test_case("a b c", &[1, 2] ; "restart after completed phrase")]
    #[test_case("a c", &[2] ; "unfinished prefix is dropped")]
    #[test_case("a b", &[1] ; "flush at end of stream")]
    #[test_case("", &[] ; "empty stream")]
    #[test_case("q r s", &[] ; "no known tokens")]
    #[test_case("c c c", &[2, 2, 2] ; "repeated single token phrase")]
    #[test_case("q a b q c q", &[1, 2] ; "unknown tokens between phrases")]
    #[test_case("x y z", &[3] ; "longest extension wins")]
    #[test_case("x y q", &[] ; "dead end past valued prefix emits nothing")]
    #[test_case("x x", &[4, 4] ; "breaking token restarts at root")]
    #[test_case("a a b", &[1] ; "failed prefix restarts on same token")]
    #[test_case("x c", &[4, 2] ; "valued prefix emitted on break")]
    fn test_search(stream: &str, expected: &[i32]) {
        let trie = fixture();
        let found: Vec<i32> = trie.search(stream).into_iter().copied().collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_search_with_spans() {
        let trie = fixture();
        let hits: Vec<(Vec<String>, i32)> = trie
            .search_with_spans(["a", "b", "c"])
            .into_iter()
            .map(|hit| hit.into_owned())
            .collect();

        assert_eq!(
            hits,
            vec![
                (vec!["a".to_string(), "b".to_string()], 1),
                (vec!["c".to_string()], 2),
            ]
        );
    }

    #[test]
    fn test_spans_keep_original_tokens() {
        let mut trie = WordTrie::new();
        trie.add(["#tag", "#"], "hashes");

        let hits = trie.search_with_spans(["q", "#tag", "#", "q"]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].span, ["#tag", "#"]);
        assert_eq!(*hits[0].value, "hashes");
    }

    #[test]
    fn test_empty_trie_finds_nothing() {
        let trie: WordTrie<i32> = WordTrie::new();
        assert!(trie.search("a b c").is_empty());
    }

    #[test]
    fn test_root_value_is_never_emitted() {
        let mut trie = fixture();
        trie.add("", 99);

        assert_eq!(trie.get(""), Some(&99));
        assert_eq!(trie.search("q a b"), vec![&1]);
    }

    #[test]
    fn test_iterator_is_lazy_and_fused() {
        let trie = fixture();
        let mut iter = trie.search_iter("a b c q");

        let first = iter.next().expect("first hit");
        assert_eq!(first.span, ["a", "b"]);
        assert_eq!(*first.value, 1);

        let second = iter.next().expect("second hit");
        assert_eq!(second.span, ["c"]);

        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
