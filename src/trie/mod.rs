// Copyright (c) 2025 WordTrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word Trie Implementation
//!
//! A prefix tree whose edges are whole tokens rather than characters. Each
//! inserted phrase (a token sequence) carries a caller-defined value, which can
//! then be recovered by exact lookup or found inside a longer token stream.
//!
//! # Example
//!
//! ```
//! use wordtrie::WordTrie;
//!
//! let mut trie = WordTrie::new();
//! trie.add("new york", "city");
//! trie.add("new york state", "state");
//! trie.add(["los", "angeles"], "city");
//!
//! assert_eq!(trie.get("new york"), Some(&"city"));
//! assert_eq!(trie.get("new"), None);
//!
//! let found = trie.search("from new york state to los angeles");
//! assert_eq!(found, vec![&"state", &"city"]);
//! ```
//!
//! # Performance Characteristics
//!
//! - `add` and `get`: O(k) map lookups for a phrase of k tokens
//! - `search`: O(n) map lookups for a stream of n tokens
//! - `len` and `phrases`: O(size of the trie)

pub mod aggregate;
mod codec;
mod node;
mod persist;
mod search;
pub mod shared;
mod tokens;

pub use codec::VALUE_KEY;
pub use node::TrieNode;
pub use search::{SearchHit, SearchIter};
pub use shared::SharedWordTrie;
pub use tokens::{IntoTokens, Tokens};

use serde::{Deserialize, Serialize};

/// A prefix tree keyed on tokens.
///
/// Key features:
/// * Exact phrase lookup with [`get`](Self::get)
/// * Streaming phrase search with restart semantics via [`search`](Self::search)
/// * Caller-controlled merging of values for repeated phrases
/// * JSON persistence compatible with existing trie files
///
/// Reads take `&self` and writes take `&mut self`, so a trie can be built once
/// and then shared read-only across threads. See [`SharedWordTrie`] for
/// interleaved reads and writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordTrie<V = serde_json::Value> {
    /// The root node of the trie
    root: TrieNode<V>,
}

impl<V> WordTrie<V> {
    /// Creates a new empty `WordTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    /// Builds a trie around an existing root node.
    pub fn from_root(root: TrieNode<V>) -> Self {
        Self { root }
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode<V> {
        &self.root
    }

    /// Inserts a phrase, replacing any value already stored for it.
    ///
    /// # Arguments
    ///
    /// * `tokens` - The phrase. Strings are split on whitespace.
    /// * `value` - The value to associate with the phrase.
    pub fn add<T: IntoTokens>(&mut self, tokens: T, value: V) {
        self.add_with(tokens, value, aggregate::replace);
    }

    /// Inserts a phrase, merging with an existing value through `aggregator`.
    ///
    /// `aggregator(existing, value)` is only called when the phrase already holds
    /// a value; a first insertion stores `value` as is.
    ///
    /// # Arguments
    ///
    /// * `tokens` - The phrase. Strings are split on whitespace.
    /// * `value` - The value to associate with the phrase.
    /// * `aggregator` - Merges the existing value with the new one.
    ///
    /// # Example
    ///
    /// ```
    /// use wordtrie::WordTrie;
    ///
    /// let mut counts = WordTrie::new();
    /// for phrase in ["good morning", "good night", "good morning"] {
    ///     counts.add_with(phrase, 1, |old, new| old + new);
    /// }
    /// assert_eq!(counts.get("good morning"), Some(&2));
    /// ```
    pub fn add_with<T, F>(&mut self, tokens: T, value: V, aggregator: F)
    where
        T: IntoTokens,
        F: FnOnce(V, V) -> V,
    {
        let mut node = &mut self.root;
        let mut depth = 0usize;
        for token in tokens.into_tokens() {
            node = node.child_or_insert(token.as_ref());
            depth += 1;
        }

        let merged = match node.value.take() {
            Some(existing) => aggregator(existing, value),
            None => value,
        };
        node.value = Some(merged);

        tracing::trace!(depth, "phrase added");
    }

    /// Looks up the value stored for exactly this phrase.
    ///
    /// # Returns
    ///
    /// * `Some(&V)` - The phrase was inserted.
    /// * `None` - The phrase is unknown, or is only a prefix of longer phrases.
    pub fn get<T: IntoTokens>(&self, tokens: T) -> Option<&V> {
        self.node(tokens).and_then(TrieNode::value)
    }

    /// Checks whether exactly this phrase was inserted.
    pub fn contains<T: IntoTokens>(&self, tokens: T) -> bool {
        self.get(tokens).is_some()
    }

    /// Returns the node reached by following `tokens` from the root.
    pub fn node<T: IntoTokens>(&self, tokens: T) -> Option<&TrieNode<V>> {
        tokens
            .into_tokens()
            .try_fold(&self.root, |node, token| node.child(token.as_ref()))
    }

    /// Finds every maximal phrase in a token stream and returns their values in
    /// stream order.
    ///
    /// The current match is extended for as long as the stream continues a trie
    /// path. When the path breaks, the value at the break point (if any) is
    /// emitted and the breaking token is retried from the root.
    pub fn search<T: IntoTokens>(&self, tokens: T) -> Vec<&V> {
        SearchIter::new(&self.root, tokens.into_tokens(), false)
            .map(|hit| hit.value)
            .collect()
    }

    /// Like [`search`](Self::search), also reporting the tokens of each phrase.
    pub fn search_with_spans<T: IntoTokens>(&self, tokens: T) -> Vec<SearchHit<'_, V>> {
        self.search_iter(tokens).collect()
    }

    /// Lazily searches a token stream, yielding each hit as soon as it resolves.
    pub fn search_iter<T: IntoTokens>(&self, tokens: T) -> SearchIter<'_, V, T::IntoIter> {
        SearchIter::new(&self.root, tokens.into_tokens(), true)
    }

    /// Returns the number of phrases holding a value.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += usize::from(node.value.is_some());
            stack.extend(node.children.values());
        }
        count
    }

    /// Checks if the trie is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_vacant()
    }

    /// Removes every phrase.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
    }

    /// Returns every phrase with its value, sorted by tokens.
    pub fn phrases(&self) -> Vec<(Vec<String>, &V)> {
        collect_phrases(&self.root, Vec::new())
    }

    /// Returns every phrase starting with `prefix`, including `prefix` itself,
    /// sorted by tokens.
    pub fn phrases_with_prefix<T: IntoTokens>(&self, prefix: T) -> Vec<(Vec<String>, &V)> {
        let prefix: Vec<String> = prefix
            .into_tokens()
            .map(|token| token.as_ref().to_owned())
            .collect();
        match self.node(prefix.as_slice()) {
            Some(node) => collect_phrases(node, prefix),
            None => Vec::new(),
        }
    }
}

/// Depth-first collection of the valued nodes below `start`.
fn collect_phrases<V>(start: &TrieNode<V>, prefix: Vec<String>) -> Vec<(Vec<String>, &V)> {
    let mut result = Vec::new();
    let mut stack = vec![(start, prefix)];

    while let Some((node, path)) = stack.pop() {
        for (token, child) in &node.children {
            let mut child_path = path.clone();
            child_path.push(token.clone());
            stack.push((child, child_path));
        }
        if let Some(value) = &node.value {
            result.push((path, value));
        }
    }

    result.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    result
}

impl<V> Default for WordTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: IntoTokens, V> Extend<(T, V)> for WordTrie<V> {
    fn extend<I: IntoIterator<Item = (T, V)>>(&mut self, iter: I) {
        for (tokens, value) in iter {
            self.add(tokens, value);
        }
    }
}

impl<T: IntoTokens, V> FromIterator<(T, V)> for WordTrie<V> {
    fn from_iter<I: IntoIterator<Item = (T, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
