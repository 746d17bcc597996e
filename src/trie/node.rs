// Copyright (c) 2025 WordTrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the word trie.
//!
//! Each node owns its children by value, so the whole structure is a strict
//! tree: no shared references, no parent pointers.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Child map keyed by the literal token.
pub(crate) type Children<V> = HashMap<String, TrieNode<V>, FnvBuildHasher>;

/// A node in the word trie.
///
/// A node reached by a token path holds a value only if that exact path was
/// inserted as a phrase. Nodes without a value are internal prefixes.
#[derive(Debug, Clone, PartialEq)]
pub struct TrieNode<V> {
    /// Map of tokens to child nodes
    pub(crate) children: Children<V>,

    /// Value of the phrase ending at this node
    pub(crate) value: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: Children::default(),
            value: None,
        }
    }

    /// Returns the child reached by `token`, if any.
    #[inline]
    pub fn child(&self, token: &str) -> Option<&TrieNode<V>> {
        self.children.get(token)
    }

    /// Returns the value stored at this node.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// A node with neither children nor a value carries no information.
    pub(crate) fn is_vacant(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Returns the child for `token`, creating an empty one if needed.
    pub(crate) fn child_or_insert(&mut self, token: &str) -> &mut TrieNode<V> {
        self.children.entry_ref(token).or_insert_with(TrieNode::new)
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for TrieNode<V> {
    // Descendants are detached onto a heap stack so that dropping a long
    // phrase does not recurse once per token.
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }

        let mut pending: Vec<TrieNode<V>> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
