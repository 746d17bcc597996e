// Copyright (c) 2025 WordTrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe handle around a [`WordTrie`].
//!
//! Writers take an exclusive lock and readers a shared one, so lookups and
//! searches run in parallel while insertions and imports are serialized.
//! Values are cloned out of the lock rather than borrowed.

use std::path::Path;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{IntoTokens, WordTrie};
use crate::config::ExportConfig;
use crate::error::WordTrieResult;

/// A cloneable, lock-guarded word trie.
#[derive(Debug)]
pub struct SharedWordTrie<V = serde_json::Value> {
    inner: Arc<RwLock<WordTrie<V>>>,
}

impl<V> SharedWordTrie<V> {
    /// Creates a new empty shared trie.
    pub fn new() -> Self {
        Self::from_trie(WordTrie::new())
    }

    /// Wraps an existing trie.
    pub fn from_trie(trie: WordTrie<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Inserts a phrase, replacing any existing value.
    pub fn add<T: IntoTokens>(&self, tokens: T, value: V) {
        self.inner.write().add(tokens, value);
    }

    /// Inserts a phrase, merging with an existing value through `aggregator`.
    pub fn add_with<T, F>(&self, tokens: T, value: V, aggregator: F)
    where
        T: IntoTokens,
        F: FnOnce(V, V) -> V,
    {
        self.inner.write().add_with(tokens, value, aggregator);
    }

    /// Checks whether exactly this phrase was inserted.
    pub fn contains<T: IntoTokens>(&self, tokens: T) -> bool {
        self.inner.read().contains(tokens)
    }

    /// Returns the number of phrases holding a value.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks if the trie is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Acquires a shared lock for several reads against one consistent state.
    pub fn read(&self) -> RwLockReadGuard<'_, WordTrie<V>> {
        self.inner.read()
    }

    /// Acquires the exclusive lock.
    pub fn write(&self) -> RwLockWriteGuard<'_, WordTrie<V>> {
        self.inner.write()
    }
}

impl<V: Clone> SharedWordTrie<V> {
    /// Looks up the value stored for exactly this phrase.
    pub fn get<T: IntoTokens>(&self, tokens: T) -> Option<V> {
        self.inner.read().get(tokens).cloned()
    }

    /// Streams `tokens` through the trie and returns the values found.
    pub fn search<T: IntoTokens>(&self, tokens: T) -> Vec<V> {
        self.inner
            .read()
            .search(tokens)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Streams `tokens` through the trie and returns `(span, value)` pairs.
    pub fn search_with_spans<T: IntoTokens>(&self, tokens: T) -> Vec<(Vec<String>, V)> {
        self.inner
            .read()
            .search_iter(tokens)
            .map(|hit| hit.into_owned())
            .collect()
    }

    /// Returns a copy of the current trie.
    pub fn snapshot(&self) -> WordTrie<V> {
        self.inner.read().clone()
    }
}

impl<V: Serialize> SharedWordTrie<V> {
    /// Writes the trie to `path` under a shared lock.
    pub fn export_to_path<P: AsRef<Path>>(&self, path: P, config: &ExportConfig) -> WordTrieResult<()> {
        self.inner.read().export_to_path(path, config)
    }
}

impl<V: DeserializeOwned> SharedWordTrie<V> {
    /// Replaces the contents with the trie stored at `path`.
    ///
    /// The file is parsed before the exclusive lock is taken, so readers are only
    /// blocked for the swap, and a failed import leaves the contents untouched.
    pub fn import_from_path<P: AsRef<Path>>(&self, path: P) -> WordTrieResult<()> {
        let loaded = WordTrie::from_path(path)?;
        *self.inner.write() = loaded;
        Ok(())
    }
}

impl<V> Clone for SharedWordTrie<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Default for SharedWordTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<WordTrie<V>> for SharedWordTrie<V> {
    fn from(trie: WordTrie<V>) -> Self {
        Self::from_trie(trie)
    }
}
