//! Test utilities and fixtures for WordTrie.
//!
//! This module provides reusable proptest strategies and a temporary directory
//! fixture for tests that touch the file system or the environment.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::path::PathBuf;
use tempfile::TempDir;

/// Maximum number of tokens in a generated phrase.
const MAX_PHRASE_LENGTH: usize = 5;

/// Maximum number of phrases in a generated trie.
const MAX_PHRASES: usize = 20;

/// Maximum number of tokens in a generated search stream.
const MAX_STREAM_LENGTH: usize = 40;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Generate tokens from a small alphabet.
///
/// The alphabet includes the reserved `#` character and the empty token so that
/// escaping and collisions are exercised, and is small enough that generated
/// phrases share prefixes and streams actually hit them.
pub fn token_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        4 => "[a-c]",
        1 => "#[a-b#]{0,2}",
        1 => Just(String::new()),
    ]
    .boxed()
}

/// Generate a phrase of zero or more tokens.
pub fn phrase_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(token_strategy(), 0..=MAX_PHRASE_LENGTH).boxed()
}

/// Generate a list of `(phrase, value)` insertions.
pub fn insertions_strategy() -> BoxedStrategy<Vec<(Vec<String>, i64)>> {
    proptest::collection::vec((phrase_strategy(), any::<i64>()), 0..MAX_PHRASES).boxed()
}

/// Generate a token stream to search.
pub fn stream_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(token_strategy(), 0..MAX_STREAM_LENGTH).boxed()
}

/// Test fixture for tests requiring files or environment variables.
///
/// Environment variables set through the fixture are removed when it is dropped.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Vector of environment variables to cleanup after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: create_test_dir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Path of `name` inside the fixture directory, without creating it.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
