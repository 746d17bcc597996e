//! Test modules for WordTrie.
//!
//! This module contains the crate-level testing infrastructure:
//! - Configuration loading and validation tests
//! - Error classification tests
//! - Property-based tests of the trie engine using proptest
//! - Shared strategies and fixtures

pub mod config_tests;
pub mod test_utils;

pub use test_utils::{insertions_strategy, phrase_strategy, stream_strategy, TestFixture};
