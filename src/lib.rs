//! WordTrie Library
//!
//! A prefix tree keyed on words instead of characters. Phrases (token sequences)
//! are stored with an application-defined value and can then be looked up exactly
//! or found inside longer token streams.
//!
//! # Architecture
//!
//! - [`trie`]: the engine, its streaming search and its JSON persistence
//! - [`config`]: layered configuration for export layout and logging
//! - [`error`]: error types for the persistence and configuration boundaries
//! - [`logging`]: optional tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use wordtrie::WordTrie;
//!
//! let mut trie = WordTrie::new();
//! trie.add("a b", 1);
//! trie.add("c", 2);
//!
//! assert_eq!(trie.search("a b c"), vec![&1, &2]);
//! assert_eq!(trie.search("a c"), vec![&2]);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use config::{ConfigLoader, ExportConfig, LogConfig, WordTrieConfig};
pub use error::{WordTrieError, WordTrieResult};
pub use trie::{aggregate, IntoTokens, SearchHit, SearchIter, SharedWordTrie, Tokens, TrieNode, WordTrie};

/// Version information for WordTrie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
