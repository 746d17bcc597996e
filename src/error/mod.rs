//! Error module for WordTrie.
//!
//! Lookups never fail: an unknown phrase is reported as `None`, not as an error.
//! The variants here cover the persistence boundary (reading and writing the JSON
//! node structure) and the ambient configuration and logging setup.

use std::path::PathBuf;
use thiserror::Error;

pub mod config;

/// Result type alias used throughout WordTrie.
pub type WordTrieResult<T> = Result<T, WordTrieError>;

/// Core error enum for WordTrie.
#[derive(Error, Debug)]
pub enum WordTrieError {
    /// Persisted data is not a validly nested trie encoding.
    #[error("Malformed trie data: {0}")]
    MalformedData(#[source] serde_json::Error),

    /// A stored value could not be serialized during export.
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The import source at `path` could not be opened or read.
    #[error("Failed to read trie from {}: {source}", .path.display())]
    SourceUnreadable {
        /// Path of the source file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The export destination at `path` could not be created or written.
    #[error("Failed to write trie to {}: {source}", .path.display())]
    DestinationUnwritable {
        /// Path of the destination file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// I/O errors on caller-supplied readers and writers.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

impl WordTrieError {
    /// Classifies a JSON error raised while reading `path`.
    pub(crate) fn from_read(path: PathBuf, error: serde_json::Error) -> Self {
        if error.is_io() {
            Self::SourceUnreadable {
                path,
                source: error.into(),
            }
        } else {
            Self::MalformedData(error)
        }
    }

    /// Classifies a JSON error raised while writing `path`.
    pub(crate) fn from_write(path: PathBuf, error: serde_json::Error) -> Self {
        if error.is_io() {
            Self::DestinationUnwritable {
                path,
                source: error.into(),
            }
        } else {
            Self::Serialization(error)
        }
    }

    /// Returns `true` if the error stems from malformed persisted data.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedData(_))
    }
}
