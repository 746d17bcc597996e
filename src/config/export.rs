//! Export configuration module.
//!
//! Controls how a trie is laid out when written to its JSON encoding.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest indentation accepted for pretty-printed exports.
pub const MAX_INDENT: usize = 16;

/// Export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Number of spaces per nesting level when `pretty` is set
    pub indent: usize,

    /// Whether to emit one key per line; compact single-line JSON otherwise
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            pretty: true,
        }
    }
}

impl ExportConfig {
    /// Creates a new export configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation width. An indent of 0 still breaks lines.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets whether the output is pretty-printed.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Compact single-line output.
    pub fn compact() -> Self {
        Self::default().with_pretty(false)
    }
}

impl Validate for ExportConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.indent > MAX_INDENT {
            return Err(ConfigError::ValueOutOfRange {
                key: "export.indent".to_string(),
                message: format!("must be at most {MAX_INDENT}, got {}", self.indent),
            });
        }
        Ok(())
    }
}
