//! Tracing subscriber setup.
//!
//! The library itself only emits `tracing` events; embedding applications call
//! [`init_logging`] once at startup if they want WordTrie to install the global
//! subscriber for them.

use crate::config::LogConfig;
use crate::error::{WordTrieError, WordTrieResult};
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGING: OnceCell<()> = OnceCell::new();

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over `config.level` when set. Calling this more than
/// once is a no-op after the first successful call.
///
/// # Errors
///
/// Returns [`WordTrieError::Custom`] if another global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> WordTrieResult<()> {
    LOGGING.get_or_try_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_file(config.source_location)
            .with_line_number(config.source_location);

        let installed = if config.json {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        installed.map_err(|e| {
            WordTrieError::Custom(format!("Failed to set global tracing subscriber: {e}"))
        })
    })?;
    Ok(())
}
