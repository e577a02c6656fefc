//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::navigation::NavError;

/// Errors from reading `tola.toml` and turning its menus into entries
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML")]
    Toml(#[from] toml::de::Error),

    #[error("invalid navigation config: {0}")]
    Validation(String),

    /// A `[[menus.NAME]]` table that does not convert to an open map.
    #[error("entry {index} in [[menus.{menu}]] has a value that cannot be used")]
    Unrepresentable {
        menu: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid entry {index} in [[menus.{menu}]]")]
    Entry {
        menu: String,
        index: usize,
        #[source]
        source: NavError,
    },
}
