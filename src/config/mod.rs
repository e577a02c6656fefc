//! Navigation configuration from `tola.toml`.
//!
//! # Sections
//!
//! | Section          | Purpose                                         |
//! |------------------|-------------------------------------------------|
//! | `[navigation]`   | Default ordering, reversal and per-level limit  |
//! | `[[menus.NAME]]` | Entries of menu `NAME`, one table per entry     |
//!
//! Other sections of a site config (`[base]`, `[build]`, ...) are ignored,
//! so the same `tola.toml` can be read here and by the site builder.
//!
//! # Example
//!
//! ```toml
//! [navigation]
//! default_sort = "weight"
//!
//! [[menus.main]]
//! name = "Blog"
//! identifier = "blog"
//! url = "/blog/"
//! weight = 10
//!
//! [[menus.main]]
//! name = "Rust"
//! parent = "blog"
//! url = "/blog/rust/"
//! params = { icon = "crab" }
//!
//! [[menus.footer]]
//! name = "RSS"
//! url = "/rss.xml"
//! ```

pub mod defaults;
mod error;
mod navigation;

pub use error::ConfigError;
pub use navigation::{NavigationConfig, SortMode};

use crate::{
    cli::{Cli, Commands},
    navigation::{MenuEntry, Menus, assemble},
};
use anyhow::{Context, Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// Raw menu definitions: menu name -> entry tables, in file order.
pub type MenuTables = BTreeMap<String, Vec<toml::Table>>;

// ============================================================================
// Root Configuration
// ============================================================================

/// Navigation-related view of tola.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
pub struct NavConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Ordering settings
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Menu definitions
    #[serde(default)]
    pub menus: MenuTables,
}

impl NavConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: NavConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)
            .with_context(|| format!("failed to load `{}`", path.display()))?;
        config.config_path = normalize_path(path);
        Ok(config)
    }

    /// Load the config file named by the CLI and apply CLI overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        if !config_path.exists() {
            bail!("Config file not found: {}", config_path.display());
        }

        let mut config = Self::from_path(&config_path)?;
        config.update_with_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        if let Commands::Show { by, reverse, limit, .. } = &cli.command {
            Self::update_option(&mut self.navigation.default_sort, by.as_ref());
            Self::update_option(&mut self.navigation.reverse, reverse.as_ref());
            if limit.is_some() {
                self.navigation.limit = *limit;
            }
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.navigation.limit == Some(0) {
            bail!(ConfigError::Validation(
                "[navigation.limit] must be greater than 0".into()
            ));
        }

        if let Some(name) = self.menus.keys().find(|name| name.trim().is_empty()) {
            bail!(ConfigError::Validation(format!(
                "[menus] has an invalid menu name `{name}`"
            )));
        }

        Ok(())
    }

    /// Turn the `[menus]` tables into entries, in file order.
    ///
    /// The menu name comes from the section, overriding any `menu` key.
    pub fn entries(&self) -> Result<Vec<MenuEntry>> {
        let mut entries = Vec::new();
        for (menu, tables) in &self.menus {
            for (index, table) in tables.iter().enumerate() {
                let map = serde_json::to_value(table)
                    .and_then(serde_json::from_value::<Map<String, Value>>)
                    .map_err(|source| ConfigError::Unrepresentable {
                        menu: menu.clone(),
                        index,
                        source,
                    })?;

                let mut entry = MenuEntry::from_map(&map).map_err(|source| ConfigError::Entry {
                    menu: menu.clone(),
                    index,
                    source,
                })?;
                entry.menu.clone_from(menu);
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    /// Build the menu trees defined in this config.
    pub fn build_menus(&self) -> Result<Menus> {
        Ok(assemble(self.entries()?))
    }
}

/// Normalize a path to absolute, using canonicalize if the path exists
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}

// ============================================================================
// Tests
// ============================================================================
