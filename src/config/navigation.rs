//! `[navigation]` section configuration.
//!
//! Controls how menus are ordered when they are printed or handed to
//! templates without an explicit ordering.

use super::defaults;
use crate::navigation::{Menu, MenuCache};
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Ordering applied to each menu level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Weight, then name, then identifier (default).
    #[default]
    Weight,
    /// Name only.
    Name,
}

/// `[navigation]` section in tola.toml.
///
/// # Example
/// ```toml
/// [navigation]
/// default_sort = "name"
/// reverse = true
/// limit = 5
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    #[serde(default = "defaults::navigation::default_sort")]
    #[educe(Default = defaults::navigation::default_sort())]
    pub default_sort: SortMode,

    /// Reverse the ordering after sorting.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub reverse: bool,

    /// Keep at most this many entries per level.
    #[serde(default = "defaults::navigation::limit")]
    #[educe(Default = defaults::navigation::limit())]
    pub limit: Option<usize>,
}

impl NavigationConfig {
    /// Apply the configured ordering to one menu level, memoized in `cache`.
    pub fn order(&self, menu: &Menu, cache: &MenuCache) -> Menu {
        let sorted = match self.default_sort {
            SortMode::Weight => menu.by_weight(cache),
            SortMode::Name => menu.by_name(cache),
        };
        let sorted = if self.reverse {
            sorted.reverse(cache)
        } else {
            sorted
        };
        match self.limit {
            Some(n) => sorted.limit(n),
            None => sorted,
        }
    }
}
