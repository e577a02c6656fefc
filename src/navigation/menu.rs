//! Menu collections.
//!
//! A [`Menu`] is a cheap-to-clone handle over a shared vector of entries.
//! Mutation goes through copy-on-write, so a menu that has been handed to
//! the [`MenuCache`] (or cloned anywhere else) is never changed under a
//! reader: the writer gets a fresh vector instead, and with it a fresh cache
//! identity.

use std::{collections::BTreeMap, ops::Deref, sync::Arc};

use super::{cache::MenuCache, entry::MenuEntry, sort::MenuSort};

/// Dictionary of menus, keyed by menu name.
pub type Menus = BTreeMap<String, Menu>;

/// Menus a single page appears in, mapped to that page's own entry.
pub type PageMenus = BTreeMap<String, Arc<MenuEntry>>;

/// Ordered collection of menu entries.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    entries: Arc<Vec<Arc<MenuEntry>>>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity of the backing storage, stable while any handle lives.
    #[inline]
    pub(crate) fn storage_id(&self) -> usize {
        Arc::as_ptr(&self.entries) as usize
    }

    /// Append an entry and restore the default order.
    pub fn add(&mut self, entry: impl Into<Arc<MenuEntry>>) {
        let entries = Arc::make_mut(&mut self.entries);
        entries.push(entry.into());
        MenuSort::ByWeight.apply(entries);
    }

    /// Sort in place by weight, then name, then identifier.
    pub fn sort(&mut self) -> &mut Self {
        let entries = Arc::make_mut(&mut self.entries);
        MenuSort::ByWeight.apply(entries);
        self
    }

    /// First `n` entries. Shares storage when nothing is cut off.
    pub fn limit(&self, n: usize) -> Menu {
        if self.entries.len() > n {
            Menu::from(self.entries[..n].to_vec())
        } else {
            self.clone()
        }
    }

    /// Default order, memoized in `cache`.
    pub fn by_weight(&self, cache: &MenuCache) -> Menu {
        cache.apply(MenuSort::ByWeight, self)
    }

    /// Name order, memoized in `cache`.
    pub fn by_name(&self, cache: &MenuCache) -> Menu {
        cache.apply(MenuSort::ByName, self)
    }

    /// Reversed current order, memoized in `cache`.
    pub fn reverse(&self, cache: &MenuCache) -> Menu {
        cache.apply(MenuSort::Reverse, self)
    }

    /// Find a top-level entry by its key name.
    pub fn get_by_key(&self, key: &str) -> Option<&Arc<MenuEntry>> {
        self.entries.iter().find(|e| e.key_name() == key)
    }
}

impl Deref for Menu {
    type Target = [Arc<MenuEntry>];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl From<Vec<Arc<MenuEntry>>> for Menu {
    fn from(entries: Vec<Arc<MenuEntry>>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }
}

impl FromIterator<Arc<MenuEntry>> for Menu {
    fn from_iter<I: IntoIterator<Item = Arc<MenuEntry>>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl FromIterator<MenuEntry> for Menu {
    fn from_iter<I: IntoIterator<Item = MenuEntry>>(iter: I) -> Self {
        iter.into_iter().map(Arc::new).collect()
    }
}

impl<'a> IntoIterator for &'a Menu {
    type Item = &'a Arc<MenuEntry>;
    type IntoIter = std::slice::Iter<'a, Arc<MenuEntry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Same entries, in the same order.
impl PartialEq for Menu {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

impl Eq for Menu {}
