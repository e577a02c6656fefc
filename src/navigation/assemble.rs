//! Menu tree assembly.
//!
//! Entries arrive flat, each naming its menu and (optionally) the key of its
//! parent. Assembly turns them into one sorted forest per menu:
//!
//! ```text
//! flat entries                      Menus
//! ─────────────                     ─────
//! main/home                         main
//! main/blog                          ├── home
//! main/rust    (parent = blog)       ├── blog
//! main/async   (parent = rust)       │    └── rust
//! footer/rss                         │         └── async
//!                                    footer
//!                                    └── rss
//! ```
//!
//! - Entries are identified by `(menu, key_name)`; a later duplicate replaces
//!   the earlier one but keeps its position.
//! - A parent key with no entry gets a placeholder entry named after the key.
//! - Entries whose parent chain never reaches the top level (a cycle) are
//!   dropped.

use std::{collections::BTreeMap, sync::Arc};

use rustc_hash::FxHashMap;

use super::{
    entry::MenuEntry,
    menu::{Menu, Menus},
};
use crate::log;

type EntryId = (String, String);

/// Build sorted menu trees from flat entries.
pub fn assemble<I>(entries: I) -> Menus
where
    I: IntoIterator<Item = MenuEntry>,
{
    let mut flat: Vec<Option<MenuEntry>> = Vec::new();
    let mut index: FxHashMap<EntryId, usize> = FxHashMap::default();

    for entry in entries {
        let id = (entry.menu.clone(), entry.key_name().to_owned());
        match index.get(&id) {
            Some(&i) => flat[i] = Some(entry),
            None => {
                index.insert(id, flat.len());
                flat.push(Some(entry));
            }
        }
    }

    // Parent id -> child positions, in input order
    let mut children: FxHashMap<EntryId, Vec<usize>> = FxHashMap::default();
    let mut missing_parents: Vec<EntryId> = Vec::new();
    for (i, entry) in flat.iter().enumerate() {
        let Some(entry) = entry else { continue };
        if entry.parent.is_empty() {
            continue;
        }
        let parent_id = (entry.menu.clone(), entry.parent.clone());
        if !index.contains_key(&parent_id) && !children.contains_key(&parent_id) {
            missing_parents.push(parent_id.clone());
        }
        children.entry(parent_id).or_default().push(i);
    }

    for (menu, key) in missing_parents {
        log!("menu"; "no entry `{key}` in menu `{menu}`, adding a placeholder parent");
        flat.push(Some(MenuEntry::new(key, "").with_menu(menu)));
    }

    let roots: Vec<usize> = flat
        .iter()
        .enumerate()
        .filter(|(_, e)| e.as_ref().is_some_and(|e| e.parent.is_empty()))
        .map(|(i, _)| i)
        .collect();

    let mut top: BTreeMap<String, Vec<Arc<MenuEntry>>> = BTreeMap::new();
    for i in roots {
        if let Some(entry) = build(i, &mut flat, &children) {
            top.entry(entry.menu.clone()).or_default().push(entry);
        }
    }
    let menus: Menus = top
        .into_iter()
        .map(|(name, entries)| {
            let mut menu = Menu::from(entries);
            menu.sort();
            (name, menu)
        })
        .collect();

    for entry in flat.into_iter().flatten() {
        log!(
            "menu";
            "dropping `{}` in menu `{}`: parent chain never reaches the top level",
            entry.key_name(),
            entry.menu
        );
    }

    menus
}

/// An entry whose children are still being built.
struct Frame<'a> {
    entry: MenuEntry,
    /// `None` when nothing names this entry as parent.
    pending: Option<std::slice::Iter<'a, usize>>,
    built: Vec<Arc<MenuEntry>>,
}

impl<'a> Frame<'a> {
    fn new(entry: MenuEntry, children: &'a FxHashMap<EntryId, Vec<usize>>) -> Self {
        let id = (entry.menu.clone(), entry.key_name().to_owned());
        Self {
            pending: children.get(&id).map(|positions| positions.iter()),
            built: Vec::new(),
            entry,
        }
    }
}

/// Take entry `root` out of `flat` and attach its descendants.
///
/// Walks the subtree with an explicit stack, so arbitrarily deep parent
/// chains cannot overflow the call stack.
fn build(
    root: usize,
    flat: &mut [Option<MenuEntry>],
    children: &FxHashMap<EntryId, Vec<usize>>,
) -> Option<Arc<MenuEntry>> {
    let mut stack = vec![Frame::new(flat[root].take()?, children)];

    loop {
        let top = stack.last_mut()?;
        if let Some(&c) = top.pending.as_mut().and_then(|it| it.next()) {
            if let Some(child) = flat[c].take() {
                stack.push(Frame::new(child, children));
            }
            continue;
        }

        let Frame { mut entry, pending, built } = stack.pop()?;
        if pending.is_some() {
            let mut menu = Menu::from(built);
            menu.sort();
            entry.children = Some(menu);
        }

        let entry = Arc::new(entry);
        match stack.last_mut() {
            Some(parent) => parent.built.push(entry),
            None => return Some(entry),
        }
    }
}
