//! Menu orderings.
//!
//! Every named ordering is a [`MenuSort`] variant carrying the key it is
//! memoized under in [`MenuCache`](super::MenuCache). All sorts are stable:
//! entries the comparator considers equal keep their input order, so the
//! rendered navigation never changes between two builds of the same site.
//!
//! # Default order
//!
//! ```text
//! weight -3 ─┐
//! weight  5  ├── explicit weights, ascending
//! weight 10 ─┘
//! weight  0 ─┐
//! weight  0 ─┴── unset weights last, by name then identifier
//! ```

use std::{cmp::Ordering, sync::Arc};

use super::entry::MenuEntry;
use crate::utils::compare::compare_strings;

/// A named, memoizable view over a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuSort {
    /// Weight, then name, then identifier.
    ByWeight,
    /// Name only.
    ByName,
    /// Structural reversal of the current order.
    Reverse,
}

impl MenuSort {
    /// Cache key for this ordering.
    pub const fn key(self) -> &'static str {
        match self {
            Self::ByWeight => "menuSort.ByWeight",
            Self::ByName => "menuSort.ByName",
            Self::Reverse => "menuSort.Reverse",
        }
    }

    /// Reorder `entries` in place.
    pub fn apply(self, entries: &mut [Arc<MenuEntry>]) {
        match self {
            Self::ByWeight => entries.sort_by(|a, b| default_order(a, b)),
            Self::ByName => entries.sort_by(|a, b| name_order(a, b)),
            Self::Reverse => entries.reverse(),
        }
    }
}

/// Weight, then name, then identifier.
///
/// A zero weight means "unset" and sorts after any explicit weight,
/// including negative ones.
pub fn default_order(a: &MenuEntry, b: &MenuEntry) -> Ordering {
    match (a.weight, b.weight) {
        (wa, wb) if wa == wb => compare_strings(&a.name, &b.name)
            .then_with(|| a.identifier.cmp(&b.identifier)),
        (_, 0) => Ordering::Less,
        (0, _) => Ordering::Greater,
        (wa, wb) => wa.cmp(&wb),
    }
}

pub fn name_order(a: &MenuEntry, b: &MenuEntry) -> Ordering {
    compare_strings(&a.name, &b.name)
}
