//! String ordering used for menu names.
//!
//! Names are compared case-insensitively first so that `"apple"` and
//! `"Banana"` sort the way a reader expects. Only when two names fold to the
//! same text does the exact (case-sensitive) comparison decide, which keeps
//! the ordering total: `"B"` and `"b"` never compare equal.

use std::cmp::Ordering;

/// Compare two strings, case-folded first, case-sensitive as tiebreaker.
pub fn compare_strings(s: &str, t: &str) -> Ordering {
    match compare_fold(s, t) {
        Ordering::Equal => s.cmp(t),
        ord => ord,
    }
}

#[inline]
fn compare_fold(s: &str, t: &str) -> Ordering {
    let a = s.chars().flat_map(char::to_lowercase);
    let b = t.chars().flat_map(char::to_lowercase);
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_first() {
        assert_eq!(compare_strings("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_strings("Banana", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_case_sensitive_tiebreak() {
        // Uppercase bytes sort first once the folded forms match
        assert_eq!(compare_strings("B", "b"), Ordering::Less);
        assert_eq!(compare_strings("b", "B"), Ordering::Greater);
        assert_eq!(compare_strings("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_strings("Blog", "blogroll"), Ordering::Less);
        assert_eq!(compare_strings("blogroll", "Blog"), Ordering::Greater);
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(compare_strings("Émile", "émile"), Ordering::Less);
        assert_eq!(compare_strings("über", "Zebra"), Ordering::Greater);
        assert_eq!(compare_strings("", "a"), Ordering::Less);
    }
}
