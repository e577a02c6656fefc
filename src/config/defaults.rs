//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [navigation] Section Defaults
// ============================================================================

pub mod navigation {
    use super::super::SortMode;

    pub fn default_sort() -> SortMode {
        SortMode::Weight
    }

    pub fn limit() -> Option<usize> {
        None
    }
}
