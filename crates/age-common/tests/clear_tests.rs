//! Clearing the warning set.
//!
//! Kept in its own test binary: clearing is global and would race the
//! other warning tests.

use age_common::warning::{clear_warnings, record_warning, warn_once, was_warned};

#[test]
fn test_clear_warnings_allows_repeats() {
    warn_once("Scene", "first scene warning");
    assert!(was_warned("Scene", "first scene warning"));

    clear_warnings();
    assert!(!was_warned("Scene", "first scene warning"));
    assert!(record_warning("Scene", "first scene warning"));
}
