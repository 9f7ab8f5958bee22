//! Tests for the deduplicating warning system.

use age_common::warning::{record_warning, warn_once, was_warned};

#[test]
fn test_record_warning_deduplicates() {
    assert!(record_warning("Test", "dedup-a"));
    assert!(!record_warning("Test", "dedup-a"));
    assert!(record_warning("Test", "dedup-b"));
}

#[test]
fn test_component_is_part_of_the_key() {
    assert!(record_warning("Style", "same message"));
    assert!(record_warning("Layout", "same message"));
}

#[test]
fn test_warn_once_records() {
    warn_once("Test", "printed once");
    assert!(was_warned("Test", "printed once"));
    assert!(!was_warned("Test", "never printed"));
}
