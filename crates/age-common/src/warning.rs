//! Engine warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning on every layout
//! pass. Used by the style resolver and the layout passes to report input
//! that was clamped or ignored instead of rejected.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Format the deduplication key for a component/message pair.
fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Record a warning, returning `true` the first time a given
/// component/message pair is seen.
///
/// A poisoned lock is recovered rather than propagated: a panic on another
/// thread must not turn a diagnostic into a second panic.
pub fn record_warning(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(warning_key(component, message))
}

/// Warn about recovered input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Style", "negative padding-left -4px clamped to 0");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record_warning(component, message) {
        eprintln!("{}", format!("[Age {component}] ⚠ {message}").yellow());
    }
}

/// Returns `true` if a warning with this component/message was already
/// reported since the last [`clear_warnings`].
pub fn was_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}

/// Clear all recorded warnings (call when tearing down a tree or between
/// independent scenes)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
