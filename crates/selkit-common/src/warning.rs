//! Diagnostic warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector and object crates to report lossy-but-accepted input.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// A poisoned lock only means another thread panicked mid-insert; the set is
/// still usable.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about questionable input (prints once per unique message).
///
/// Returns `true` if the warning was printed, `false` if it had already
/// been reported.
///
/// # Example
/// ```ignore
/// warn_once("Objects", "ignoring 1 surplus value reviving Rectangle");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = warned().get_or_insert_with(HashSet::new).insert(key);

    if should_print {
        eprintln!("{}", format!("[selkit {component}] ⚠ {message}").yellow());
    }
    should_print
}

/// Number of distinct warnings recorded since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    warned().as_ref().map_or(0, HashSet::len)
}

/// Clear all recorded warnings so they can be reported again.
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
