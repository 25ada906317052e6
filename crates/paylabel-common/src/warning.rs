//! Deduplicated renderer warnings.
//!
//! Rendering the same button many times on one page would otherwise repeat
//! the same complaint for every instance. Warnings are emitted through
//! `tracing` at `warn` level, once per unique component/message pair.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a precondition violation (emitted once per unique message)
///
/// `message` is fixed text. Per-call details such as a locale belong in
/// tracing fields at the call site, not in the message.
///
/// # Example
/// ```ignore
/// warn_once("Tag", "no tag content for requested locale");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_emit = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_emit {
        tracing::warn!(component, "{message}");
    }
}

/// Whether a warning with this component and message has already been emitted.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call between independent render passes)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_until_cleared() {
        warn_once("Test", "recorded once");
        warn_once("Test", "recorded once");
        assert!(has_warned("Test", "recorded once"));
        assert!(!has_warned("Other", "recorded once"));

        clear_warnings();
        assert!(!has_warned("Test", "recorded once"));
    }
}
