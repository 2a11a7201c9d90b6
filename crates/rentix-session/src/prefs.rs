//! # Preference Storage Seam
//!
//! The one piece of persisted state in the whole system is a single boolean
//! theme preference. Actual storage belongs to an external collaborator
//! (platform key-value prefs); the session only produces and consumes the
//! value through this trait.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// The preference-storage collaborator.
///
/// ## Contract
/// - `load_bool` returns the stored value, or `false` when the key has
///   never been written
/// - `save_bool` persists immediately; the session calls it on every
///   theme toggle
pub trait ThemePrefs: Send {
    fn load_bool(&self, key: &str) -> bool;
    fn save_bool(&mut self, key: &str, value: bool);
}

/// In-memory preference store for tests and headless use.
///
/// Clones share the same backing map, so a test can keep a handle and
/// observe what the session persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    values: Arc<Mutex<HashMap<String, bool>>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        MemoryPrefs::default()
    }
}

impl ThemePrefs for MemoryPrefs {
    fn load_bool(&self, key: &str) -> bool {
        let values = self.values.lock().expect("Prefs mutex poisoned");
        values.get(key).copied().unwrap_or(false)
    }

    fn save_bool(&mut self, key: &str, value: bool) {
        let mut values = self.values.lock().expect("Prefs mutex poisoned");
        values.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_defaults_to_false() {
        let prefs = MemoryPrefs::new();
        assert!(!prefs.load_bool("is_dark_theme"));
    }

    #[test]
    fn test_save_then_load() {
        let mut prefs = MemoryPrefs::new();
        prefs.save_bool("is_dark_theme", true);
        assert!(prefs.load_bool("is_dark_theme"));

        prefs.save_bool("is_dark_theme", false);
        assert!(!prefs.load_bool("is_dark_theme"));
    }

    #[test]
    fn test_clones_share_backing_store() {
        let mut prefs = MemoryPrefs::new();
        let observer = prefs.clone();

        prefs.save_bool("is_dark_theme", true);
        assert!(observer.load_bool("is_dark_theme"));
    }
}
