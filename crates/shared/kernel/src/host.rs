//! Capabilities a feature may ask of the page it runs in.

use crate::HostError;
use fxhash::FxHashMap;
use std::future::Future;

/// Key-value persistence scoped to the site (browser local storage).
pub trait PreferenceStore {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`HostError`] when storage is unavailable or full.
    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError>;
}

/// A single video element.
pub trait MediaPlayer {
    /// Starts playback. Resolves with an error when the platform refuses (e.g. autoplay policy).
    fn play(&self) -> impl Future<Output = Result<(), HostError>>;

    fn pause(&self);

    /// Moves the playhead back to the start.
    fn rewind(&self);
}

/// Scroll position of the page.
pub trait Viewport {
    /// Vertical document offset of the element matched by `selector`, if it exists.
    fn section_top(&self, selector: &str) -> Option<f64>;

    /// Animates the window scroll position to `top`.
    fn scroll_to(&self, top: f64);
}

/// Browser chrome outside the page: location, dialogs and downloads.
pub trait Browser {
    /// Points the window at `url`.
    ///
    /// # Errors
    /// Returns [`HostError`] when the location cannot be changed.
    fn navigate(&self, url: &str) -> Result<(), HostError>;

    /// Shows a blocking notice to the user.
    fn notify(&self, message: &str);

    /// Offers `href` as a download saved under `filename`.
    ///
    /// # Errors
    /// Returns [`HostError`] when the download cannot be started.
    fn download(&self, href: &str, filename: &str) -> Result<(), HostError>;
}

/// In-memory [`PreferenceStore`], used where browser storage is missing and in tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_values() {
        let mut store = MemoryStore::new().with("theme", "light");
        assert_eq!(store.get("theme").as_deref(), Some("light"));

        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(store.len(), 1);
        assert!(store.get("missing").is_none());
    }
}
