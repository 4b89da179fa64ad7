//! Theme slice: reads the persisted preference once, flips it on demand and writes it back.
//!
//! Applying the theme to the document (the `data-theme` attribute) is the host's job; the
//! manager only owns the value, its persistence and the icon that represents it.

use folio_domain::constants::THEME_STORAGE_KEY;
use folio_domain::theme::Theme;
use folio_kernel::host::PreferenceStore;
use std::str::FromStr;
use tracing::{debug, warn};

/// Icon shown on the toggle control: a moon invites switching to dark, a sun back to light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Moon,
    Sun,
}

impl ThemeIcon {
    /// Font Awesome class of the glyph.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Moon => "fa-moon",
            Self::Sun => "fa-sun",
        }
    }
}

impl From<Theme> for ThemeIcon {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Moon,
            Theme::Dark => Self::Sun,
        }
    }
}

/// Current theme plus the store it is persisted to.
#[derive(Debug, Clone)]
pub struct ThemeManager<S> {
    current: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Reads the persisted preference, defaulting to [`Theme::Light`] when absent or unreadable.
    pub fn load(store: S) -> Self {
        let current = store
            .get(THEME_STORAGE_KEY)
            .and_then(|raw| {
                Theme::from_str(&raw)
                    .inspect_err(|_| warn!(value = %raw, "Ignoring unknown stored theme"))
                    .ok()
            })
            .unwrap_or_default();

        debug!(theme = %current, "Theme loaded");
        Self { current, store }
    }

    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub fn icon(&self) -> ThemeIcon {
        self.current.into()
    }

    /// Flips the theme, persists it and returns the new value.
    ///
    /// A failed write is logged; the in-page theme still changes.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.flipped();
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, self.current.as_ref()) {
            warn!(%err, "Failed to persist theme preference");
        }
        debug!(theme = %self.current, "Theme toggled");
        self.current
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
