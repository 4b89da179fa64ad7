//! Identifiers shared between the page markup and the controllers.

/// Local storage key holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute set on the document element to select the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Class toggled on the hamburger control and the menu container.
pub const ACTIVE_CLASS: &str = "active";

pub const VIDEO_MODAL_ID: &str = "videoModal";
pub const MODAL_VIDEO_ID: &str = "modalVideo";
pub const REPOS_LIST_ID: &str = "reposList";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const THEME_TOGGLE_ID: &str = "themeToggle";
