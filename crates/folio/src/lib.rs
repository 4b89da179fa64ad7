//! Facade crate for the portfolio features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Load a [`SiteConfig`](domain::config::SiteConfig) with [`load_config`].
//! - Call [`init`] to build every enabled slice from it.

use domain::config::SiteConfig;
pub use folio_domain as domain;
pub use folio_kernel as kernel;
pub use folio_kernel::config::ConfigError;
use tracing::debug;

/// Feature registry for runtime introspection.
pub mod features {
    pub use folio_contact as contact;
    pub use folio_media as media;
    pub use folio_navigation as navigation;
    #[cfg(feature = "repositories")]
    pub use folio_repositories as repositories;
    pub use folio_theme as theme;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "theme",
        "navigation",
        "media",
        "contact",
        #[cfg(feature = "repositories")]
        "repositories",
    ];
}

/// Site configuration compiled into the binary.
pub const EMBEDDED_CONFIG: &str = include_str!("../folio.toml");

/// Layers `overrides` and the `FOLIO__*` environment over [`EMBEDDED_CONFIG`].
///
/// # Errors
/// Returns [`ConfigError`] when a layer is malformed.
pub fn load_config(overrides: Option<&str>) -> Result<SiteConfig, ConfigError> {
    kernel::config::load_config(EMBEDDED_CONFIG, overrides)
}

/// Stateless feature controllers configured for one site.
///
/// Stateful pieces (theme, menu, modal, form) are owned by the UI and created per component.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub scroll: features::navigation::SmoothScroll,
    pub shadow: features::navigation::ScrollShadow,
    pub resume: features::navigation::ResumeLink,
    pub contact: features::contact::ContactDesk,
    #[cfg(feature = "repositories")]
    pub repositories: features::repositories::GithubClient,
}

/// Initialize all enabled features from `config`.
#[must_use]
pub fn init(config: SiteConfig) -> Site {
    use features::{contact, navigation};

    let site = Site {
        scroll: navigation::SmoothScroll::new(config.layout.header_offset),
        shadow: navigation::ScrollShadow::new(config.layout.shadow_threshold),
        resume: navigation::ResumeLink::from(&config.profile.resume),
        contact: contact::ContactDesk::new(config.profile.email.clone()),
        #[cfg(feature = "repositories")]
        repositories: features::repositories::GithubClient::new(&config.repositories),
        config,
    };

    debug!(features = ?features::ENABLED, projects = site.config.projects.len(), "Site initialized");
    site
}
