//! Browser front end of the portfolio.
//!
//! Components own the per-page state (theme, menu, modal, form) and delegate every decision
//! to the feature slices; [`host`] gives those slices the browser capabilities they ask for.

mod components;
pub mod host;

pub use components::App;

use dioxus::prelude::*;
use folio::domain::config::SiteConfig;

#[derive(Debug)]
pub struct WebApp {
    config: SiteConfig,
}

impl WebApp {
    #[must_use]
    pub const fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// The entry point for launching the app. Every component can `use_context::<folio::Site>()`.
    pub fn launch(self, root: fn() -> Element) {
        let config = self.config;
        LaunchBuilder::new()
            .with_context_provider(move || Box::new(folio::init(config.clone())))
            .launch(root);
    }
}
