//! Kernel utilities shared across slices.
//! Keep this crate lightweight: it defines what a feature may ask of its host (storage,
//! media, viewport, browser chrome, page events) and loads the site configuration.
//!
//! Every capability is a trait so the feature logic runs unchanged in the browser and in
//! native unit tests. The browser implementations live in the web application; the
//! in-memory ones ([`host::MemoryStore`], [`events::LocalEvents`]) live here.
//!
//! ## Config loading
//! ```rust
//! use folio_kernel::config::load_config;
//! use folio_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = load_config("[layout]\nheader_offset = 64.0", None).unwrap();
//! assert_eq!(cfg.layout.header_offset, 64.0);
//! ```

pub mod config;
mod error;
pub mod events;
pub mod host;
pub mod prelude;

pub use error::{HostError, HostErrorExt};
pub use folio_domain as domain;
