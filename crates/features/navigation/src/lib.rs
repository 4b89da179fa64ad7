//! Navigation slice.
//!
//! * [`MenuState`]: the collapsible menu behind the hamburger control.
//! * [`SmoothScroll`]: in-page anchor links that animate to their section.
//! * [`ScrollShadow`]: the navbar shadow once the page has scrolled.
//! * [`ResumeLink`]: resume buttons that trigger a file download.

mod menu;
mod resume;
mod scroll;
mod shadow;

pub use menu::MenuState;
pub use resume::ResumeLink;
pub use scroll::{Followed, SmoothScroll};
pub use shadow::{NAVBAR_SHADOW, ScrollShadow};
