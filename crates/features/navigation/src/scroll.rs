use crate::menu::MenuState;
use folio_kernel::host::Viewport;
use tracing::debug;

/// Outcome of activating a navigation link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Followed {
    /// Not an in-page link; the browser should navigate normally.
    Ignored,
    /// Scrolled to the section, `top` being the corrected offset.
    Scrolled { top: f64 },
    /// In-page link whose section does not exist; nothing scrolled.
    Missing,
}

impl Followed {
    /// Whether the default link navigation must be suppressed.
    #[must_use]
    pub const fn intercepted(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Animated scrolling for in-page navigation links.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    header_offset: f64,
}

impl SmoothScroll {
    /// `header_offset` is the height of the fixed navbar, kept clear above the section.
    #[must_use]
    pub const fn new(header_offset: f64) -> Self {
        Self { header_offset }
    }

    /// In-page links start with `#`; the resume link is left to its own handler.
    #[must_use]
    pub fn intercepts(href: &str) -> bool {
        href.starts_with('#') && !href.contains("resume")
    }

    /// Handles a link activation: scrolls to the section and collapses an open menu.
    ///
    /// The menu is closed for every intercepted link, including links to missing sections.
    pub fn follow(&self, href: &str, viewport: &impl Viewport, menu: &mut MenuState) -> Followed {
        if !Self::intercepts(href) {
            return Followed::Ignored;
        }

        let outcome = viewport.section_top(href).map_or(Followed::Missing, |section| {
            let top = section - self.header_offset;
            viewport.scroll_to(top);
            Followed::Scrolled { top }
        });

        if menu.close() {
            debug!(href, "Menu collapsed after navigation");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeViewport {
        sections: Vec<(&'static str, f64)>,
        scrolls: RefCell<Vec<f64>>,
    }

    impl Viewport for FakeViewport {
        fn section_top(&self, selector: &str) -> Option<f64> {
            self.sections.iter().find(|(id, _)| *id == selector).map(|(_, top)| *top)
        }

        fn scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    fn viewport() -> FakeViewport {
        FakeViewport { sections: vec![("#about", 600.0), ("#contact", 2400.0)], ..FakeViewport::default() }
    }

    #[test]
    fn intercepts_only_fragment_links_except_resume() {
        assert!(SmoothScroll::intercepts("#about"));
        assert!(!SmoothScroll::intercepts("#resume"));
        assert!(!SmoothScroll::intercepts("https://github.com/octocat"));
        assert!(!SmoothScroll::intercepts("about.html#team"));
    }

    #[test]
    fn scrolls_to_section_minus_header() {
        let view = viewport();
        let mut menu = MenuState::new();
        let outcome = SmoothScroll::new(80.0).follow("#contact", &view, &mut menu);

        assert_eq!(outcome, Followed::Scrolled { top: 2320.0 });
        assert_eq!(*view.scrolls.borrow(), vec![2320.0]);
    }

    #[test]
    fn missing_section_is_a_silent_no_op_that_still_closes_menu() {
        let view = viewport();
        let mut menu = MenuState::new();
        menu.toggle();

        let outcome = SmoothScroll::new(80.0).follow("#projects", &view, &mut menu);

        assert_eq!(outcome, Followed::Missing);
        assert!(outcome.intercepted());
        assert!(view.scrolls.borrow().is_empty());
        assert!(!menu.is_open());
    }

    #[test]
    fn external_links_leave_menu_alone() {
        let view = viewport();
        let mut menu = MenuState::new();
        menu.toggle();

        let outcome = SmoothScroll::new(80.0).follow("https://example.org", &view, &mut menu);

        assert!(!outcome.intercepted());
        assert!(menu.is_open());
    }
}
