use folio_kernel::events::{EventKind, EventSource, PageEvent};

/// `box-shadow` applied to the navbar once the page has scrolled.
pub const NAVBAR_SHADOW: &str = "0 2px 10px rgba(0, 0, 0, 0.1)";

/// Navbar drop shadow as a pure function of the scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollShadow {
    threshold: f64,
}

impl ScrollShadow {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Whether the shadow is shown at `offset_y`; strictly past the threshold, no hysteresis.
    #[must_use]
    pub fn is_raised(self, offset_y: f64) -> bool {
        offset_y > self.threshold
    }

    /// The `box-shadow` value for `offset_y`.
    #[must_use]
    pub fn style_for(self, offset_y: f64) -> &'static str {
        if self.is_raised(offset_y) { NAVBAR_SHADOW } else { "none" }
    }

    /// Recomputes the shadow on every scroll event and hands the style to `apply`.
    pub fn bind<E: EventSource>(
        self,
        source: &E,
        mut apply: impl FnMut(&'static str) + 'static,
    ) -> E::Listener {
        source.listen(
            EventKind::Scroll,
            Box::new(move |event| {
                if let PageEvent::Scroll { offset_y } = event {
                    apply(self.style_for(*offset_y));
                }
            }),
        )
    }
}
