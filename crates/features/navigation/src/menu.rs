use folio_domain::constants::ACTIVE_CLASS;

/// Open/closed state of the navigation menu.
///
/// The same class is applied to the hamburger control and to the menu container.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Closes the menu; returns whether it was open.
    pub const fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Class to add to both the control and the container.
    #[must_use]
    pub const fn class(self) -> Option<&'static str> {
        if self.open { Some(ACTIVE_CLASS) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_without_class() {
        let menu = MenuState::new();
        assert!(!menu.is_open());
        assert_eq!(menu.class(), None);
    }

    #[test]
    fn toggling_twice_returns_to_closed() {
        let mut menu = MenuState::new();
        menu.toggle();
        assert_eq!(menu.class(), Some("active"));
        menu.toggle();
        assert_eq!(menu, MenuState::new());
    }

    #[test]
    fn close_reports_previous_state() {
        let mut menu = MenuState::new();
        assert!(!menu.close());
        menu.toggle();
        assert!(menu.close());
        assert!(!menu.is_open());
    }
}
