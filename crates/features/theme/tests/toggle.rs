use folio_domain::theme::Theme;
use folio_kernel::HostError;
use folio_kernel::host::{MemoryStore, PreferenceStore};
use folio_theme::{ThemeIcon, ThemeManager};

#[derive(Debug, Default)]
struct ReadOnlyStore;

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), HostError> {
        Err(HostError::Rejected { message: "quota exceeded".into(), context: None })
    }
}

#[test]
fn absent_preference_defaults_to_light() {
    let manager = ThemeManager::load(MemoryStore::new());
    assert_eq!(manager.current(), Theme::Light);
    assert_eq!(manager.icon(), ThemeIcon::Moon);
    assert_eq!(manager.store().len(), 0, "loading must not write");
}

#[test]
fn stored_preference_is_applied() {
    let manager = ThemeManager::load(MemoryStore::new().with("theme", "dark"));
    assert_eq!(manager.current(), Theme::Dark);
    assert_eq!(manager.icon().class(), "fa-sun");
}

#[test]
fn unknown_stored_value_falls_back_to_light() {
    let manager = ThemeManager::load(MemoryStore::new().with("theme", "solarized"));
    assert_eq!(manager.current(), Theme::Light);
}

#[test]
fn toggle_persists_every_change() {
    let mut manager = ThemeManager::load(MemoryStore::new());
    assert_eq!(manager.toggle(), Theme::Dark);
    assert_eq!(manager.store().get("theme").as_deref(), Some("dark"));
    assert_eq!(manager.icon(), ThemeIcon::Sun);
}

#[test]
fn toggling_twice_restores_preference_and_icon() {
    let mut manager = ThemeManager::load(MemoryStore::new().with("theme", "light"));
    let icon = manager.icon();

    manager.toggle();
    manager.toggle();

    assert_eq!(manager.current(), Theme::Light);
    assert_eq!(manager.store().get("theme").as_deref(), Some("light"));
    assert_eq!(manager.icon(), icon);
}

#[test]
fn failed_persistence_still_switches_theme() {
    let mut manager = ThemeManager::load(ReadOnlyStore);
    assert_eq!(manager.toggle(), Theme::Dark);
    assert_eq!(manager.current(), Theme::Dark);
}
