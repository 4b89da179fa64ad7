use folio::features::{self, navigation::ScrollShadow};

#[test]
fn embedded_config_is_valid() {
    let config = folio::load_config(None).expect("embedded config");
    assert_eq!(config.profile.github_account, "sameer-at-git");
    assert_eq!(config.repositories.per_page, 24);
    assert!(!config.projects.is_empty());
}

#[test]
fn init_wires_slices_from_config() {
    let config = folio::load_config(Some("[layout]\nshadow_threshold = 10.0")).expect("config");
    let site = folio::init(config);

    assert_eq!(site.shadow, ScrollShadow::new(10.0));
    assert_eq!(site.contact.recipient(), "mdsameersayed0@gmail.com");
    assert_eq!(site.resume.filename(), "Resume-Md.Sameer Sayed.pdf");
}

#[test]
fn core_features_are_always_enabled() {
    for name in ["theme", "navigation", "media", "contact"] {
        assert!(features::ENABLED.contains(&name), "{name}");
    }
    assert!(!features::ENABLED.contains(&"billing"));
}

#[cfg(feature = "repositories")]
#[test]
fn repositories_client_uses_configured_endpoint() {
    let site = folio::init(folio::load_config(None).expect("config"));
    assert_eq!(
        site.repositories.listing_url("sameer-at-git", 24),
        "https://api.github.com/users/sameer-at-git/repos?sort=updated&per_page=24"
    );
}
