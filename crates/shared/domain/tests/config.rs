use folio_domain::config::{LayoutConfig, ProfileConfig, RepositoriesConfig, SiteConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let profile = ProfileConfig::default();
    assert_eq!(profile.github_account, "sameer-at-git");
    assert_eq!(profile.resume.href, "assets/resume.pdf");

    let repos = RepositoriesConfig::default();
    assert_eq!(repos.per_page, 24);
    assert_eq!(repos.sort, "updated");

    let layout = LayoutConfig::default();
    assert!((layout.header_offset - 80.0).abs() < f64::EPSILON);
    assert!((layout.shadow_threshold - 100.0).abs() < f64::EPSILON);

    assert!(SiteConfig::default().projects.is_empty());
}

#[test]
fn site_config_deserializes_partial_sections() {
    let raw = json!({
        "profile": { "github_account": "octocat" },
        "layout": { "header_offset": 64.0 },
        "projects": [
            { "title": "Tracker", "description": "Habit tracker", "video": "videos/tracker.mp4" }
        ]
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.profile.github_account, "octocat");
    assert_eq!(cfg.profile.email, "mdsameersayed0@gmail.com");
    assert!((cfg.layout.header_offset - 64.0).abs() < f64::EPSILON);
    assert!((cfg.layout.shadow_threshold - 100.0).abs() < f64::EPSILON);
    assert_eq!(cfg.projects.len(), 1);
    assert_eq!(cfg.projects[0].video.as_deref(), Some("videos/tracker.mp4"));
    assert!(cfg.projects[0].preview.is_none());
}

#[test]
fn clones_share_until_mutated() {
    let original = SiteConfig::default();
    let mut edited = original.clone();
    edited.repositories.per_page = 6;

    assert_eq!(original.repositories.per_page, 24);
    assert_eq!(edited.repositories.per_page, 6);
}
