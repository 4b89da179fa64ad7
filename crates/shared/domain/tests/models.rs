use folio_domain::contact::{ContactForm, Fields};
use folio_domain::repository::RepositorySummary;
use folio_domain::theme::Theme;
use std::str::FromStr;

#[test]
fn theme_round_trips_through_storage_strings() {
    assert_eq!(Theme::Light.to_string(), "light");
    assert_eq!(Theme::Dark.as_ref(), "dark");
    assert_eq!(Theme::from_str("dark"), Ok(Theme::Dark));
    assert!(Theme::from_str("sepia").is_err());
    assert_eq!(Theme::default(), Theme::Light);
    assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
}

#[test]
fn repository_summary_ignores_unknown_fields_and_nulls() {
    let raw = r#"{
        "id": 1,
        "name": "dotfiles",
        "html_url": "https://github.com/octocat/dotfiles",
        "description": null,
        "language": null,
        "stargazers_count": 3,
        "forks_count": 1,
        "private": false
    }"#;

    let repo: RepositorySummary = serde_json::from_str(raw).expect("summary deserialize");
    assert_eq!(repo.name, "dotfiles");
    assert!(repo.description.is_none());
    assert!(repo.language.is_none());
    assert_eq!(repo.stargazers_count, 3);
}

#[test]
fn contact_form_reset_clears_every_field() {
    let mut form = ContactForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hi".into(),
        message: "Hello".into(),
    };
    form.reset();
    assert_eq!(form, ContactForm::default());
    assert_eq!(Fields::ALL.iter().count(), 4);
}
