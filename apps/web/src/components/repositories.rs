use dioxus::prelude::*;
use folio::domain::constants::REPOS_LIST_ID;
use folio::features::repositories::{self, RepositoryCard, RepositoryPanel};

/// Live list of the account's public repositories, fetched once per page load.
#[component]
pub(crate) fn Repositories() -> Element {
    let site = use_context::<folio::Site>();

    let listing = use_resource(move || {
        let site = site.clone();
        async move {
            let account = &site.config.profile.github_account;
            repositories::load(&site.repositories, account, site.config.repositories.per_page).await
        }
    });

    let panel = (*listing.read()).clone().unwrap_or(RepositoryPanel::Loading);

    rsx! {
        section { id: "repositories", class: "repositories",
            div { class: "container",
                h2 { class: "section-title", "GitHub Repositories" }
                div { id: REPOS_LIST_ID, class: "repos-grid",
                    if let Some(message) = panel.placeholder() {
                        p { class: "repos-message", "{message}" }
                    }
                    for card in panel.cards().iter().cloned() {
                        RepoCard { key: "{card.url}", card }
                    }
                }
            }
        }
    }
}

#[component]
fn RepoCard(card: RepositoryCard) -> Element {
    rsx! {
        div { class: "repo-card",
            h3 { class: "repo-name",
                a { href: "{card.url}", target: "_blank", rel: "noopener noreferrer", "{card.name}" }
            }
            p { class: "repo-description", "{card.description}" }
            div { class: "repo-meta",
                span { class: "repo-language",
                    span { class: "language-color", style: "background-color: {card.color}" }
                    "{card.language}"
                }
                span { class: "repo-stars",
                    i { class: "fas fa-star" }
                    " {card.stars}"
                }
                span { class: "repo-forks",
                    i { class: "fas fa-code-branch" }
                    " {card.forks}"
                }
            }
        }
    }
}
