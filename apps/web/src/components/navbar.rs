use crate::host::{LocalStorage, WindowBrowser, WindowEvents, WindowViewport, apply_theme};
use dioxus::prelude::*;
use folio::domain::constants::THEME_TOGGLE_ID;
use folio::features::navigation::MenuState;
use folio::features::theme::ThemeManager;
use std::rc::Rc;

/// In-page sections reachable from the menu.
const SECTIONS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#repositories", "Repositories"),
    ("#contact", "Contact"),
];

#[component]
pub(crate) fn Navbar() -> Element {
    let site = use_context::<folio::Site>();
    let mut menu = use_signal(MenuState::new);
    let mut theme = use_signal(|| ThemeManager::load(LocalStorage::open()));
    let mut shadow = use_signal(|| "none");

    use_effect(move || apply_theme(theme.read().current()));

    let scroll_shadow = site.shadow;
    use_hook(move || Rc::new(scroll_shadow.bind(&WindowEvents, move |style| shadow.set(style))));

    let active = menu().class().unwrap_or_default();
    let icon = theme.read().icon().class();
    let scroll = site.scroll;
    let resume = site.resume.clone();
    let resume_href = resume.href().to_owned();

    rsx! {
        nav { class: "navbar", style: "box-shadow: {shadow}",
            div { class: "nav-container",
                a { class: "nav-logo", href: "#home", "Sameer" }
                ul { class: "nav-menu {active}",
                    for (href , label) in SECTIONS {
                        li { class: "nav-item",
                            a {
                                class: "nav-link",
                                href,
                                onclick: move |evt: MouseEvent| {
                                    if scroll.follow(href, &WindowViewport, &mut menu.write()).intercepted() {
                                        evt.prevent_default();
                                    }
                                },
                                "{label}"
                            }
                        }
                    }
                    li { class: "nav-item",
                        a {
                            class: "nav-link resume-btn",
                            href: resume_href,
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                // Logged by the link itself.
                                let _ = resume.download(&WindowBrowser);
                            },
                            "Resume"
                        }
                    }
                }
                button {
                    id: THEME_TOGGLE_ID,
                    class: "theme-toggle",
                    "aria-label": "Toggle theme",
                    onclick: move |_| {
                        theme.write().toggle();
                    },
                    i { class: "fas {icon}" }
                }
                div {
                    class: "hamburger {active}",
                    onclick: move |_| menu.write().toggle(),
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}
