use crate::host::{WindowBrowser, WindowViewport};
use dioxus::prelude::*;
use folio::features::navigation::MenuState;

#[component]
pub(crate) fn Hero() -> Element {
    let site = use_context::<folio::Site>();
    let scroll = site.scroll;
    let resume = site.resume.clone();
    let resume_href = resume.href().to_owned();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-container",
                div { class: "hero-content",
                    h1 { class: "hero-title",
                        "Hi, I'm "
                        span { class: "highlight", "Md. Sameer Sayed" }
                    }
                    p { class: "hero-subtitle", "Software Developer" }
                    p { class: "hero-description",
                        "I build fast, accessible web applications and enjoy turning ideas into working products."
                    }
                    div { class: "hero-buttons",
                        a {
                            class: "btn btn-primary",
                            href: "#projects",
                            onclick: move |evt: MouseEvent| {
                                // Outside the menu, so there is nothing to close.
                                if scroll.follow("#projects", &WindowViewport, &mut MenuState::new()).intercepted() {
                                    evt.prevent_default();
                                }
                            },
                            "View Projects"
                        }
                        a {
                            class: "btn btn-secondary resume-btn",
                            href: resume_href,
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                // Logged by the link itself.
                                let _ = resume.download(&WindowBrowser);
                            },
                            i { class: "fas fa-download" }
                            " Download Resume"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn About() -> Element {
    rsx! {
        section { id: "about", class: "about",
            div { class: "container",
                h2 { class: "section-title", "About Me" }
                div { class: "about-content",
                    p {
                        "I am a developer who likes small, well-tested building blocks. Most of my work is on the web, "
                        "from interactive front ends to the services behind them."
                    }
                    div { class: "skills",
                        for skill in ["Rust", "JavaScript", "Python", "HTML", "CSS", "Git"] {
                            span { class: "skill-tag", "{skill}" }
                        }
                    }
                }
            }
        }
    }
}
