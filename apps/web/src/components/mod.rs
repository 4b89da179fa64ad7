mod contact;
mod hero;
mod navbar;
mod projects;
mod repositories;

use contact::Contact;
use dioxus::prelude::*;
use folio::features::media::VideoModal;
use hero::{About, Hero};
use navbar::Navbar;
use projects::{Projects, VideoViewer};
use repositories::Repositories;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// The whole single-page site.
#[component]
pub fn App() -> Element {
    // Shared between the project cards (open) and the viewer (close).
    use_context_provider(|| Signal::new(VideoModal::Closed));

    rsx! {
        document::Title { "Md. Sameer Sayed | Portfolio" }
        document::Stylesheet { href: FONT_AWESOME }
        document::Stylesheet { href: MAIN_CSS }

        Navbar {}
        main {
            Hero {}
            About {}
            Projects {}
            Repositories {}
            Contact {}
        }
        Footer {}
        VideoViewer {}
    }
}

#[component]
fn Footer() -> Element {
    let site = use_context::<folio::Site>();
    let github = format!("https://github.com/{}", site.config.profile.github_account);
    let email = format!("mailto:{}", site.config.profile.email);

    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "social-links",
                    a { href: "{github}", target: "_blank", rel: "noopener noreferrer",
                        i { class: "fab fa-github" }
                    }
                    a { href: "{email}", i { class: "fas fa-envelope" } }
                }
                p { "\u{a9} Md. Sameer Sayed. Built with Rust and Dioxus." }
            }
        }
    }
}
