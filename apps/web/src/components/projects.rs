use crate::host::{DomVideo, WindowEvents};
use dioxus::prelude::*;
use folio::domain::config::ProjectConfig;
use folio::domain::constants::{MODAL_VIDEO_ID, VIDEO_MODAL_ID};
use folio::features::media::{Preview, VideoModal, VideoTrigger, bind_backdrop};
use std::rc::Rc;

#[component]
pub(crate) fn Projects() -> Element {
    let site = use_context::<folio::Site>();
    let projects = site.config.projects.clone();

    rsx! {
        section { id: "projects", class: "projects",
            div { class: "container",
                h2 { class: "section-title", "Projects" }
                div { class: "projects-grid",
                    for (index , project) in projects.into_iter().enumerate() {
                        ProjectCard { key: "{index}", index, project }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(index: usize, project: ProjectConfig) -> Element {
    let mut modal = use_context::<Signal<VideoModal>>();

    let preview_id = format!("preview-{index}");
    let preview = Preview::new(project.preview.as_ref().map(|_| DomVideo::new(preview_id.clone())));
    let hover = preview.clone();
    let trigger = project.clone();

    rsx! {
        div {
            class: "project-card",
            onmouseenter: move |_| {
                let preview = hover.clone();
                spawn(async move {
                    preview.enter().await;
                });
            },
            onmouseleave: move |_| preview.leave(),
            div { class: "project-image",
                if let Some(src) = project.preview.clone() {
                    video {
                        id: "{preview_id}",
                        class: "project-video",
                        src,
                        muted: true,
                        r#loop: true,
                        preload: "metadata",
                        "playsinline": "true",
                    }
                } else {
                    i { class: "fas fa-code" }
                }
            }
            div { class: "project-content",
                h3 { "{project.title}" }
                p { "{project.description}" }
                div { class: "project-tags",
                    for tag in project.tags.iter() {
                        span { class: "tag", "{tag}" }
                    }
                }
                div { class: "project-links",
                    if let Some(video) = project.video.clone() {
                        a {
                            class: "project-link video",
                            href: "#",
                            "data-video": video,
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                modal.write().open(VideoTrigger::from(&trigger));
                            },
                            i { class: "fas fa-play" }
                            " Watch Demo"
                        }
                    }
                    if let Some(source) = project.source.clone() {
                        a {
                            class: "project-link",
                            href: source,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            i { class: "fab fa-github" }
                            " Source"
                        }
                    }
                }
            }
        }
    }
}

/// Modal video viewer, closed by its close control or a click on the overlay.
#[component]
pub(crate) fn VideoViewer() -> Element {
    let mut modal = use_context::<Signal<VideoModal>>();

    use_hook(move || {
        Rc::new(bind_backdrop(&WindowEvents, move || {
            modal.write().close(&DomVideo::new(MODAL_VIDEO_ID));
        }))
    });

    let content = modal.read().content().cloned();
    let display = if content.is_some() { "flex" } else { "none" };
    let (source, title, description) = content
        .map(|c| (c.source, c.title, c.description))
        .unwrap_or_default();

    rsx! {
        div { id: VIDEO_MODAL_ID, class: "modal", style: "display: {display}",
            div { class: "modal-content",
                span {
                    id: "closeModal",
                    class: "close-modal",
                    onclick: move |_| {
                        modal.write().close(&DomVideo::new(MODAL_VIDEO_ID));
                    },
                    "\u{d7}"
                }
                video { id: MODAL_VIDEO_ID, controls: true, src: source }
                div { class: "modal-info",
                    h3 { id: "videoTitle", "{title}" }
                    p { id: "videoDescription", "{description}" }
                }
            }
        }
    }
}
