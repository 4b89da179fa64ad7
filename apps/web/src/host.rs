//! Browser implementations of the host capabilities.
//!
//! Every lookup goes through `web_sys::window()` at call time, so a missing window or element
//! turns into a [`HostError`] (or a logged no-op) instead of a panic.

use folio::domain::constants::THEME_ATTRIBUTE;
use folio::domain::theme::Theme;
use folio::kernel::prelude::*;
use gloo::events::EventListener;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlElement, HtmlMediaElement, ScrollBehavior,
    ScrollToOptions, Storage, Window,
};

fn window() -> Result<Window, HostError> {
    web_sys::window()
        .ok_or_else(|| HostError::Unavailable { message: "No window".into(), context: None })
}

fn document() -> Result<Document, HostError> {
    window()?
        .document()
        .ok_or_else(|| HostError::Unavailable { message: "No document".into(), context: None })
}

fn rejected(err: &JsValue) -> HostError {
    HostError::Rejected {
        message: err.as_string().unwrap_or_else(|| format!("{err:?}")).into(),
        context: None,
    }
}

/// Sets the theme attribute on the document element.
pub fn apply_theme(theme: Theme) {
    let Some(root) = document().ok().and_then(|doc| doc.document_element()) else {
        return;
    };
    if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, theme.as_ref()) {
        warn!(?err, "Failed to apply theme");
    }
}

/// `window.localStorage`, or nothing when the browser disables it.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("Local storage unavailable, preferences will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        let storage = self.storage.as_ref().ok_or_else(|| HostError::Unavailable {
            message: "Local storage is disabled".into(),
            context: None,
        })?;
        storage.set_item(key, value).map_err(|err| rejected(&err)).context("localStorage.setItem")
    }
}

/// A `<video>` element looked up by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomVideo {
    id: String,
}

impl DomVideo {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    fn element(&self) -> Result<HtmlMediaElement, HostError> {
        document()?
            .get_element_by_id(&self.id)
            .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok())
            .ok_or_else(|| HostError::Unavailable {
                message: format!("No video element '{}'", self.id).into(),
                context: None,
            })
    }
}

impl MediaPlayer for DomVideo {
    async fn play(&self) -> Result<(), HostError> {
        let promise = self.element()?.play().map_err(|err| rejected(&err))?;
        JsFuture::from(promise).await.map(drop).map_err(|err| rejected(&err))
    }

    fn pause(&self) {
        match self.element() {
            Ok(video) => {
                if let Err(err) = video.pause() {
                    debug!(?err, id = %self.id, "Pause failed");
                }
            },
            Err(err) => debug!(%err, "Nothing to pause"),
        }
    }

    fn rewind(&self) {
        if let Ok(video) = self.element() {
            video.set_current_time(0.0);
        }
    }
}

/// Section lookup and smooth scrolling of the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn section_top(&self, selector: &str) -> Option<f64> {
        // Invalid selectors (a bare "#") are reported as an error by the DOM; treat as missing.
        let section = document().ok()?.query_selector(selector).ok().flatten()?;
        section.dyn_into::<HtmlElement>().ok().map(|el| f64::from(el.offset_top()))
    }

    fn scroll_to(&self, top: f64) {
        let Ok(window) = window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Location, alerts and downloads of the current window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowBrowser;

impl Browser for WindowBrowser {
    fn navigate(&self, url: &str) -> Result<(), HostError> {
        window()?.location().set_href(url).map_err(|err| rejected(&err)).context("location.href")
    }

    fn notify(&self, message: &str) {
        match window() {
            Ok(window) => {
                if let Err(err) = window.alert_with_message(message) {
                    warn!(?err, "Alert failed");
                }
            },
            Err(err) => warn!(%err, "Cannot show notice"),
        }
    }

    fn download(&self, href: &str, filename: &str) -> Result<(), HostError> {
        let document = document()?;
        let body = document.body().ok_or_else(|| HostError::Unavailable {
            message: "No document body".into(),
            context: None,
        })?;

        let link = document
            .create_element("a")
            .map_err(|err| rejected(&err))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| HostError::from("Created element is not an anchor"))?;
        link.set_href(href);
        link.set_download(filename);

        body.append_child(&link).map_err(|err| rejected(&err))?;
        link.click();
        body.remove_child(&link).map_err(|err| rejected(&err))?;
        Ok(())
    }
}

/// Window-level `scroll` and `click` listeners.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowEvents;

impl EventSource for WindowEvents {
    /// `None` when there is no window to listen on.
    type Listener = Option<EventListener>;

    fn listen(&self, kind: EventKind, mut handler: Handler) -> Option<EventListener> {
        let window = web_sys::window()?;
        let listener = match kind {
            EventKind::Scroll => {
                let source = window.clone();
                EventListener::new(&window, "scroll", move |_| {
                    let offset_y = source.scroll_y().unwrap_or_default();
                    handler(&PageEvent::Scroll { offset_y });
                })
            },
            EventKind::Click => EventListener::new(&window, "click", move |event| {
                let target_id = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .map(|el| el.id())
                    .filter(|id| !id.is_empty());
                handler(&PageEvent::Click { target_id });
            }),
        };
        Some(listener)
    }
}
