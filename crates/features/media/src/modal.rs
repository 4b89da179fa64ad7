//! Modal video viewer: `Closed`, or `Open` with the video and text of the card that opened it.

use folio_domain::config::ProjectConfig;
use folio_domain::constants::VIDEO_MODAL_ID;
use folio_kernel::events::{EventKind, EventSource, PageEvent};
use folio_kernel::host::MediaPlayer;
use tracing::debug;

/// What the viewer shows while open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub source: String,
    pub title: String,
    pub description: String,
}

/// The "view video" control of a card, with the card's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoTrigger<'a> {
    pub video: Option<&'a str>,
    pub title: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a ProjectConfig> for VideoTrigger<'a> {
    fn from(project: &'a ProjectConfig) -> Self {
        Self {
            video: project.video.as_deref(),
            title: &project.title,
            description: &project.description,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum VideoModal {
    #[default]
    Closed,
    Open(ModalContent),
}

impl VideoModal {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub const fn content(&self) -> Option<&ModalContent> {
        match self {
            Self::Open(content) => Some(content),
            Self::Closed => None,
        }
    }

    /// Opens the viewer for `trigger`. Triggers without a video source change nothing.
    ///
    /// Returns whether the viewer is now showing the trigger's video.
    pub fn open(&mut self, trigger: VideoTrigger<'_>) -> bool {
        let Some(source) = trigger.video.filter(|src| !src.is_empty()) else {
            debug!(title = trigger.title, "Video trigger without source ignored");
            return false;
        };
        *self = Self::Open(ModalContent {
            source: source.to_owned(),
            title: trigger.title.to_owned(),
            description: trigger.description.to_owned(),
        });
        true
    }

    /// Closes the viewer and stops playback. Returns whether it was open.
    pub fn close(&mut self, player: &impl MediaPlayer) -> bool {
        player.pause();
        std::mem::take(self).is_open()
    }

    /// Closes the viewer when the click landed on the overlay itself, not on its content.
    pub fn dismiss_backdrop(&mut self, target_id: Option<&str>, player: &impl MediaPlayer) -> bool {
        if target_id == Some(VIDEO_MODAL_ID) { self.close(player) } else { false }
    }
}

/// Calls `on_backdrop` for every click whose target is the modal overlay.
pub fn bind_backdrop<E: EventSource>(
    source: &E,
    mut on_backdrop: impl FnMut() + 'static,
) -> E::Listener {
    source.listen(
        EventKind::Click,
        Box::new(move |event| {
            if let PageEvent::Click { target_id: Some(id) } = event
                && id == VIDEO_MODAL_ID
            {
                on_backdrop();
            }
        }),
    )
}
