//! Hover previews: a muted clip plays while the pointer is over a card.

use folio_kernel::host::MediaPlayer;
use tracing::{debug, warn};

/// Result of a pointer entering a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Started,
    /// The platform refused to play (usually the autoplay policy). Logged, not surfaced.
    Blocked,
    /// The card has no preview clip.
    NoVideo,
}

/// Preview controller of one project card.
#[derive(Debug, Clone)]
pub struct Preview<P> {
    player: Option<P>,
}

impl<P: MediaPlayer> Preview<P> {
    /// `player` is `None` for cards without an embedded preview video.
    pub const fn new(player: Option<P>) -> Self {
        Self { player }
    }

    pub const fn has_video(&self) -> bool {
        self.player.is_some()
    }

    /// Pointer entered the card: start playback.
    pub async fn enter(&self) -> Playback {
        let Some(player) = &self.player else {
            return Playback::NoVideo;
        };
        match player.play().await {
            Ok(()) => Playback::Started,
            Err(err) => {
                warn!(%err, "Video autoplay failed");
                Playback::Blocked
            },
        }
    }

    /// Pointer left the card: pause and rewind so the next hover starts over.
    pub fn leave(&self) {
        if let Some(player) = &self.player {
            player.pause();
            player.rewind();
            debug!("Preview stopped");
        }
    }
}
