mod fixtures;

use fixtures::FakePlayer;
use folio_media::{Playback, Preview};

#[tokio::test]
async fn hover_plays_and_leave_rewinds() {
    let player = FakePlayer::default();
    let preview = Preview::new(Some(&player));

    assert_eq!(preview.enter().await, Playback::Started);
    assert_eq!(player.plays.get(), 1);

    preview.leave();
    assert_eq!(player.pauses.get(), 1);
    assert!(player.position.get().abs() < f64::EPSILON);
}

#[tokio::test]
async fn blocked_autoplay_is_swallowed() {
    let player = FakePlayer::blocked();
    let preview = Preview::new(Some(&player));

    assert_eq!(preview.enter().await, Playback::Blocked);
    preview.leave();
    assert_eq!(player.pauses.get(), 1);
}

#[tokio::test]
async fn cards_without_video_do_nothing() {
    let preview: Preview<&FakePlayer> = Preview::new(None);
    assert!(!preview.has_video());
    assert_eq!(preview.enter().await, Playback::NoVideo);
    preview.leave();
}
