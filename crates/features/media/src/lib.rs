//! Media slice: project card previews and the modal video viewer.

pub mod modal;
pub mod preview;

pub use modal::{ModalContent, VideoModal, VideoTrigger, bind_backdrop};
pub use preview::{Playback, Preview};
