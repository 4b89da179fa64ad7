#![allow(dead_code)]

use folio_kernel::HostError;
use folio_kernel::host::MediaPlayer;
use std::cell::Cell;

/// Records what was asked of a video element.
#[derive(Debug, Default)]
pub struct FakePlayer {
    pub blocked: bool,
    pub plays: Cell<u32>,
    pub pauses: Cell<u32>,
    pub position: Cell<f64>,
}

impl FakePlayer {
    pub fn blocked() -> Self {
        Self { blocked: true, ..Self::default() }
    }
}

impl MediaPlayer for &FakePlayer {
    async fn play(&self) -> Result<(), HostError> {
        self.plays.set(self.plays.get() + 1);
        if self.blocked {
            return Err(HostError::Rejected { message: "NotAllowedError".into(), context: None });
        }
        self.position.set(1.5);
        Ok(())
    }

    fn pause(&self) {
        self.pauses.set(self.pauses.get() + 1);
    }

    fn rewind(&self) {
        self.position.set(0.0);
    }
}
