//! Glob-importable set of the kernel traits and types features use most.

pub use crate::{HostError, HostErrorExt};
pub use crate::events::{EventKind, EventSource, Handler, LocalEvents, PageEvent};
pub use crate::host::{Browser, MediaPlayer, MemoryStore, PreferenceStore, Viewport};
