//! Audio engine adapter
//!
//! Wraps the platform playback primitive behind the [`AudioBackend`] trait
//! and owns the single live media handle. The primitive cannot swap the
//! source URL of an existing instance, so changing tracks always means
//! unloading the old handle and loading a fresh one.
//!
//! Backend callbacks surface as [`EngineEvent`]s tagged with the handle
//! they were issued for, sent over a channel created by [`event_channel`].
//! The session compares the tag against the live handle before applying
//! any event, which makes callbacks from an already-replaced track inert.

use crate::error::Result;
use crossbeam_channel::{Receiver, Sender};
use std::fmt;
use std::time::Duration;
use tracing::warn;

/// Opaque identifier for one loaded media instance
///
/// Ids are allocated by [`Engine`] and never reused within a session, so
/// comparing a stored id against the live one is a reliable staleness test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleId(u64);

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Events emitted by the backend for a specific handle
///
/// For one completed playthrough the backend delivers zero or more
/// `Started`/`Paused` transitions followed by exactly one `Ended`;
/// `MetadataReady` arrives once, at or before the first `Started`.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Playback started or resumed
    Started {
        /// Handle the event was issued for
        handle: HandleId,
    },

    /// Playback paused
    Paused {
        /// Handle the event was issued for
        handle: HandleId,
    },

    /// Playback reached the end of the media
    Ended {
        /// Handle the event was issued for
        handle: HandleId,
    },

    /// Media metadata finished loading
    MetadataReady {
        /// Handle the event was issued for
        handle: HandleId,
        /// Total media duration
        duration: Duration,
    },
}

impl EngineEvent {
    /// The handle this event was issued for
    pub fn handle(&self) -> HandleId {
        match self {
            Self::Started { handle }
            | Self::Paused { handle }
            | Self::Ended { handle }
            | Self::MetadataReady { handle, .. } => *handle,
        }
    }
}

/// Create the event channel shared by a backend and its session
///
/// The backend is constructed with the sender; the session owns the
/// receiver and drains it from `pump_events`.
pub fn event_channel() -> (Sender<EngineEvent>, Receiver<EngineEvent>) {
    crossbeam_channel::unbounded()
}

/// Platform playback primitive
///
/// One implementation instance serves a whole session; each loaded media
/// resource is addressed by the [`HandleId`] passed to `load`. Loading is
/// asynchronous: `load` returning `Ok` only means the backend accepted the
/// URL, and readiness is reported through `MetadataReady`/`Started` events.
///
/// `play` and `pause` are idempotent: calling `play` on a handle that is
/// already playing (or `pause` on one already paused) does nothing and
/// emits no duplicate events. `unload` is called exactly once per handle
/// and must release every decoder/network resource the handle holds.
pub trait AudioBackend: Send {
    /// Begin loading media for `handle` at the given volume
    fn load(&mut self, handle: HandleId, url: &str, volume: f32) -> Result<()>;

    /// Start or resume playback of `handle`
    fn play(&mut self, handle: HandleId);

    /// Pause playback of `handle`
    fn pause(&mut self, handle: HandleId);

    /// Move the playback position of `handle`
    ///
    /// Does not change whether the handle is playing. Positions past the
    /// end of the media are accepted; the backend reports the outcome as
    /// an `Ended` event if playback immediately completes.
    fn seek(&mut self, handle: HandleId, position: Duration);

    /// Apply a volume level to `handle` immediately
    ///
    /// A level of `0.0` is audibly silent but playback keeps running;
    /// it is not a pause.
    fn set_volume(&mut self, handle: HandleId, volume: f32);

    /// Release all resources held by `handle`
    fn unload(&mut self, handle: HandleId);
}

/// Owner of the single live media handle
///
/// Forwards transport calls to the live handle (no-ops when nothing is
/// loaded) and implements whole-instance replacement: `replace` unloads
/// whatever was live before a new handle is created.
pub struct Engine {
    backend: Box<dyn AudioBackend>,
    live: Option<HandleId>,
    next_id: u64,
}

impl Engine {
    /// Wrap a backend with no media loaded
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            live: None,
            next_id: 1,
        }
    }

    /// The live handle, if any
    pub fn live(&self) -> Option<HandleId> {
        self.live
    }

    /// Whether `handle` is the current live handle
    pub fn is_live(&self, handle: HandleId) -> bool {
        self.live == Some(handle)
    }

    /// Replace the live media instance with one for `url`
    ///
    /// The previous handle (if any) is unloaded first. Returns the new
    /// live handle, or `None` when the URL is empty or the backend
    /// refused the load; in both failure cases no handle is live and the
    /// caller is expected to fall back to the idle display state.
    pub fn replace(&mut self, url: &str, volume: f32) -> Option<HandleId> {
        self.release();

        if url.is_empty() {
            return None;
        }

        let handle = HandleId(self.next_id);
        self.next_id += 1;

        match self.backend.load(handle, url, volume) {
            Ok(()) => {
                self.live = Some(handle);
                Some(handle)
            }
            Err(err) => {
                warn!(%handle, error = %err, "backend refused media load");
                None
            }
        }
    }

    /// Unload the live handle, if any
    pub fn release(&mut self) {
        if let Some(handle) = self.live.take() {
            self.backend.unload(handle);
        }
    }

    /// Start or resume the live handle
    pub fn play(&mut self) {
        if let Some(handle) = self.live {
            self.backend.play(handle);
        }
    }

    /// Pause the live handle
    pub fn pause(&mut self) {
        if let Some(handle) = self.live {
            self.backend.pause(handle);
        }
    }

    /// Move the playback position of the live handle
    pub fn seek(&mut self, position: Duration) {
        if let Some(handle) = self.live {
            self.backend.seek(handle, position);
        }
    }

    /// Apply a volume level to the live handle
    pub fn set_volume(&mut self, volume: f32) {
        if let Some(handle) = self.live {
            self.backend.set_volume(handle, volume);
        }
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("live", &self.live)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}
