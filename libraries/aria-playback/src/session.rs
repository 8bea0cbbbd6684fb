//! Playback session controller
//!
//! The orchestrator and only stateful decision-maker of the playback core.
//! A session binds the song queue and the media resolver to a single live
//! engine handle, exposes the transport operations the UI calls, and keeps
//! the displayed elapsed-time counter on its own wall-clock cadence
//! instead of polling the engine position.
//!
//! All mutation happens on the caller's thread: user commands run
//! synchronously, and backend callbacks plus elapsed ticks are applied
//! cooperatively by [`PlayerSession::pump_events`].

use crate::engine::{AudioBackend, Engine, EngineEvent};
use crate::events::PlayerEvent;
use crate::queue::SongQueue;
use crate::ticker::Ticker;
use crate::types::{PlaybackSnapshot, SessionConfig};
use crate::volume::Volume;
use aria_core::{MediaResolver, ResolvedTrack, Song, SongId};
use crossbeam_channel::Receiver;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Playback session bound to one queue, one resolver, and one backend
///
/// The session is the sole owner of the live engine handle, the playing
/// flag, the elapsed/duration counters, and the volume. Collaborators
/// are injected at construction, so a session is fully exercisable with
/// in-memory fakes.
pub struct PlayerSession {
    queue: SongQueue,
    resolver: Box<dyn MediaResolver>,
    engine: Engine,
    engine_rx: Receiver<EngineEvent>,
    ticker: Ticker,
    current: Option<ResolvedTrack>,
    playing: bool,
    elapsed_seconds: u64,
    duration_seconds: u64,
    volume: Volume,
    pending: Vec<PlayerEvent>,
}

impl PlayerSession {
    /// Create a session
    ///
    /// `engine_rx` is the receiving half of the channel the backend was
    /// constructed with (see [`crate::engine::event_channel`]).
    pub fn new(
        config: SessionConfig,
        resolver: Box<dyn MediaResolver>,
        backend: Box<dyn AudioBackend>,
        engine_rx: Receiver<EngineEvent>,
    ) -> Self {
        Self {
            queue: SongQueue::new(),
            resolver,
            engine: Engine::new(backend),
            engine_rx,
            ticker: Ticker::new(config.tick_interval),
            current: None,
            playing: false,
            elapsed_seconds: 0,
            duration_seconds: 0,
            volume: Volume::new(config.initial_volume),
            pending: Vec::new(),
        }
    }

    // ===== Queue =====

    /// Replace the queue contents
    ///
    /// Selection follows [`SongQueue::set_queue`]; playback of whatever is
    /// currently loaded is not interrupted.
    pub fn set_queue(&mut self, ids: Vec<SongId>, start: Option<&SongId>) {
        self.queue.set_queue(ids, start);
        self.emit(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// The queued ids in playback order
    pub fn queue_ids(&self) -> &[SongId] {
        self.queue.ids()
    }

    /// The active song id, if any
    pub fn active_id(&self) -> Option<&SongId> {
        self.queue.active()
    }

    /// Select a song and start playing it
    ///
    /// The id does not have to be in the queue; direct selection from a
    /// song list lands here before the surrounding view refreshes the
    /// queue contents.
    pub fn play_song(&mut self, id: SongId) {
        self.queue.set_active(id);
        self.start_active_track();
    }

    // ===== Transport =====

    /// Toggle between playing and paused
    ///
    /// The single transport entry point: the play/pause button never talks
    /// to the engine directly. When nothing is loaded yet but a song is
    /// selected, this starts the selected song.
    pub fn toggle_play(&mut self) {
        if self.playing {
            self.engine.pause();
        } else if self.engine.live().is_some() {
            self.engine.play();
        } else if self.queue.active().is_some() {
            self.start_active_track();
        }
    }

    /// Skip to the next song, wrapping at the end of the queue
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if self.queue.next().is_some() {
            self.start_active_track();
        }
    }

    /// Step back to the previous song, wrapping at the start of the queue
    pub fn previous(&mut self) {
        if self.queue.previous().is_some() {
            self.start_active_track();
        }
    }

    /// Jump to a position in the current track
    ///
    /// The displayed counter is updated immediately; the engine relocates
    /// asynchronously and is never waited on. Positions past the known
    /// duration are forwarded as-is (the duration may not be known yet),
    /// and an `Ended` that results is handled like any end of track.
    pub fn seek(&mut self, seconds: u64) {
        self.elapsed_seconds = seconds;
        self.engine.seek(Duration::from_secs(seconds));
    }

    // ===== Volume =====

    /// Set the volume level, clamped to `[0.0, 1.0]`
    pub fn set_volume(&mut self, level: f32) {
        self.volume.set(level);
        self.engine.set_volume(self.volume.level());
        self.emit(PlayerEvent::VolumeChanged {
            volume: self.volume.level(),
        });
    }

    /// Toggle between muted and full volume
    ///
    /// See [`Volume::toggle_mute`]: unmuting restores full volume, not the
    /// level that was set before muting.
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.engine.set_volume(self.volume.level());
        self.emit(PlayerEvent::VolumeChanged {
            volume: self.volume.level(),
        });
    }

    /// Whether the volume is currently zero
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    // ===== State =====

    /// Read-only state for the transport UI
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            is_playing: self.playing,
            elapsed_seconds: self.elapsed_seconds,
            duration_seconds: self.duration_seconds,
            volume: self.volume.level(),
        }
    }

    /// Metadata of the song currently bound to the engine, if any
    pub fn current_song(&self) -> Option<&Song> {
        self.current.as_ref().map(|track| &track.song)
    }

    /// Drain the events recorded since the last call
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending)
    }

    // ===== Event pump =====

    /// Apply pending backend events and elapsed ticks
    ///
    /// Call from the UI loop after user input and on every frame of
    /// interest; never blocks. Events from superseded handles are dropped
    /// here, and ticks that raced a pause are discarded by the playing
    /// guard.
    pub fn pump_events(&mut self) {
        while let Ok(event) = self.engine_rx.try_recv() {
            self.apply_engine_event(event);
        }

        let ticks = self.ticker.drain();
        if self.playing {
            self.elapsed_seconds += ticks;
        }
    }

    fn apply_engine_event(&mut self, event: EngineEvent) {
        let handle = event.handle();
        if !self.engine.is_live(handle) {
            trace!(%handle, "dropping event from superseded handle");
            return;
        }

        match event {
            EngineEvent::Started { .. } => self.set_playing(true),
            EngineEvent::Paused { .. } => self.set_playing(false),
            EngineEvent::MetadataReady { duration, .. } => {
                self.duration_seconds = duration.as_secs();
                self.emit(PlayerEvent::DurationReady {
                    seconds: self.duration_seconds,
                });
            }
            EngineEvent::Ended { .. } => {
                self.set_playing(false);
                // Queue playback is continuous and cyclic; the last track
                // wraps around to the first.
                self.next();
            }
        }
    }

    fn set_playing(&mut self, playing: bool) {
        if self.playing == playing {
            return;
        }

        self.playing = playing;
        if playing {
            self.ticker.start();
        } else {
            self.ticker.stop();
        }
        self.emit(PlayerEvent::StateChanged { playing });
    }

    // ===== Track replacement =====

    /// Bind the engine to the active song
    ///
    /// Runs the whole replacement sequence: unload the previous handle,
    /// reset the counters, resolve the active id, and load-then-play the
    /// new media. Resolution or load failure leaves the session idle; a
    /// later selection command simply runs the sequence again.
    fn start_active_track(&mut self) {
        let previous = self.current.take().map(|track| track.song.id);
        self.set_playing(false);
        self.elapsed_seconds = 0;
        self.duration_seconds = 0;
        self.engine.release();

        let resolved = self
            .queue
            .active()
            .and_then(|id| self.resolver.resolve(id));
        let Some(track) = resolved else {
            debug!("active song is unresolved, leaving playback idle");
            return;
        };

        match self.engine.replace(&track.url, self.volume.level()) {
            Some(handle) => {
                debug!(%handle, song = %track.song.id, "switched playback to new track");
                self.engine.play();
                self.emit(PlayerEvent::TrackChanged {
                    song_id: track.song.id.clone(),
                    previous,
                });
                self.current = Some(track);
            }
            None => {
                warn!(song = %track.song.id, "media failed to load, leaving playback idle");
            }
        }
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending.push(event);
    }
}

impl Drop for PlayerSession {
    fn drop(&mut self) {
        self.ticker.stop();
        self.engine.release();
    }
}
