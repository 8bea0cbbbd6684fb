//! Aria - Playback Session Management
//!
//! Platform-agnostic playback core for the Aria streaming client.
//!
//! This crate provides:
//! - Song queue with wraparound navigation (next/previous never dead-end)
//! - A single-handle audio engine adapter with whole-instance replacement
//! - The playback session controller (transport, volume/mute, seek)
//! - A wall-clock elapsed-time counter independent of engine position
//! - `m:ss` timestamp formatting for the transport display
//!
//! # Architecture
//!
//! `aria-playback` is completely platform-agnostic:
//! - No dependency on a concrete audio stack
//! - No dependency on the catalog/storage layer
//! - No dependency on any UI framework
//!
//! The platform playback primitive is injected through the [`AudioBackend`]
//! trait and reports back through handle-tagged [`EngineEvent`]s; the
//! catalog is injected through `aria_core::MediaResolver`. Because the
//! primitive cannot swap the source URL of an existing instance, changing
//! tracks always replaces the whole instance: the session unloads the old
//! handle, loads a fresh one, and discards any callback that still carries
//! the old handle's id.
//!
//! # Example: wiring a session
//!
//! ```rust
//! use aria_core::{MediaResolver, ResolvedTrack, Song, SongId};
//! use aria_playback::{
//!     event_channel, AudioBackend, HandleId, PlayerSession, SessionConfig,
//! };
//! use std::time::Duration;
//!
//! struct SilentBackend;
//!
//! impl AudioBackend for SilentBackend {
//!     fn load(&mut self, _: HandleId, _: &str, _: f32) -> aria_playback::Result<()> {
//!         Ok(())
//!     }
//!     fn play(&mut self, _: HandleId) {}
//!     fn pause(&mut self, _: HandleId) {}
//!     fn seek(&mut self, _: HandleId, _: Duration) {}
//!     fn set_volume(&mut self, _: HandleId, _: f32) {}
//!     fn unload(&mut self, _: HandleId) {}
//! }
//!
//! struct StaticResolver;
//!
//! impl MediaResolver for StaticResolver {
//!     fn resolve(&self, id: &SongId) -> Option<ResolvedTrack> {
//!         Some(ResolvedTrack {
//!             song: Song::new(id.clone(), "Golden Hour", "Night Drive"),
//!             url: format!("https://cdn.example/{}.mp3", id),
//!         })
//!     }
//! }
//!
//! let (events_tx, events_rx) = event_channel();
//! # drop(events_tx);
//! let mut session = PlayerSession::new(
//!     SessionConfig::default(),
//!     Box::new(StaticResolver),
//!     Box::new(SilentBackend),
//!     events_rx,
//! );
//!
//! session.set_queue(vec![SongId::new("s1"), SongId::new("s2")], None);
//! session.play_song(SongId::new("s1"));
//! session.pump_events();
//!
//! // The backend never reported a start, so the session is not playing yet
//! assert!(!session.snapshot().is_playing);
//! assert_eq!(session.snapshot().formatted_elapsed(), "0:00");
//! ```

mod engine;
mod error;
mod events;
mod format;
mod queue;
mod session;
mod ticker;
pub mod types;
mod volume;

// Public exports
pub use engine::{event_channel, AudioBackend, Engine, EngineEvent, HandleId};
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use format::format_timestamp;
pub use queue::SongQueue;
pub use session::PlayerSession;
pub use types::{PlaybackSnapshot, SessionConfig};
