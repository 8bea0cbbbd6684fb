//! Player events
//!
//! Event-based UI synchronization: the session records an event at every
//! externally visible change, and the transport surface drains them with
//! `PlayerSession::take_events` after each pump. The snapshot remains the
//! source of truth; events exist so the UI knows when to re-read it.

use aria_core::SongId;
use serde::{Deserialize, Serialize};

/// Events recorded by the playback session for the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playing flag flipped
    StateChanged {
        /// Whether audio is now playing
        playing: bool,
    },

    /// A new track became the playback target
    TrackChanged {
        /// Id of the new active song
        song_id: SongId,
        /// Id of the song that was active before, if any
        previous: Option<SongId>,
    },

    /// Media metadata finished loading
    DurationReady {
        /// Total track length in seconds
        seconds: u64,
    },

    /// Volume level changed (including mute/unmute)
    VolumeChanged {
        /// New level in `[0.0, 1.0]`
        volume: f32,
    },

    /// Queue contents were replaced
    QueueChanged {
        /// New queue length
        length: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_round_trip_through_json() {
        let event = PlayerEvent::TrackChanged {
            song_id: SongId::new("s2"),
            previous: Some(SongId::new("s1")),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: PlayerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn state_change_carries_the_flag() {
        let json = serde_json::to_string(&PlayerEvent::StateChanged { playing: true }).unwrap();
        assert!(json.contains("true"));
    }
}
