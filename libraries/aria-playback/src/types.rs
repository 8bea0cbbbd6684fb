//! Configuration and state types for the playback session

use crate::format::format_timestamp;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a playback session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Initial volume in `[0.0, 1.0]` (default: 1.0)
    pub initial_volume: f32,

    /// Wall-clock interval between elapsed-time ticks (default: 1s)
    pub tick_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            tick_interval: Duration::from_secs(1),
        }
    }
}

/// Read-only view of the session state for the transport UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Whether audio is currently playing
    pub is_playing: bool,

    /// Seconds displayed on the elapsed-time counter
    pub elapsed_seconds: u64,

    /// Total track length in seconds (0 until metadata loads)
    pub duration_seconds: u64,

    /// Volume level in `[0.0, 1.0]`; 0.0 is muted
    pub volume: f32,
}

impl PlaybackSnapshot {
    /// Elapsed time formatted as `m:ss`
    pub fn formatted_elapsed(&self) -> String {
        format_timestamp(self.elapsed_seconds)
    }

    /// Track duration formatted as `m:ss`
    pub fn formatted_duration(&self) -> String {
        format_timestamp(self.duration_seconds)
    }
}
