//! Volume state for the playback session
//!
//! Volume is a linear level in `[0.0, 1.0]` applied to the live engine
//! handle. A level of exactly `0.0` is what the transport surface calls
//! "muted"; there is no separate mute flag.

/// Volume level with mute semantics folded into the level itself
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    level: f32,
}

impl Volume {
    /// Create a volume at the given level, clamped to `[0.0, 1.0]`
    pub fn new(level: f32) -> Self {
        Self {
            level: level.clamp(0.0, 1.0),
        }
    }

    /// Set the level, clamped to `[0.0, 1.0]`
    pub fn set(&mut self, level: f32) {
        self.level = level.clamp(0.0, 1.0);
    }

    /// Current level
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Whether the level is exactly zero
    pub fn is_muted(&self) -> bool {
        self.level == 0.0
    }

    /// Toggle between muted and full volume
    ///
    /// Unmuting always returns to full volume (1.0), not to whatever level
    /// was in effect before muting; the speaker icon on the transport
    /// surface behaves as a hard on/off switch.
    pub fn toggle_mute(&mut self) {
        self.level = if self.is_muted() { 1.0 } else { 0.0 };
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(1.0)
    }
}
