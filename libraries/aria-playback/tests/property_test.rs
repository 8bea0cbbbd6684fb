//! Property-based tests for the playback core
//!
//! Uses proptest to verify the navigation, volume, and formatting laws
//! across many random inputs.

use aria_core::{MediaResolver, ResolvedTrack, SongId};
use aria_playback::{
    event_channel, format_timestamp, AudioBackend, HandleId, PlayerSession, SessionConfig,
    SongQueue,
};
use proptest::prelude::*;
use std::time::Duration;

// ===== Helpers =====

/// Queue of distinct ids plus an index into it
fn queue_and_index() -> impl Strategy<Value = (Vec<SongId>, usize)> {
    (2usize..30).prop_flat_map(|n| {
        let ids: Vec<SongId> = (0..n).map(|i| SongId::new(format!("s{}", i))).collect();
        (Just(ids), 0..n)
    })
}

fn distinct_ids() -> impl Strategy<Value = Vec<SongId>> {
    (1usize..30).prop_map(|n| (0..n).map(|i| SongId::new(format!("s{}", i))).collect())
}

struct NoBackend;

impl AudioBackend for NoBackend {
    fn load(&mut self, _: HandleId, _: &str, _: f32) -> aria_playback::Result<()> {
        Ok(())
    }
    fn play(&mut self, _: HandleId) {}
    fn pause(&mut self, _: HandleId) {}
    fn seek(&mut self, _: HandleId, _: Duration) {}
    fn set_volume(&mut self, _: HandleId, _: f32) {}
    fn unload(&mut self, _: HandleId) {}
}

struct NoCatalog;

impl MediaResolver for NoCatalog {
    fn resolve(&self, _: &SongId) -> Option<ResolvedTrack> {
        None
    }
}

fn bare_session() -> PlayerSession {
    let (_events_tx, events_rx) = event_channel();
    PlayerSession::new(
        SessionConfig::default(),
        Box::new(NoCatalog),
        Box::new(NoBackend),
        events_rx,
    )
}

// ===== Property Tests =====

proptest! {
    /// Property: next then previous returns to the starting id
    /// (distinct ids; a single-element queue is covered separately)
    #[test]
    fn next_then_previous_round_trips((ids, index) in queue_and_index()) {
        let start = ids[index].clone();
        let mut queue = SongQueue::new();
        queue.set_queue(ids, Some(&start));

        queue.next();
        queue.previous();

        prop_assert_eq!(queue.active(), Some(&start));
    }

    /// Property: next from the last element wraps to the first,
    /// previous from the first wraps to the last
    #[test]
    fn navigation_wraps_at_both_edges(ids in distinct_ids()) {
        let first = ids[0].clone();
        let last = ids[ids.len() - 1].clone();

        let mut queue = SongQueue::new();
        queue.set_queue(ids.clone(), Some(&last));
        prop_assert_eq!(queue.next(), Some(&first));

        let mut queue = SongQueue::new();
        queue.set_queue(ids, Some(&first));
        prop_assert_eq!(queue.previous(), Some(&last));
    }

    /// Property: a single-element queue never moves
    #[test]
    fn single_element_queue_is_stationary(id in "[a-z0-9]{1,10}") {
        let only = SongId::new(id);
        let mut queue = SongQueue::new();
        queue.set_queue(vec![only.clone()], None);

        queue.next();
        prop_assert_eq!(queue.active(), Some(&only));
        queue.previous();
        prop_assert_eq!(queue.active(), Some(&only));
    }

    /// Property: navigation on an empty queue never mutates the selection
    /// and never panics
    #[test]
    fn empty_queue_navigation_is_total(id in "[a-z0-9]{1,10}") {
        let mut queue = SongQueue::new();
        queue.set_active(SongId::new(id.clone()));

        prop_assert!(queue.next().is_none());
        prop_assert!(queue.previous().is_none());
        prop_assert_eq!(queue.active(), Some(&SongId::new(id)));
    }

    /// Property: unmuting always lands on exactly 1.0, never on the level
    /// that was set before muting
    #[test]
    fn unmute_restores_full_volume(level in 0.01f32..=1.0) {
        let mut session = bare_session();
        session.set_volume(level);
        prop_assert!(!session.is_muted());

        session.toggle_mute();
        prop_assert!(session.is_muted());
        prop_assert_eq!(session.snapshot().volume, 0.0);

        session.toggle_mute();
        prop_assert_eq!(session.snapshot().volume, 1.0);
    }

    /// Property: volume is always clamped to [0, 1]
    #[test]
    fn volume_is_clamped(level in -10.0f32..10.0) {
        let mut session = bare_session();
        session.set_volume(level);

        let actual = session.snapshot().volume;
        prop_assert!((0.0..=1.0).contains(&actual));
    }

    /// Property: formatted timestamps decompose back into their input
    #[test]
    fn formatted_timestamp_decomposes(total in 0u64..100_000) {
        let formatted = format_timestamp(total);
        let (minutes, seconds) = formatted.split_once(':').unwrap();
        let minutes: u64 = minutes.parse().unwrap();
        let seconds_str_len = seconds.len();
        let seconds: u64 = seconds.parse().unwrap();

        prop_assert_eq!(seconds_str_len, 2);
        prop_assert!(seconds < 60);
        prop_assert_eq!(minutes * 60 + seconds, total);
    }
}

#[test]
fn unmute_from_zero_is_full_volume() {
    let mut session = bare_session();
    session.set_volume(0.0);
    assert!(session.is_muted());

    session.toggle_mute();
    assert_eq!(session.snapshot().volume, 1.0);
}
