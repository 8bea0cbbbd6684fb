//! Song queue
//!
//! Holds the ordered list of playable song ids and the active selection.
//! Pure state: navigation mutates the selection and nothing else; media
//! resolution and engine control live with the session.

use aria_core::SongId;

/// Ordered playback queue with a single active selection
///
/// Duplicate ids are permitted; when the active id occurs more than once,
/// navigation treats its position as the first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongQueue {
    ids: Vec<SongId>,
    active: Option<SongId>,
}

impl SongQueue {
    /// Create an empty queue with no selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue contents
    ///
    /// The active id becomes `start` when it is present in `ids`, otherwise
    /// the first element, otherwise nothing.
    pub fn set_queue(&mut self, ids: Vec<SongId>, start: Option<&SongId>) {
        self.active = match start {
            Some(id) if ids.contains(id) => Some(id.clone()),
            _ => ids.first().cloned(),
        };
        self.ids = ids;
    }

    /// Select a song unconditionally, even if it is not in the queue
    ///
    /// Direct selection from a song list may race a queue refresh; the
    /// navigation fallbacks below keep that state workable.
    pub fn set_active(&mut self, id: SongId) {
        self.active = Some(id);
    }

    /// Advance to the next song, wrapping to the first past the end
    ///
    /// Returns the new active id, or `None` when the queue is empty (the
    /// selection is left untouched in that case). An active id that is
    /// missing from the queue also wraps to the first element.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&SongId> {
        if self.ids.is_empty() {
            return None;
        }

        let target = match self.active_index() {
            Some(i) if i + 1 < self.ids.len() => i + 1,
            _ => 0,
        };

        self.active = Some(self.ids[target].clone());
        self.active.as_ref()
    }

    /// Step back to the previous song, wrapping to the last before the start
    ///
    /// Returns the new active id, or `None` when the queue is empty. An
    /// active id that is missing from the queue wraps to the last element.
    pub fn previous(&mut self) -> Option<&SongId> {
        if self.ids.is_empty() {
            return None;
        }

        let target = match self.active_index() {
            Some(i) if i > 0 => i - 1,
            _ => self.ids.len() - 1,
        };

        self.active = Some(self.ids[target].clone());
        self.active.as_ref()
    }

    /// Position of the active id in the queue (first occurrence)
    fn active_index(&self) -> Option<usize> {
        let active = self.active.as_ref()?;
        self.ids.iter().position(|id| id == active)
    }

    /// The queued ids in playback order
    pub fn ids(&self) -> &[SongId] {
        &self.ids
    }

    /// The active id, if any
    pub fn active(&self) -> Option<&SongId> {
        self.active.as_ref()
    }

    /// Number of queued ids
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the queue holds no ids
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<SongId> {
        names.iter().map(|n| SongId::new(*n)).collect()
    }

    #[test]
    fn empty_queue_has_no_selection() {
        let queue = SongQueue::new();
        assert!(queue.is_empty());
        assert!(queue.active().is_none());
    }

    #[test]
    fn set_queue_selects_start_when_present() {
        let mut queue = SongQueue::new();
        queue.set_queue(ids(&["a", "b", "c"]), Some(&SongId::new("b")));
        assert_eq!(queue.active(), Some(&SongId::new("b")));
    }

    #[test]
    fn set_queue_falls_back_to_first() {
        let mut queue = SongQueue::new();
        queue.set_queue(ids(&["a", "b"]), Some(&SongId::new("zz")));
        assert_eq!(queue.active(), Some(&SongId::new("a")));

        queue.set_queue(Vec::new(), Some(&SongId::new("a")));
        assert!(queue.active().is_none());
    }

    #[test]
    fn next_walks_forward_and_wraps() {
        let mut queue = SongQueue::new();
        queue.set_queue(ids(&["a", "b", "c"]), None);

        assert_eq!(queue.next(), Some(&SongId::new("b")));
        assert_eq!(queue.next(), Some(&SongId::new("c")));
        // Last element wraps to the first
        assert_eq!(queue.next(), Some(&SongId::new("a")));
    }

    #[test]
    fn previous_walks_backward_and_wraps() {
        let mut queue = SongQueue::new();
        queue.set_queue(ids(&["a", "b", "c"]), Some(&SongId::new("c")));

        assert_eq!(queue.previous(), Some(&SongId::new("b")));
        assert_eq!(queue.previous(), Some(&SongId::new("a")));
        // First element wraps to the last
        assert_eq!(queue.previous(), Some(&SongId::new("c")));
    }

    #[test]
    fn navigation_on_empty_queue_is_a_no_op() {
        let mut queue = SongQueue::new();
        queue.set_active(SongId::new("ghost"));

        assert!(queue.next().is_none());
        assert!(queue.previous().is_none());
        // Selection untouched
        assert_eq!(queue.active(), Some(&SongId::new("ghost")));
    }

    #[test]
    fn unknown_active_wraps_to_queue_edges() {
        let mut queue = SongQueue::new();
        queue.set_queue(ids(&["a", "b", "c"]), None);
        queue.set_active(SongId::new("not-queued"));

        assert_eq!(queue.next(), Some(&SongId::new("a")));

        queue.set_active(SongId::new("not-queued"));
        assert_eq!(queue.previous(), Some(&SongId::new("c")));
    }

    #[test]
    fn duplicate_active_resolves_to_first_occurrence() {
        let mut queue = SongQueue::new();
        queue.set_queue(ids(&["a", "b", "a", "c"]), None);
        queue.set_active(SongId::new("a"));

        // Position is the first "a", so next is "b" (not "c")
        assert_eq!(queue.next(), Some(&SongId::new("b")));
    }

    #[test]
    fn single_element_queue_stays_put() {
        let mut queue = SongQueue::new();
        queue.set_queue(ids(&["only"]), None);

        assert_eq!(queue.next(), Some(&SongId::new("only")));
        assert_eq!(queue.previous(), Some(&SongId::new("only")));
        assert_eq!(queue.active(), Some(&SongId::new("only")));
    }
}
