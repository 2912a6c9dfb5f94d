mod buttons;

pub use buttons::{ButtonFilter, ChapterButton, ChapterButtonRegistry, InsertedNode};

use crate::core::ScrollFraction;

/// Scroll-to-chapter tracking state.
///
/// `last_known_index` is `None` until the first laid-out scroll event; after
/// that it always holds the chapter located for the latest top fraction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSyncState {
    last_known_index: Option<usize>,
    latest: ScrollFraction,
    processed_events: u64,
}

impl ScrollSyncState {
    #[must_use]
    pub fn last_known_index(self) -> Option<usize> {
        self.last_known_index
    }

    /// Last published position; `{0.0, 0.0}` before any scroll event.
    #[must_use]
    pub fn latest(self) -> ScrollFraction {
        self.latest
    }

    #[must_use]
    pub fn processed_events(self) -> u64 {
        self.processed_events
    }

    /// Records a located scroll event. Returns `true` when the chapter changed.
    pub fn record(&mut self, fraction: ScrollFraction, index: usize) -> bool {
        self.latest = fraction;
        self.processed_events += 1;
        let changed = self.last_known_index != Some(index);
        self.last_known_index = Some(index);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_record_always_reports_a_change() {
        let mut state = ScrollSyncState::default();
        assert!(state.record(ScrollFraction::new(0.0, 0.1), 0));
        assert!(!state.record(ScrollFraction::new(0.05, 0.15), 0));
        assert!(state.record(ScrollFraction::new(0.3, 0.4), 1));
        assert_eq!(state.last_known_index(), Some(1));
        assert_eq!(state.processed_events(), 3);
    }
}
