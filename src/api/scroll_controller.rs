use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{ContainerMetrics, ScrollFraction, locate};
use crate::error::{SyncError, SyncResult};
use crate::extensions::SyncEvent;
use crate::host::ViewerHost;

use super::ViewerEngine;

/// What a scroll event did to the sync state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollOutcome {
    /// Container not laid out yet; nothing changed and nothing was emitted.
    Skipped,
    Updated {
        fraction: ScrollFraction,
        chapter_index: usize,
        chapter_changed: bool,
    },
}

impl<H: ViewerHost> ViewerEngine<H> {
    /// Handles one scroll event of the viewer container.
    ///
    /// Emits `ChapterChanged` only when the located chapter differs from the
    /// previous event, then always `PositionUpdated`.
    pub fn on_scroll(&mut self, metrics: ContainerMetrics) -> SyncResult<ScrollOutcome> {
        let Some(fraction) = metrics.scroll_fraction() else {
            trace!(
                scroll_height = metrics.scroll_height,
                "container not laid out; ignoring scroll event"
            );
            return Ok(ScrollOutcome::Skipped);
        };

        let chapter_index = locate(fraction.top_fraction, &self.table)?;
        let chapter_changed = self.scroll.record(fraction, chapter_index);
        trace!(
            top_fraction = fraction.top_fraction,
            mid_fraction = fraction.mid_fraction,
            chapter_index,
            "scroll event"
        );

        let mut events: SmallVec<[SyncEvent; 2]> = SmallVec::new();
        if chapter_changed {
            let title = self
                .table
                .title_at(chapter_index)
                .unwrap_or_default()
                .to_owned();
            debug!(chapter_index, title = %title, "active chapter changed");
            events.push(SyncEvent::ChapterChanged {
                index: chapter_index,
                title,
            });
        }
        events.push(SyncEvent::PositionUpdated {
            top_fraction: fraction.top_fraction,
            mid_fraction: fraction.mid_fraction,
        });
        self.emit_events(&events);

        Ok(ScrollOutcome::Updated {
            fraction,
            chapter_index,
            chapter_changed,
        })
    }

    /// Processes a scroll event using the host's current container metrics.
    ///
    /// A host without a container yet is treated like an unlaid-out one.
    pub fn sync_from_host(&mut self) -> SyncResult<ScrollOutcome> {
        match self.host.scroll_metrics() {
            Some(metrics) => self.on_scroll(metrics),
            None => {
                trace!("scroll container missing; ignoring scroll event");
                Ok(ScrollOutcome::Skipped)
            }
        }
    }

    /// Chapter currently highlighted, `None` before the first scroll event.
    #[must_use]
    pub fn active_chapter(&self) -> Option<usize> {
        self.scroll.last_known_index()
    }

    #[must_use]
    pub fn active_chapter_title(&self) -> Option<&str> {
        self.active_chapter()
            .and_then(|index| self.table.title_at(index))
    }

    /// Last published position, for hosts polling telemetry on their own
    /// schedule.
    #[must_use]
    pub fn latest_scroll_data(&self) -> ScrollFraction {
        self.scroll.latest()
    }

    /// `latest_scroll_data` as `{"scrollTopPos":..,"scrollMidPos":..}`.
    pub fn latest_scroll_data_json(&self) -> SyncResult<String> {
        serde_json::to_string(&self.scroll.latest())
            .map_err(|e| SyncError::InvalidData(format!("failed to serialize scroll data: {e}")))
    }

    #[must_use]
    pub fn processed_scroll_events(&self) -> u64 {
        self.scroll.processed_events()
    }
}
