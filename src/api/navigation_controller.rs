use tracing::debug;

use crate::core::scroll_offset_for;
use crate::error::{SyncError, SyncResult};
use crate::host::ViewerHost;

use super::ViewerEngine;

impl<H: ViewerHost> ViewerEngine<H> {
    /// Scrolls the viewer so chapter `index` sits just below the top edge.
    ///
    /// Returns the scroll offset written to the host. Rejected requests leave
    /// the host untouched. The write is not fed back into scroll tracking:
    /// the host reports the resulting scroll like any other.
    pub fn jump_to(&mut self, index: usize) -> SyncResult<f64> {
        let len = self.table.len();
        if index >= len {
            return Err(SyncError::OutOfRange { index, len });
        }
        let metrics = self
            .host
            .scroll_metrics()
            .ok_or(SyncError::DependencyMissing("scroll container"))?;

        let offset = scroll_offset_for(index, &self.table, metrics, self.config.lead_in_fraction)?;
        debug!(
            chapter_index = index,
            offset,
            scroll_height = metrics.scroll_height,
            client_height = metrics.client_height,
            "jump to chapter"
        );
        self.host.set_scroll_top(offset);
        Ok(offset)
    }

    #[must_use]
    pub fn lead_in_fraction(&self) -> f64 {
        self.config.lead_in_fraction
    }

    pub fn set_lead_in_fraction(&mut self, lead_in_fraction: f64) -> SyncResult<()> {
        if !lead_in_fraction.is_finite() || lead_in_fraction < 0.0 {
            return Err(SyncError::InvalidData(
                "lead-in fraction must be finite and >= 0".to_owned(),
            ));
        }
        self.config.lead_in_fraction = lead_in_fraction;
        Ok(())
    }
}
