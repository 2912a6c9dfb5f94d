use tracing::{debug, trace};

use crate::core::{SizeSync, SizeSynchronizer};
use crate::error::{SyncError, SyncResult};
use crate::extensions::SyncEvent;
use crate::host::ViewerHost;

use super::ViewerEngine;

impl<H: ViewerHost> ViewerEngine<H> {
    /// Fits the render target to the current container width.
    ///
    /// Writes to the host and emits `Resized` only when the size changes, so
    /// it is safe to call on every resize poll.
    pub fn resize(&mut self) -> SyncResult<SizeSync> {
        let container_width = self
            .host
            .container_width()
            .ok_or(SyncError::DependencyMissing("render container"))?;

        let outcome = self.sizer.sync(container_width, self.host.render_size());
        match outcome {
            SizeSync::Resized(size) => {
                debug!(
                    width = size.width,
                    height = size.height,
                    aspect_ratio = self.sizer.aspect_ratio(),
                    "resize render target"
                );
                self.host.set_render_size(size);
                self.emit_events(&[SyncEvent::Resized {
                    width: size.width,
                    height: size.height,
                }]);
            }
            SizeSync::Unchanged => trace!(container_width, "render target already sized"),
        }
        Ok(outcome)
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.sizer.aspect_ratio()
    }

    /// Replaces the aspect ratio; takes effect on the next `resize`.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f64) -> SyncResult<()> {
        self.sizer = SizeSynchronizer::new(aspect_ratio)?;
        self.config.aspect_ratio = aspect_ratio;
        Ok(())
    }
}
