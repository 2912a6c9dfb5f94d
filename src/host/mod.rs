mod headless;
pub mod readiness;

pub use headless::HeadlessHost;
pub use readiness::{PollBudget, PollStatus, ReadinessPoll, Sleeper, await_condition};

use crate::core::{ContainerMetrics, RenderSize};

/// Contract implemented by the page hosting the viewer.
///
/// Reads return `None` while the corresponding element does not exist yet.
/// Writes are fire-and-forget: a scroll write surfaces later as a regular
/// scroll event, never synchronously.
pub trait ViewerHost {
    fn scroll_metrics(&self) -> Option<ContainerMetrics>;
    fn set_scroll_top(&mut self, scroll_top: f64);
    fn container_width(&self) -> Option<u32>;
    fn render_size(&self) -> RenderSize;
    fn set_render_size(&mut self, size: RenderSize);
}
