use crate::core::{ContainerMetrics, RenderSize};

use super::ViewerHost;

/// In-memory host used by tests and headless engine usage.
///
/// It records every write so tests can assert that idempotent paths stay
/// silent.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    pub metrics: Option<ContainerMetrics>,
    pub container_width: Option<u32>,
    pub render_size: RenderSize,
    pub scroll_writes: Vec<f64>,
    pub size_writes: Vec<RenderSize>,
}

impl HeadlessHost {
    #[must_use]
    pub fn new(metrics: ContainerMetrics) -> Self {
        Self {
            metrics: Some(metrics),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_container_width(mut self, width: u32) -> Self {
        self.container_width = Some(width);
        self
    }

    /// Simulates a user scroll.
    pub fn scroll_to(&mut self, scroll_top: f64) {
        if let Some(metrics) = self.metrics.as_mut() {
            metrics.scroll_top = scroll_top;
        }
    }
}

impl ViewerHost for HeadlessHost {
    fn scroll_metrics(&self) -> Option<ContainerMetrics> {
        self.metrics
    }

    fn set_scroll_top(&mut self, scroll_top: f64) {
        self.scroll_writes.push(scroll_top);
        self.scroll_to(scroll_top);
    }

    fn container_width(&self) -> Option<u32> {
        self.container_width
    }

    fn render_size(&self) -> RenderSize {
        self.render_size
    }

    fn set_render_size(&mut self, size: RenderSize) {
        self.size_writes.push(size);
        self.render_size = size;
    }
}
