use serde::{Deserialize, Serialize};

/// Scroll geometry of the viewer container, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ContainerMetrics {
    #[must_use]
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// `false` while the container has not been laid out yet.
    #[must_use]
    pub fn is_laid_out(self) -> bool {
        self.scroll_height.is_finite()
            && self.scroll_height > 0.0
            && self.scroll_top.is_finite()
            && self.client_height.is_finite()
    }

    /// Normalized top/mid fractions, or `None` for a container without layout.
    #[must_use]
    pub fn scroll_fraction(self) -> Option<ScrollFraction> {
        if !self.is_laid_out() {
            return None;
        }
        let top_fraction = self.scroll_top / self.scroll_height;
        let mid_fraction = top_fraction + (self.client_height / self.scroll_height) / 2.0;
        Some(ScrollFraction {
            top_fraction,
            mid_fraction,
        })
    }
}

/// Normalized viewport position.
///
/// Serializes with the field names hosts poll for (`scrollTopPos`,
/// `scrollMidPos`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollFraction {
    #[serde(rename = "scrollTopPos")]
    pub top_fraction: f64,
    #[serde(rename = "scrollMidPos")]
    pub mid_fraction: f64,
}

impl ScrollFraction {
    #[must_use]
    pub fn new(top_fraction: f64, mid_fraction: f64) -> Self {
        Self {
            top_fraction,
            mid_fraction,
        }
    }
}

/// Rendered pixel size of the plot target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderSize {
    pub width: u32,
    pub height: u32,
}

impl RenderSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
