use crate::core::RenderSize;
use crate::error::{SyncError, SyncResult};

/// Outcome of a size synchronization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSync {
    Resized(RenderSize),
    Unchanged,
}

/// Fits the render target to its container width at a fixed aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSynchronizer {
    aspect_ratio: f64,
}

impl SizeSynchronizer {
    pub fn new(aspect_ratio: f64) -> SyncResult<Self> {
        validate_aspect_ratio(aspect_ratio)?;
        Ok(Self { aspect_ratio })
    }

    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        self.aspect_ratio
    }

    /// Target size for `container_width`; `Unchanged` when it already matches
    /// `current`, so callers can skip layout writes.
    #[must_use]
    pub fn sync(self, container_width: u32, current: RenderSize) -> SizeSync {
        let target = fit_to_width(container_width, self.aspect_ratio);
        if target == current {
            SizeSync::Unchanged
        } else {
            SizeSync::Resized(target)
        }
    }
}

/// One-shot form of [`SizeSynchronizer::sync`].
pub fn sync_size(
    container_width: u32,
    aspect_ratio: f64,
    current: RenderSize,
) -> SyncResult<SizeSync> {
    Ok(SizeSynchronizer::new(aspect_ratio)?.sync(container_width, current))
}

/// `width = container_width`, `height = floor(container_width * aspect_ratio)`.
#[must_use]
pub fn fit_to_width(container_width: u32, aspect_ratio: f64) -> RenderSize {
    let height = (f64::from(container_width) * aspect_ratio).floor();
    // Float-to-int `as` saturates, which is the clamp we want for huge ratios.
    RenderSize::new(container_width, height as u32)
}

/// Parses an aspect ratio published as text by the host (e.g. `"1.000"`).
pub fn parse_aspect_ratio(text: &str) -> SyncResult<f64> {
    let ratio = text
        .trim()
        .parse::<f64>()
        .map_err(|e| SyncError::InvalidData(format!("invalid aspect ratio `{text}`: {e}")))?;
    validate_aspect_ratio(ratio)?;
    Ok(ratio)
}

pub(crate) fn validate_aspect_ratio(aspect_ratio: f64) -> SyncResult<()> {
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return Err(SyncError::InvalidData(
            "aspect ratio must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_is_floored() {
        assert_eq!(fit_to_width(333, 1.5), RenderSize::new(333, 499));
    }

    #[test]
    fn aspect_ratio_text_is_trimmed() {
        let ratio = parse_aspect_ratio(" 2.375\n").expect("valid ratio");
        assert!((ratio - 2.375).abs() <= 1e-12);
        assert!(parse_aspect_ratio("wide").is_err());
        assert!(parse_aspect_ratio("0").is_err());
    }
}
