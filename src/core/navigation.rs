use tracing::warn;

use crate::core::{ChapterTable, ContainerMetrics};
use crate::error::{SyncError, SyncResult};

/// Default share of `scroll_height / last_absolute_start` kept above a
/// navigation target so its heading is not flush with the viewport edge.
pub const DEFAULT_LEAD_IN_FRACTION: f64 = 0.1;

/// Scroll offset that brings chapter `index` into view.
///
/// `relative_start(index) * (scroll_height - client_height) + lead_in`, where
/// `lead_in = scroll_height / absolute_start(last) * lead_in_fraction`.
/// A zero or non-finite lead-in denominator yields no lead-in.
pub fn scroll_offset_for(
    index: usize,
    table: &ChapterTable,
    metrics: ContainerMetrics,
    lead_in_fraction: f64,
) -> SyncResult<f64> {
    let len = table.len();
    let (Some(relative_start), Some(last_absolute)) = (
        table.relative_start_at(index),
        len.checked_sub(1).and_then(|last| table.absolute_start_at(last)),
    ) else {
        return Err(SyncError::OutOfRange { index, len });
    };

    let total_height = metrics.scroll_height - metrics.client_height;
    Ok(relative_start * total_height + lead_in(metrics, last_absolute, lead_in_fraction))
}

fn lead_in(metrics: ContainerMetrics, last_absolute: f64, lead_in_fraction: f64) -> f64 {
    let offset = (metrics.scroll_height / last_absolute) * lead_in_fraction;
    if last_absolute == 0.0 || !offset.is_finite() {
        warn!(
            last_absolute,
            scroll_height = metrics.scroll_height,
            "degenerate lead-in denominator; navigating without lead-in"
        );
        return 0.0;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Chapter;

    #[test]
    fn zero_last_absolute_start_drops_the_lead_in() {
        let table = ChapterTable::from_chapters(vec![
            Chapter::new(0.0, 0.0, "a"),
            Chapter::new(0.5, 0.0, "b"),
        ])
        .expect("valid table");
        let offset = scroll_offset_for(1, &table, ContainerMetrics::new(0.0, 1000.0, 200.0), 0.1)
            .expect("offset");
        assert!((offset - 400.0).abs() <= 1e-9);
    }

    #[test]
    fn empty_table_reports_out_of_range() {
        let table = ChapterTable::from_chapters(Vec::new()).expect("empty table");
        let err = scroll_offset_for(0, &table, ContainerMetrics::new(0.0, 1000.0, 200.0), 0.1)
            .expect_err("nothing to navigate to");
        assert!(matches!(err, SyncError::OutOfRange { index: 0, len: 0 }));
    }
}
