use crate::core::ChapterTable;
use crate::error::{SyncError, SyncResult};

/// Resolves the chapter in view for a normalized scroll fraction.
///
/// Intervals are half-open (`start[i] <= fraction < start[i + 1]`), so a
/// boundary belongs to the later chapter. Fractions before the first start
/// clamp to chapter `0`; fractions at or past the last start clamp to the last
/// chapter.
pub fn locate(fraction: f64, table: &ChapterTable) -> SyncResult<usize> {
    let chapters = table.chapters();
    let (Some(first), Some(last)) = (chapters.first(), chapters.last()) else {
        return Err(SyncError::EmptyTable);
    };
    if !fraction.is_finite() {
        return Err(SyncError::InvalidData(
            "scroll fraction must be finite".to_owned(),
        ));
    }

    let last_index = chapters.len() - 1;
    if fraction < first.relative_start {
        return Ok(0);
    }
    if fraction >= last.relative_start {
        return Ok(last_index);
    }

    if table.is_sorted() {
        // First start strictly greater than `fraction`, minus one.
        let upper = chapters.partition_point(|chapter| chapter.relative_start <= fraction);
        return Ok(upper.saturating_sub(1));
    }

    // start[0] <= fraction < start[last] guarantees a crossing pair exists.
    Ok(chapters
        .windows(2)
        .position(|pair| pair[0].relative_start <= fraction && fraction < pair[1].relative_start)
        .unwrap_or(last_index))
}
