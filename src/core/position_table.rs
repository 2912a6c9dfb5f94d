use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{SyncError, SyncResult};

/// One navigable chapter of the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Start of the chapter as a fraction of the scrollable height.
    pub relative_start: f64,
    /// Start of the chapter in plot units; only the last value is consulted,
    /// as the navigation lead-in denominator.
    pub absolute_start: f64,
    pub title: String,
    #[serde(default)]
    pub id: Option<String>,
}

impl Chapter {
    #[must_use]
    pub fn new(relative_start: f64, absolute_start: f64, title: impl Into<String>) -> Self {
        Self {
            relative_start,
            absolute_start,
            title: title.into(),
            id: None,
        }
    }
}

/// Column-oriented wire form published by the host.
///
/// Hosts may ship a column under several names at once (dataframe exports keep
/// every column), so each name is read separately and reconciled.
#[derive(Debug, Deserialize)]
struct ChapterPayload {
    #[serde(rename = "relativeStart")]
    relative_start: Option<Vec<f64>>,
    #[serde(rename = "scrollRelative")]
    scroll_relative: Option<Vec<f64>>,
    scroll: Option<Vec<f64>>,
    #[serde(rename = "absoluteStart")]
    absolute_start: Option<Vec<f64>>,
    #[serde(rename = "scrollAbsolute")]
    scroll_absolute: Option<Vec<f64>>,
    title: Option<Vec<String>>,
    id: Option<Vec<Value>>,
}

/// Immutable, ordered chapter boundary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterTable {
    chapters: Vec<Chapter>,
    sorted: bool,
}

impl ChapterTable {
    /// Parses the host JSON payload.
    ///
    /// `relativeStart` (or `scrollRelative`/`scroll`) and `title` are
    /// required. Without `absoluteStart` (or `scrollAbsolute`) each absolute
    /// start mirrors the relative one.
    pub fn from_json_str(input: &str) -> SyncResult<Self> {
        let payload: ChapterPayload = serde_json::from_str(input)
            .map_err(|e| SyncError::Parse(format!("failed to parse chapter payload: {e}")))?;

        let relative = merge_columns([
            ("relativeStart", payload.relative_start),
            ("scrollRelative", payload.scroll_relative),
            ("scroll", payload.scroll),
        ])?
        .ok_or_else(|| SyncError::Parse("missing field `relativeStart`".to_owned()))?;
        let titles = payload
            .title
            .ok_or_else(|| SyncError::Parse("missing field `title`".to_owned()))?;
        let absolute = merge_columns([
            ("absoluteStart", payload.absolute_start),
            ("scrollAbsolute", payload.scroll_absolute),
        ])?
        .unwrap_or_else(|| relative.clone());

        let len = relative.len();
        check_column_len("title", titles.len(), len)?;
        check_column_len("absoluteStart", absolute.len(), len)?;

        let ids = match payload.id {
            Some(values) => {
                check_column_len("id", values.len(), len)?;
                values.into_iter().map(id_to_string).collect()
            }
            None => vec![None; len],
        };

        let chapters = relative
            .into_iter()
            .zip(absolute)
            .zip(titles)
            .zip(ids)
            .map(|(((relative_start, absolute_start), title), id)| Chapter {
                relative_start,
                absolute_start,
                title,
                id,
            })
            .collect();

        let table = Self::from_chapters(chapters).map_err(|err| match err {
            SyncError::InvalidData(msg) => SyncError::Parse(msg),
            other => other,
        })?;
        debug!(
            chapters = table.len(),
            sorted = table.sorted,
            "loaded chapter table"
        );
        Ok(table)
    }

    /// Builds a table from chapters already in document order.
    pub fn from_chapters(chapters: Vec<Chapter>) -> SyncResult<Self> {
        if let Some((index, _)) = chapters.iter().enumerate().find(|(_, chapter)| {
            !chapter.relative_start.is_finite() || !chapter.absolute_start.is_finite()
        }) {
            return Err(SyncError::InvalidData(format!(
                "chapter {index} has a non-finite start position"
            )));
        }

        let sorted = chapters
            .windows(2)
            .all(|pair| pair[0].relative_start <= pair[1].relative_start);
        if !sorted {
            warn!(
                chapters = chapters.len(),
                "chapter starts are not sorted; locating falls back to linear scan"
            );
        }

        Ok(Self { chapters, sorted })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// `true` when relative starts are non-decreasing.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    #[must_use]
    pub fn relative_start_at(&self, index: usize) -> Option<f64> {
        self.chapters.get(index).map(|chapter| chapter.relative_start)
    }

    #[must_use]
    pub fn absolute_start_at(&self, index: usize) -> Option<f64> {
        self.chapters.get(index).map(|chapter| chapter.absolute_start)
    }

    #[must_use]
    pub fn title_at(&self, index: usize) -> Option<&str> {
        self.chapters.get(index).map(|chapter| chapter.title.as_str())
    }

    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.chapters.get(index).and_then(|chapter| chapter.id.as_deref())
    }

    /// Navigation button caption: `α` for the first chapter, `ω` for the
    /// last, the chapter index otherwise.
    #[must_use]
    pub fn button_label(&self, index: usize) -> Option<String> {
        if index >= self.chapters.len() {
            return None;
        }
        let label = if index == 0 {
            "α".to_owned()
        } else if index + 1 == self.chapters.len() {
            "ω".to_owned()
        } else {
            index.to_string()
        };
        Some(label)
    }
}

/// First present column; every other present spelling must carry the same
/// values.
fn merge_columns<const N: usize>(
    candidates: [(&'static str, Option<Vec<f64>>); N],
) -> SyncResult<Option<Vec<f64>>> {
    let mut chosen: Option<(&'static str, Vec<f64>)> = None;
    for (name, column) in candidates {
        let Some(column) = column else {
            continue;
        };
        if let Some((first, values)) = chosen.as_ref() {
            if *values != column {
                return Err(SyncError::Parse(format!(
                    "columns `{first}` and `{name}` disagree"
                )));
            }
            continue;
        }
        chosen = Some((name, column));
    }
    Ok(chosen.map(|(_, values)| values))
}

fn check_column_len(column: &str, actual: usize, expected: usize) -> SyncResult<()> {
    if actual != expected {
        return Err(SyncError::Parse(format!(
            "column `{column}` has {actual} entries, expected {expected}"
        )));
    }
    Ok(())
}

fn id_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
