use serde::{Deserialize, Serialize};

use crate::core::ScrollFraction;

/// Read-only state snapshot passed to listener hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyncContext {
    pub chapter_count: usize,
    pub active_chapter: Option<usize>,
    pub latest: ScrollFraction,
}

/// Event stream published by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SyncEvent {
    /// Edge-triggered: emitted only when the located chapter differs from the
    /// previous one.
    ChapterChanged { index: usize, title: String },
    /// Level-triggered: emitted for every processed scroll event.
    PositionUpdated { top_fraction: f64, mid_fraction: f64 },
    /// A chapter button was (re)attached and needs its visual state.
    ButtonAttached { index: usize },
    Resized { width: u32, height: u32 },
}

/// Consumer hook for engine events.
///
/// Listeners observe events and read engine context without mutating sync
/// state directly.
pub trait SyncListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &SyncEvent, context: SyncContext);
}
