//! Event consumers attached to the engine.
//!
//! Listeners only observe; they never feed back into scroll tracking.

mod highlight;
mod listeners;

pub use highlight::{
    ChapterHighlighter, HighlightClasses, HighlightSink, TitleDisplay, TitleSink,
};
pub use listeners::{SyncContext, SyncEvent, SyncListener};
