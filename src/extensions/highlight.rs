use serde::{Deserialize, Serialize};

use super::{SyncContext, SyncEvent, SyncListener};

/// CSS classes toggled on chapter buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightClasses {
    pub active: String,
    pub inactive: String,
}

impl Default for HighlightClasses {
    fn default() -> Self {
        Self {
            active: "fig-chapter-highlight".to_owned(),
            inactive: "fig-chapter".to_owned(),
        }
    }
}

impl HighlightClasses {
    #[must_use]
    pub fn class_for(&self, active: bool) -> &str {
        if active { &self.active } else { &self.inactive }
    }
}

/// Receives button class updates, typically by writing `className`.
pub trait HighlightSink {
    fn set_button_class(&mut self, chapter_index: usize, class: &str);
}

impl<F: FnMut(usize, &str)> HighlightSink for F {
    fn set_button_class(&mut self, chapter_index: usize, class: &str) {
        self(chapter_index, class);
    }
}

/// Receives the title of the chapter in view.
pub trait TitleSink {
    fn show_title(&mut self, title: &str);
}

impl<F: FnMut(&str)> TitleSink for F {
    fn show_title(&mut self, title: &str) {
        self(title);
    }
}

/// Moves the active visual state to the button of the chapter in view.
///
/// Only the previously active and the newly active buttons are rewritten.
pub struct ChapterHighlighter<S: HighlightSink> {
    id: String,
    classes: HighlightClasses,
    active: Option<usize>,
    sink: S,
}

impl<S: HighlightSink> ChapterHighlighter<S> {
    #[must_use]
    pub fn new(id: impl Into<String>, classes: HighlightClasses, sink: S) -> Self {
        Self {
            id: id.into(),
            classes,
            active: None,
            sink,
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }
}

impl<S: HighlightSink> SyncListener for ChapterHighlighter<S> {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &SyncEvent, context: SyncContext) {
        match event {
            SyncEvent::ChapterChanged { index, .. } => self.activate(*index),
            // Catches up when registered after the last chapter change.
            SyncEvent::PositionUpdated { .. } => {
                let behind = context
                    .active_chapter
                    .filter(|index| self.active != Some(*index));
                if let Some(index) = behind {
                    self.activate(index);
                }
            }
            SyncEvent::ButtonAttached { index } => {
                if context.active_chapter == Some(*index) {
                    self.activate(*index);
                } else {
                    self.sink
                        .set_button_class(*index, self.classes.class_for(false));
                }
            }
            SyncEvent::Resized { .. } => {}
        }
    }
}

impl<S: HighlightSink> ChapterHighlighter<S> {
    fn activate(&mut self, index: usize) {
        if let Some(previous) = self.active.filter(|previous| *previous != index) {
            self.sink
                .set_button_class(previous, self.classes.class_for(false));
        }
        self.sink.set_button_class(index, self.classes.class_for(true));
        self.active = Some(index);
    }
}

/// Writes the current chapter title to a designated location.
pub struct TitleDisplay<S: TitleSink> {
    id: String,
    sink: S,
}

impl<S: TitleSink> TitleDisplay<S> {
    #[must_use]
    pub fn new(id: impl Into<String>, sink: S) -> Self {
        Self { id: id.into(), sink }
    }
}

impl<S: TitleSink> SyncListener for TitleDisplay<S> {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &SyncEvent, _context: SyncContext) {
        if let SyncEvent::ChapterChanged { title, .. } = event {
            self.sink.show_title(title);
        }
    }
}
