use tracing::{debug, warn};

use crate::error::SyncResult;
use crate::extensions::SyncEvent;
use crate::host::ViewerHost;
use crate::interaction::{ChapterButton, InsertedNode};

use super::ViewerEngine;

impl<H: ViewerHost> ViewerEngine<H> {
    /// Handles a child inserted under the chapter index container.
    ///
    /// Returns the chapter index when the node is a chapter button; its click
    /// handler is then attached (see [`Self::click_button`]) and listeners get
    /// `ButtonAttached` so a re-rendered button picks up the current highlight.
    pub fn on_child_inserted(&mut self, node: &InsertedNode) -> Option<usize> {
        let button = self.config.button_filter.match_node(node)?;
        let chapter_index = button.chapter_index;
        if chapter_index >= self.table.len() {
            warn!(
                chapter_index,
                chapters = self.table.len(),
                "chapter button points past the chapter table"
            );
        }
        debug!(chapter_index, "attach chapter button");
        self.buttons.register(button);
        self.emit_events(&[SyncEvent::ButtonAttached {
            index: chapter_index,
        }]);
        Some(chapter_index)
    }

    /// Click on the button of chapter `chapter_index`.
    ///
    /// Returns `Ok(None)` when no such button was attached (the click has no
    /// handler), otherwise the applied scroll offset.
    pub fn click_button(&mut self, chapter_index: usize) -> SyncResult<Option<f64>> {
        if !self.buttons.contains(chapter_index) {
            warn!(chapter_index, "click on unattached chapter button");
            return Ok(None);
        }
        self.jump_to(chapter_index).map(Some)
    }

    pub fn chapter_buttons(&self) -> impl Iterator<Item = &ChapterButton> {
        self.buttons.iter()
    }

    #[must_use]
    pub fn chapter_button_count(&self) -> usize {
        self.buttons.len()
    }
}
