use crate::extensions::{SyncContext, SyncEvent};
use crate::host::ViewerHost;

use super::ViewerEngine;

impl<H: ViewerHost> ViewerEngine<H> {
    pub(super) fn sync_context(&self) -> SyncContext {
        SyncContext {
            chapter_count: self.table.len(),
            active_chapter: self.scroll.last_known_index(),
            latest: self.scroll.latest(),
        }
    }

    /// Delivers `events` to every listener, in order.
    pub(super) fn emit_events(&mut self, events: &[SyncEvent]) {
        if events.is_empty() {
            return;
        }
        let context = self.sync_context();
        for event in events {
            for listener in &mut self.listeners {
                listener.on_event(event, context);
            }
        }
    }
}
