use tracing::debug;

use crate::error::{SyncError, SyncResult};
use crate::extensions::SyncListener;
use crate::host::ViewerHost;

use super::ViewerEngine;

impl<H: ViewerHost> ViewerEngine<H> {
    /// Registers a listener with unique identifier.
    pub fn register_listener(&mut self, listener: Box<dyn SyncListener>) -> SyncResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(SyncError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.has_listener(&listener_id) {
            return Err(SyncError::DuplicateListener(listener_id));
        }
        debug!(listener = %listener_id, "register listener");
        self.listeners.push(listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        if let Some(position) = self
            .listeners
            .iter()
            .position(|entry| entry.id() == listener_id)
        {
            self.listeners.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners
            .iter()
            .any(|listener| listener.id() == listener_id)
    }
}
