use crate::core::{ChapterTable, SizeSynchronizer};
use crate::extensions::SyncListener;
use crate::host::ViewerHost;
use crate::interaction::{ChapterButtonRegistry, ScrollSyncState};

use super::ViewerEngineConfig;

/// Main orchestration facade consumed by host pages.
///
/// `ViewerEngine` owns the chapter table and scroll tracking state, routes
/// host events (scroll, click, child insertion, resize) through the core
/// algorithms and publishes the results to registered listeners.
pub struct ViewerEngine<H: ViewerHost> {
    pub(super) host: H,
    pub(super) config: ViewerEngineConfig,
    pub(super) table: ChapterTable,
    pub(super) sizer: SizeSynchronizer,
    pub(super) scroll: ScrollSyncState,
    pub(super) buttons: ChapterButtonRegistry,
    pub(super) listeners: Vec<Box<dyn SyncListener>>,
}

impl<H: ViewerHost> ViewerEngine<H> {
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, e.g. to simulate user scrolling on a headless host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}
