use crate::core::ChapterTable;
use crate::host::ViewerHost;

use super::{ViewerEngine, ViewerEngineConfig};

impl<H: ViewerHost> ViewerEngine<H> {
    #[must_use]
    pub fn table(&self) -> &ChapterTable {
        &self.table
    }

    #[must_use]
    pub fn config(&self) -> &ViewerEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn chapter_count(&self) -> usize {
        self.table.len()
    }
}
