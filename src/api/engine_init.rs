use tracing::{debug, warn};

use crate::core::{ChapterTable, SizeSynchronizer};
use crate::error::{SyncError, SyncResult};
use crate::host::{Sleeper, ViewerHost, await_condition};
use crate::interaction::{ChapterButtonRegistry, ScrollSyncState};

use super::{ViewerEngine, ViewerEngineConfig};

impl<H: ViewerHost> ViewerEngine<H> {
    /// Creates an engine over a loaded chapter table.
    ///
    /// An empty table is rejected: there would be no chapter to locate.
    pub fn new(host: H, table: ChapterTable, config: ViewerEngineConfig) -> SyncResult<Self> {
        config.validate()?;
        if table.is_empty() {
            return Err(SyncError::EmptyTable);
        }
        let sizer = SizeSynchronizer::new(config.aspect_ratio)?;
        debug!(
            chapters = table.len(),
            lead_in_fraction = config.lead_in_fraction,
            aspect_ratio = config.aspect_ratio,
            "viewer engine initialized"
        );

        Ok(Self {
            host,
            config,
            table,
            sizer,
            scroll: ScrollSyncState::default(),
            buttons: ChapterButtonRegistry::default(),
            listeners: Vec::new(),
        })
    }

    /// Creates an engine from the raw chapter payload.
    pub fn from_payload(host: H, payload: &str, config: ViewerEngineConfig) -> SyncResult<Self> {
        let table = ChapterTable::from_json_str(payload)?;
        Self::new(host, table, config)
    }

    /// Waits for the host to expose both the scroll container and the chapter
    /// payload, then builds the engine.
    ///
    /// `probe` returns the host and payload text once both exist. A timeout is
    /// reported as [`SyncError::DependencyTimeout`]; the page keeps running
    /// without scroll sync.
    pub fn bootstrap(
        config: ViewerEngineConfig,
        sleeper: &mut impl Sleeper,
        mut probe: impl FnMut() -> Option<(H, String)>,
    ) -> SyncResult<Self> {
        let (host, payload) = await_condition("viewer container", config.readiness, sleeper, || {
            probe().filter(|(host, _)| host.scroll_metrics().is_some())
        })
        .inspect_err(|err| warn!(error = %err, "viewer bootstrap gave up"))?;
        Self::from_payload(host, &payload, config)
    }
}
