pub mod locator;
pub mod navigation;
pub mod position_table;
pub mod sizing;
pub mod types;

pub use locator::locate;
pub use navigation::{DEFAULT_LEAD_IN_FRACTION, scroll_offset_for};
pub use position_table::{Chapter, ChapterTable};
pub use sizing::{SizeSync, SizeSynchronizer, fit_to_width, parse_aspect_ratio, sync_size};
pub use types::{ContainerMetrics, RenderSize, ScrollFraction};
