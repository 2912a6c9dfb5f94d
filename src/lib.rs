//! chart-scroll-sync: chapter navigation companion for embedded chart viewers.
//!
//! This crate keeps a large scrollable plot and its chapter index in step:
//! scroll events highlight the chapter in view, chapter clicks scroll the
//! plot, and the render target follows its container at a fixed aspect ratio.
//! The page itself is reached only through the [`host::ViewerHost`] seam.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod host;
pub mod interaction;
pub mod telemetry;

#[cfg(feature = "web-adapter")]
pub mod platform_web;

pub use api::{ViewerEngine, ViewerEngineConfig};
pub use error::{SyncError, SyncResult};
