mod button_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod event_dispatch;
mod listener_registry;
mod navigation_controller;
mod scroll_controller;
mod size_controller;

pub use engine::ViewerEngine;
pub use engine_config::ViewerEngineConfig;
pub use scroll_controller::ScrollOutcome;
