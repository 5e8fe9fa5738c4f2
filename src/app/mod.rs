//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (FontSize, presets, config, messages)
//! - `controllers/` - The numeric field, the preset dropdown, reconciliation
//! - `infrastructure/` - Seams to the host editor (capabilities, event bus, errors)
//! - `plugin.rs` - Attaches the control to one editor instance

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod plugin;

// Re-exports for convenient external access
pub use controllers::font_size_control::{EditOutcome, FontSizeControl};
pub use controllers::preset_list::OverlayState;
pub use domain::{FontSize, FontSizeConfig, Message, PresetSizeList};
pub use infrastructure::error::{AppError, HostError, Result};
pub use infrastructure::event_bus::{EventBus, LocalEventBus};
pub use infrastructure::host::{EditorHost, FontSizeHost, OverlayHost};
pub use plugin::FontSizePlugin;
