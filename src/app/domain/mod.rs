//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - FontSize and input parsing
//! - The preset size list
//! - Font size configuration
//! - Message types for the event system

pub mod font_size;
pub mod messages;
pub mod presets;
pub mod settings;

pub use font_size::{FontSize, parse_size_input};
pub use messages::Message;
pub use presets::{DEFAULT_PRESETS, PresetSizeList};
pub use settings::FontSizeConfig;
