//! FLTK host for the font size control.
//!
//! Note: widget code needs a display and is exercised by running the binary.
//! Only the style table mapping is unit-tested.

pub mod editor_host;
pub mod main_window;
pub mod preset_popup;
pub mod style_map;
pub mod toolbar;
