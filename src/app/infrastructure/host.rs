//! Capabilities the host editor lends to the font size control.

use super::error::HostError;
use crate::app::domain::font_size::FontSize;

/// Applies a size to whatever text the host currently has selected.
pub trait FontSizeHost {
    fn apply_font_size_to_selection(&mut self, size: FontSize) -> Result<(), HostError>;
}

/// Presentation primitives for the preset dropdown.
pub trait OverlayHost {
    fn show_overlay(&mut self);
    fn hide_overlay(&mut self);
}

/// Everything the control needs from one editor instance.
pub trait EditorHost: FontSizeHost + OverlayHost {}

impl<T: FontSizeHost + OverlayHost> EditorHost for T {}
