use crate::app::domain::font_size::FontSize;
use crate::app::domain::presets::PresetSizeList;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::host::OverlayHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    Visible,
}

/// Owns the preset dropdown: its fixed list, whether it is open,
/// and which entry matches the current size.
pub struct PresetListController {
    presets: PresetSizeList,
    overlay: OverlayState,
    selected: Option<usize>,
}

impl PresetListController {
    pub fn new(presets: PresetSizeList, initial: FontSize) -> Self {
        let selected = presets.position(initial);
        Self {
            presets,
            overlay: OverlayState::Hidden,
            selected,
        }
    }

    pub fn presets(&self) -> &PresetSizeList {
        &self.presets
    }

    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    /// Index of the preset equal to the current size, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Open the dropdown. Returns false if it was already open.
    pub fn on_show_requested(&mut self, host: &mut impl OverlayHost) -> bool {
        if self.overlay == OverlayState::Visible {
            return false;
        }
        host.show_overlay();
        self.overlay = OverlayState::Visible;
        true
    }

    /// The size to apply for a clicked entry.
    pub fn candidate(&self, value: FontSize) -> Result<FontSize> {
        if self.presets.contains(value) {
            Ok(value)
        } else {
            Err(AppError::NotAPreset(value))
        }
    }

    /// Close the dropdown. Returns false if it was already closed.
    pub fn hide(&mut self, host: &mut impl OverlayHost) -> bool {
        if self.overlay == OverlayState::Hidden {
            return false;
        }
        host.hide_overlay();
        self.overlay = OverlayState::Hidden;
        true
    }

    pub(crate) fn reconcile(&mut self, size: FontSize) {
        self.selected = self.presets.position(size);
    }
}
