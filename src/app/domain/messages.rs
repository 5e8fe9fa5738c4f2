use super::font_size::FontSize;

/// All messages the font size widgets send through the FLTK channel.
/// Widget callbacks send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The numeric field committed a new raw value.
    SizeEdited(String),
    /// The toolbar button asked for the preset dropdown.
    ShowPresets,
    /// A preset entry was clicked.
    PresetClicked(FontSize),
    /// The dropdown was closed without picking anything.
    PresetsDismissed,
}

impl Message {
    /// True for messages after which the dropdown highlight must be
    /// re-read from the control, whether or not the size was applied.
    pub fn touches_preset_selection(&self) -> bool {
        matches!(self, Message::PresetClicked(_))
    }
}
