use fltk::{
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use super::preset_popup::PresetPopup;
use super::style_map::{MAX_FONT_SIZE, SizeStyleMap, fltk_size};
use crate::app::domain::font_size::FontSize;
use crate::app::infrastructure::error::HostError;
use crate::app::infrastructure::host::{FontSizeHost, OverlayHost};

/// The FLTK editor as seen by the font size control.
///
/// Sizes live in a style buffer parallel to the text buffer, one style char
/// per byte. Applying a size restyles the selected range.
pub struct FltkEditorHost {
    editor: TextEditor,
    buffer: TextBuffer,
    style_buffer: TextBuffer,
    styles: SizeStyleMap,
    popup: PresetPopup,
}

impl FltkEditorHost {
    pub fn new(mut editor: TextEditor, popup: PresetPopup, base: FontSize) -> Self {
        let mut buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();
        let base_size = fltk_size(base).unwrap_or(MAX_FONT_SIZE as i32);
        let styles = SizeStyleMap::new(editor.text_font(), base_size);

        // Keep the style buffer in step with edits; new text gets the base size
        let base_char = styles.base_char();
        let mut style_buf = style_buffer.clone();
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            if deleted > 0 {
                style_buf.remove(pos, pos + deleted);
            }
            if inserted > 0 {
                let filler: String = std::iter::repeat_n(base_char, inserted as usize).collect();
                style_buf.insert(pos, &filler);
            }
        });

        editor.set_buffer(buffer.clone());
        editor.set_text_size(base_size);
        editor.set_highlight_data(style_buffer.clone(), styles.entries().to_vec());

        Self {
            editor,
            buffer,
            style_buffer,
            styles,
            popup,
        }
    }
}

impl FontSizeHost for FltkEditorHost {
    fn apply_font_size_to_selection(&mut self, size: FontSize) -> Result<(), HostError> {
        let (start, end) = match self.buffer.selection_position() {
            Some((start, end)) if start < end => (start, end),
            _ => return Err(HostError::NoSelection),
        };
        let ch = self.styles.get_or_insert(size)?;

        let restyled: String = std::iter::repeat_n(ch, (end - start) as usize).collect();
        self.style_buffer.replace(start, end, &restyled);
        self.editor
            .set_highlight_data(self.style_buffer.clone(), self.styles.entries().to_vec());
        self.editor.redraw();
        Ok(())
    }
}

impl OverlayHost for FltkEditorHost {
    fn show_overlay(&mut self) {
        self.popup.show();
    }

    fn hide_overlay(&mut self) {
        self.popup.hide();
    }
}
