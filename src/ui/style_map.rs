use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;

use crate::app::domain::font_size::FontSize;
use crate::app::infrastructure::error::HostError;

/// FLTK style tables are indexed by 'A'..='Z'.
const MAX_STYLES: usize = 26;

/// Largest size the editor will render.
pub const MAX_FONT_SIZE: u32 = 512;

/// FLTK's `i32` size, or `None` above `MAX_FONT_SIZE`.
pub fn fltk_size(size: FontSize) -> Option<i32> {
    (size.get() <= MAX_FONT_SIZE).then(|| size.get() as i32)
}

/// Maps font sizes to FLTK style characters ('A', 'B', 'C', ...).
/// 'A' is the editor's base size; other sizes get a char on first use.
pub struct SizeStyleMap {
    size_to_char: HashMap<i32, char>,
    entries: Vec<StyleTableEntry>,
    font: Font,
}

impl SizeStyleMap {
    pub fn new(font: Font, base_size: i32) -> Self {
        let mut map = Self {
            size_to_char: HashMap::new(),
            entries: Vec::new(),
            font,
        };
        map.push(base_size);
        map
    }

    fn push(&mut self, size: i32) -> char {
        let ch = (b'A' + self.entries.len() as u8) as char;
        self.entries.push(StyleTableEntry {
            color: Color::Foreground,
            font: self.font,
            size,
        });
        self.size_to_char.insert(size, ch);
        ch
    }

    /// Style char for `size`, adding a table entry if needed.
    /// Fails for sizes above `MAX_FONT_SIZE` and once all 26 style slots
    /// are taken by other sizes.
    pub fn get_or_insert(&mut self, size: FontSize) -> Result<char, HostError> {
        let size = fltk_size(size).ok_or_else(|| {
            HostError::Unavailable(format!("font size {} exceeds {}", size, MAX_FONT_SIZE))
        })?;
        if let Some(&ch) = self.size_to_char.get(&size) {
            return Ok(ch);
        }
        if self.entries.len() >= MAX_STYLES {
            return Err(HostError::Unavailable("too many distinct font sizes".to_string()));
        }
        Ok(self.push(size))
    }

    /// Get the style table entries for FLTK's set_highlight_data.
    pub fn entries(&self) -> &[StyleTableEntry] {
        &self.entries
    }

    /// The char every newly typed character is styled with.
    pub fn base_char(&self) -> char {
        'A'
    }
}
