use super::font_size::FontSize;
use crate::app::infrastructure::error::AppError;

/// Sizes offered by the preset dropdown, in display order.
pub const DEFAULT_PRESETS: [u32; 6] = [12, 14, 16, 18, 20, 24];

/// Ordered, duplicate-free list of preset sizes. Fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetSizeList {
    sizes: Vec<FontSize>,
}

impl PresetSizeList {
    pub fn new(sizes: Vec<FontSize>) -> Result<Self, AppError> {
        if sizes.is_empty() {
            return Err(AppError::Config("preset list is empty".to_string()));
        }
        for (i, size) in sizes.iter().enumerate() {
            if sizes[..i].contains(size) {
                return Err(AppError::Config(format!("duplicate preset size {}", size)));
            }
        }
        Ok(Self { sizes })
    }

    /// Build from raw configuration values; zero is rejected.
    pub fn from_values(values: &[u32]) -> Result<Self, AppError> {
        let sizes = values
            .iter()
            .map(|&v| {
                FontSize::new(v).ok_or_else(|| AppError::Config(format!("invalid preset size {}", v)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sizes)
    }

    pub fn contains(&self, size: FontSize) -> bool {
        self.sizes.contains(&size)
    }

    /// Display index of `size`, if it is a preset.
    pub fn position(&self, size: FontSize) -> Option<usize> {
        self.sizes.iter().position(|&s| s == size)
    }

    pub fn get(&self, index: usize) -> Option<FontSize> {
        self.sizes.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = FontSize> + '_ {
        self.sizes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl Default for PresetSizeList {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_PRESETS.iter().filter_map(|&v| FontSize::new(v)).collect(),
        }
    }
}
