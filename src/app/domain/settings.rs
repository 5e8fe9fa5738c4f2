use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::font_size::FontSize;
use super::presets::{DEFAULT_PRESETS, PresetSizeList};
use crate::app::infrastructure::error::AppError;

/// Constructor-time configuration of the font size control.
/// Read-only: the control never writes it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizeConfig {
    #[serde(default = "default_presets")]
    pub presets: Vec<u32>,

    #[serde(default = "default_initial_size")]
    pub initial_size: u32,

    /// Name of the command exposed to the host editor
    #[serde(default = "default_command_name")]
    pub command_name: String,

    /// Name of the bus event that opens the preset dropdown
    #[serde(default = "default_show_event")]
    pub show_event: String,
}

fn default_presets() -> Vec<u32> {
    DEFAULT_PRESETS.to_vec()
}

fn default_initial_size() -> u32 {
    FontSize::DEFAULT.get()
}

fn default_command_name() -> String {
    "changeFontSize".to_string()
}

fn default_show_event() -> String {
    "showDropdown".to_string()
}

impl Default for FontSizeConfig {
    fn default() -> Self {
        Self {
            presets: default_presets(),
            initial_size: default_initial_size(),
            command_name: default_command_name(),
            show_event: default_show_event(),
        }
    }
}

impl FontSizeConfig {
    /// Load the config from its default location, or fall back to defaults.
    pub fn load() -> Self {
        Self::load_or_default(&Self::get_config_path())
    }

    /// Load from `path`; a missing or unreadable file gives the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::warn!("No font size config at {}. Using defaults.", path.display());
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Failed to load font size config {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Load from an explicit path. `.toml` files are parsed as TOML,
    /// everything else as JSON.
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config: Self = if is_toml {
            toml::from_str(&contents)?
        } else {
            serde_json::from_str(&contents)?
        };
        config.validate()?;
        log::debug!("Loaded font size config from {}", path.display());
        Ok(config)
    }

    /// Check every field without building anything.
    pub fn validate(&self) -> Result<(), AppError> {
        self.preset_list()?;
        self.initial_font_size()?;
        if self.command_name.trim().is_empty() {
            return Err(AppError::Config("command name is empty".to_string()));
        }
        if self.show_event.trim().is_empty() {
            return Err(AppError::Config("show event name is empty".to_string()));
        }
        Ok(())
    }

    pub fn preset_list(&self) -> Result<PresetSizeList, AppError> {
        PresetSizeList::from_values(&self.presets)
    }

    pub fn initial_font_size(&self) -> Result<FontSize, AppError> {
        FontSize::new(self.initial_size)
            .ok_or_else(|| AppError::Config(format!("invalid initial size {}", self.initial_size)))
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("ferrispad");
        path.push("font_size.json");
        path
    }
}
