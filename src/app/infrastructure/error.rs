use thiserror::Error;

use crate::app::domain::font_size::FontSize;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid font size input: {0:?}")]
    InvalidInput(String),

    #[error("Font size {0} is not a preset")]
    NotAPreset(FontSize),

    #[error("Host error: {0}")]
    Host(#[from] HostError),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    #[error("Event already registered: {0}")]
    DuplicateEvent(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Font size control is busy")]
    Busy,
}

/// Failures reported by the host editor's size-setting capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("no text is selected")]
    NoSelection,

    #[error("editor unavailable: {0}")]
    Unavailable(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
