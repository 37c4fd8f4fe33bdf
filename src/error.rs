//! Error types shared across the menu library

use thiserror::Error;

/// Result alias used throughout the crate
pub type MenuResult<T> = Result<T, MenuError>;

#[derive(Debug, Error)]
pub enum MenuError {
    /// Grid sizes must be a positive multiple of the row width
    #[error("Menu size must be a positive multiple of 9, got {size}")]
    InvalidSize { size: usize },

    #[error("Slot {slot} is outside of a {size}-slot menu")]
    SlotOutOfRange { slot: usize, size: usize },

    /// The consumer's setup hook failed while constructing a menu
    #[error("Menu setup failed: {0}")]
    Setup(#[source] anyhow::Error),

    /// A button's click handler returned an error
    #[error("Button in slot {slot} failed to handle click: {source}")]
    Handler {
        slot: usize,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid menu configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
