//! Menu defaults, loadable from TOML.

use crate::error::MenuResult;
use crate::host::Sound;
use crate::item::ItemStack;
use crate::shapes::validate_menu_size;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults applied to newly constructed menus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Slot count of a fresh menu; a positive multiple of 9 up to 54
    pub default_size: usize,
    pub default_title: String,
    /// Played when a menu is displayed
    pub sound: Option<Sound>,
    /// Placeholder rendered into locked slots
    pub wrapper: Option<ItemStack>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            default_size: 27,
            default_title: "Menu".to_string(),
            sound: None,
            wrapper: None,
        }
    }
}

impl MenuConfig {
    pub fn from_toml_str(raw: &str) -> MenuResult<Self> {
        let config: MenuConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> MenuResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        log::debug!("[MenuConfig] Loading {}", path.display());
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> MenuResult<()> {
        validate_menu_size(self.default_size)
    }
}
