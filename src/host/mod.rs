//! Host runtime seam
//!
//! The server runtime owns the actual grids, windows and sounds. Menus talk
//! to it only through [`MenuHost`], and the host's event glue passes clicks
//! and window closes into [`Menu::handle_click`](crate::menu::Menu::handle_click)
//! and [`Menu::handle_close`](crate::menu::Menu::handle_close).

pub mod memory;

pub use memory::MemoryHost;

use crate::button::ClickType;
use crate::item::ItemStack;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identifies one user who can look at a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewerId(pub u64);

/// Host-side handle to an allocated grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridHandle(pub u64);

/// Sound played to the viewer when a menu opens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sound {
    pub key: String,
    #[serde(default = "default_sound_level")]
    pub volume: f32,
    #[serde(default = "default_sound_level")]
    pub pitch: f32,
}

fn default_sound_level() -> f32 {
    1.0
}

impl Sound {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            volume: 1.0,
            pitch: 1.0,
        }
    }
}

/// Operations a menu needs from the server runtime
pub trait MenuHost: Send + Sync {
    /// Allocate an empty grid of `size` slots titled `title`
    fn allocate_grid(&self, size: usize, title: &str) -> GridHandle;

    /// Show `grid` to `viewer`, replacing whatever window they have open
    fn open_grid(&self, viewer: ViewerId, grid: GridHandle);

    /// Close whatever window `viewer` has open
    fn close_grid(&self, viewer: ViewerId);

    /// The grid `viewer` is currently looking at, if any
    fn top_open_grid(&self, viewer: ViewerId) -> Option<GridHandle>;

    fn play_sound(&self, viewer: ViewerId, sound: &Sound);

    /// Render `item` into `slot`, or empty the slot for `None`
    fn set_item(&self, grid: GridHandle, slot: usize, item: Option<&ItemStack>);

    /// Empty every slot of `grid`
    fn clear_grid(&self, grid: GridHandle);

    /// The menu no longer uses `grid`
    fn release_grid(&self, _grid: GridHandle) {}
}

pub type SharedHost = Arc<dyn MenuHost>;

/// A click on some grid, as delivered by the host
#[derive(Debug, Clone, PartialEq)]
pub struct ClickEvent {
    pub grid: GridHandle,
    /// Raw slot index; may be negative or past the grid for clicks outside it
    pub raw_slot: i32,
    pub viewer: ViewerId,
    pub click: ClickType,
    cancelled: bool,
}

impl ClickEvent {
    pub fn new(grid: GridHandle, raw_slot: i32, viewer: ViewerId, click: ClickType) -> Self {
        Self {
            grid,
            raw_slot,
            viewer,
            click,
            cancelled: false,
        }
    }

    /// Suppress the host's default item movement for this click
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// The viewer closed a grid on their side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseEvent {
    pub grid: GridHandle,
    pub viewer: ViewerId,
}
