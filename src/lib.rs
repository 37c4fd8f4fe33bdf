//! Inventory-style menus for game server plugins.
//!
//! A [`Menu`] is a grid of slots shown to one viewer. Buttons placed on it
//! receive the viewer's clicks; locked slots show a placeholder item. The
//! [`shapes`] catalog provides ready-made slot patterns (borders, rows,
//! columns, circles) for every grid height from one to six rows.

pub mod button;
pub mod config;
pub mod error;
pub mod host;
pub mod item;
pub mod menu;
pub mod shapes;
pub mod text;

pub use button::{Button, ButtonRef, ClickType, FnButton};
pub use config::MenuConfig;
pub use error::{MenuError, MenuResult};
pub use host::{
    ClickEvent, CloseEvent, GridHandle, MemoryHost, MenuHost, SharedHost, Sound, ViewerId,
};
pub use item::{ItemBuilder, ItemStack, Material};
pub use menu::{ClickOutcome, Menu, MenuSetup, MenuState};
pub use shapes::{resolve, Shape, SizedShape};
pub use text::{LegacyColorFormatter, TextFormatter};
