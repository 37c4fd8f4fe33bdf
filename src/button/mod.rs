//! Clickable menu buttons

pub mod click_type;

pub use click_type::ClickType;

use crate::host::ViewerId;
use crate::item::ItemStack;
use crate::menu::Menu;
use std::sync::Arc;

/// A slot occupant: an item to render plus a click handler
pub trait Button: Send + Sync {
    /// Item rendered into the button's slot. `None` renders an empty slot.
    fn item(&self) -> Option<ItemStack>;

    /// Called when `viewer` clicks the button's slot
    fn on_click(&self, viewer: ViewerId, menu: &mut Menu, click: ClickType) -> anyhow::Result<()>;
}

/// Shared button reference as stored by menus
pub type ButtonRef = Arc<dyn Button>;

/// Whether two references point at the same button instance
pub fn same_button(a: &ButtonRef, b: &ButtonRef) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

type ClickHandler = dyn Fn(ViewerId, &mut Menu, ClickType) -> anyhow::Result<()> + Send + Sync;

/// Button backed by a closure
pub struct FnButton {
    item: Option<ItemStack>,
    handler: Box<ClickHandler>,
}

impl FnButton {
    pub fn new<F>(item: Option<ItemStack>, handler: F) -> Self
    where
        F: Fn(ViewerId, &mut Menu, ClickType) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            item,
            handler: Box::new(handler),
        }
    }

    /// A button whose clicks do nothing
    pub fn display(item: Option<ItemStack>) -> Self {
        Self::new(item, |_, _, _| Ok(()))
    }

    pub fn shared(self) -> ButtonRef {
        Arc::new(self)
    }
}

impl Button for FnButton {
    fn item(&self) -> Option<ItemStack> {
        self.item.clone()
    }

    fn on_click(&self, viewer: ViewerId, menu: &mut Menu, click: ClickType) -> anyhow::Result<()> {
        (self.handler)(viewer, menu, click)
    }
}

impl std::fmt::Debug for FnButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnButton").field("item", &self.item).finish_non_exhaustive()
    }
}
