//! Menu window bound to a single viewer
//!
//! A [`Menu`] owns one host grid, the buttons placed on it and the set of
//! locked (placeholder-filled) slots. All operations are synchronous on
//! `&mut Menu`, so mutations of one grid are applied in call order.

pub mod dispatch;

pub use dispatch::ClickOutcome;

use crate::button::{same_button, ButtonRef};
use crate::config::MenuConfig;
use crate::error::{MenuError, MenuResult};
use crate::host::{GridHandle, SharedHost, Sound, ViewerId};
use crate::item::ItemStack;
use crate::shapes::{self, Shape, SizedShape, ROW_WIDTH};
use crate::text::{truncate_title, LegacyColorFormatter, TextFormatter};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// Populates a freshly constructed menu with buttons and locked slots
pub trait MenuSetup {
    fn setup(&mut self, menu: &mut Menu) -> anyhow::Result<()>;
}

impl<F> MenuSetup for F
where
    F: FnMut(&mut Menu) -> anyhow::Result<()>,
{
    fn setup(&mut self, menu: &mut Menu) -> anyhow::Result<()> {
        self(menu)
    }
}

/// Lifecycle of a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Built but never shown
    Constructed,
    Displayed,
    /// Closed by the menu or by the viewer
    Hidden,
}

pub struct Menu {
    host: SharedHost,
    formatter: Arc<dyn TextFormatter>,
    viewer: ViewerId,
    grid: GridHandle,
    size: usize,
    name: String,
    buttons: BTreeMap<usize, ButtonRef>,
    locked: BTreeSet<usize>,
    wrapper: Option<ItemStack>,
    sound: Option<Sound>,
    state: MenuState,
}

impl Menu {
    /// Create a menu with default size and title, then run `setup` on it
    pub fn new(host: SharedHost, viewer: ViewerId, setup: impl MenuSetup) -> MenuResult<Self> {
        Self::with_config(host, viewer, &MenuConfig::default(), setup)
    }

    pub fn with_config(
        host: SharedHost,
        viewer: ViewerId,
        config: &MenuConfig,
        mut setup: impl MenuSetup,
    ) -> MenuResult<Self> {
        config.validate()?;

        let formatter: Arc<dyn TextFormatter> = Arc::new(LegacyColorFormatter);
        let name = truncate_title(&formatter.format(&config.default_title));
        let grid = host.allocate_grid(config.default_size, &name);

        let mut menu = Self {
            host,
            formatter,
            viewer,
            grid,
            size: config.default_size,
            name,
            buttons: BTreeMap::new(),
            locked: BTreeSet::new(),
            wrapper: config.wrapper.clone(),
            sound: config.sound.clone(),
            state: MenuState::Constructed,
        };

        log::debug!("[Menu] Created {:?} for {:?}", menu.grid, menu.viewer);
        setup.setup(&mut menu).map_err(MenuError::Setup)?;
        Ok(menu)
    }

    pub fn viewer(&self) -> ViewerId {
        self.viewer
    }

    pub fn grid(&self) -> GridHandle {
        self.grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size / ROW_WIDTH
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn sound(&self) -> Option<&Sound> {
        self.sound.as_ref()
    }

    pub fn set_sound(&mut self, sound: Option<Sound>) {
        self.sound = sound;
    }

    pub fn wrapper(&self) -> Option<&ItemStack> {
        self.wrapper.as_ref()
    }

    /// Replace the placeholder item and re-render every locked slot
    pub fn set_wrapper(&mut self, wrapper: Option<ItemStack>) {
        self.wrapper = wrapper;
        for &slot in &self.locked {
            self.render_slot(slot);
        }
    }

    /// Use a different formatter for subsequent renames
    pub fn set_formatter(&mut self, formatter: Arc<dyn TextFormatter>) {
        self.formatter = formatter;
    }

    /// Whether the viewer's top window is this menu's grid
    pub fn is_viewer_viewing(&self) -> bool {
        self.host.top_open_grid(self.viewer) == Some(self.grid)
    }

    /// Open the menu for the viewer, playing the sound first.
    /// Does nothing if the viewer is already looking at it.
    pub fn display(&mut self) {
        if self.is_viewer_viewing() {
            log::trace!("[Menu] {:?} already open for {:?}", self.grid, self.viewer);
            return;
        }
        if let Some(sound) = &self.sound {
            self.host.play_sound(self.viewer, sound);
        }
        self.host.open_grid(self.viewer, self.grid);
        self.state = MenuState::Displayed;
    }

    pub fn close_menu(&mut self) {
        if self.is_viewer_viewing() {
            self.host.close_grid(self.viewer);
        }
        self.state = MenuState::Hidden;
    }

    /// Close the menu if it is showing and give the grid back to the host.
    /// Dropping the menu does the same.
    pub fn dispose(self) {
        drop(self);
    }

    /// Reallocate the grid with `size` slots.
    ///
    /// Buttons and locked slots that still fit are rendered into the new
    /// grid; the rest are dropped.
    pub fn resize(&mut self, size: usize) -> MenuResult<()> {
        shapes::validate_menu_size(size)?;

        let dropped_buttons = self.buttons.split_off(&size).len();
        let dropped_locked = self.locked.split_off(&size).len();
        if dropped_buttons + dropped_locked > 0 {
            log::debug!(
                "[Menu] Resize to {} dropped {} buttons and {} locked slots",
                size,
                dropped_buttons,
                dropped_locked
            );
        }

        self.size = size;
        self.reallocate();
        Ok(())
    }

    /// Format `name`, cut it to 32 characters and reallocate the grid under it
    pub fn rename(&mut self, name: &str) {
        self.name = truncate_title(&self.formatter.format(name));
        self.reallocate();
    }

    fn reallocate(&mut self) {
        let was_viewing = self.is_viewer_viewing();
        let old = self.grid;

        self.grid = self.host.allocate_grid(self.size, &self.name);
        self.render_contents();
        if was_viewing {
            self.host.open_grid(self.viewer, self.grid);
        }
        self.host.release_grid(old);
        log::debug!("[Menu] Reallocated {:?} -> {:?}", old, self.grid);
    }

    /// Render every locked slot and every button
    fn render_contents(&self) {
        let occupied: BTreeSet<usize> = self
            .locked
            .iter()
            .chain(self.buttons.keys())
            .copied()
            .collect();
        for slot in occupied {
            self.render_slot(slot);
        }
    }

    fn check_slot(&self, slot: usize) -> MenuResult<()> {
        if slot < self.size {
            Ok(())
        } else {
            Err(MenuError::SlotOutOfRange {
                slot,
                size: self.size,
            })
        }
    }

    /// Draw what `slot` shows: its button's item, else the wrapper if the
    /// slot is locked, else nothing
    fn render_slot(&self, slot: usize) {
        match self.buttons.get(&slot) {
            Some(button) => self.host.set_item(self.grid, slot, button.item().as_ref()),
            None if self.locked.contains(&slot) => {
                self.host.set_item(self.grid, slot, self.wrapper.as_ref())
            }
            None => self.host.set_item(self.grid, slot, None),
        }
    }

    /// Render `item` into `slot` without touching the button map
    pub fn set_item(&mut self, slot: usize, item: Option<&ItemStack>) -> MenuResult<()> {
        self.check_slot(slot)?;
        self.host.set_item(self.grid, slot, item);
        Ok(())
    }

    /// Empty the rendered item in `slot` without touching the button map
    pub fn clear_slot(&mut self, slot: usize) -> MenuResult<()> {
        self.set_item(slot, None)
    }

    /// Place `button` at `slot`, replacing any occupant.
    /// A button already placed elsewhere on this menu moves.
    pub fn set_button(&mut self, button: ButtonRef, slot: usize) -> MenuResult<()> {
        self.check_slot(slot)?;

        let previous = self
            .buttons
            .iter()
            .find(|&(&s, b)| s != slot && same_button(b, &button))
            .map(|(&s, _)| s);
        if let Some(previous) = previous {
            self.buttons.remove(&previous);
            self.render_slot(previous);
        }

        self.buttons.insert(slot, button);
        self.render_slot(slot);
        Ok(())
    }

    /// Place `button` in the lowest slot that has no button and is not locked.
    /// Returns the slot, or `None` if the menu is full.
    pub fn add_button(&mut self, button: ButtonRef) -> Option<usize> {
        let slot = (0..self.size)
            .find(|slot| !self.buttons.contains_key(slot) && !self.locked.contains(slot))?;
        self.set_button(button, slot).ok()?;
        Some(slot)
    }

    /// Forget the button at `slot`. The rendered item stays; use
    /// [`Menu::remove_button`] to clear it as well.
    pub fn del_button(&mut self, slot: usize) -> Option<ButtonRef> {
        self.buttons.remove(&slot)
    }

    /// Forget the button at `slot` and clear what it rendered
    pub fn remove_button(&mut self, slot: usize) -> Option<ButtonRef> {
        let removed = self.buttons.remove(&slot)?;
        self.render_slot(slot);
        Some(removed)
    }

    pub fn button(&self, slot: usize) -> Option<&ButtonRef> {
        self.buttons.get(&slot)
    }

    pub fn is_button(&self, slot: usize) -> bool {
        self.buttons.contains_key(&slot)
    }

    /// Buttons in ascending slot order
    pub fn buttons(&self) -> impl Iterator<Item = (usize, &ButtonRef)> {
        self.buttons.iter().map(|(&slot, button)| (slot, button))
    }

    pub fn locked_slots(&self) -> &BTreeSet<usize> {
        &self.locked
    }

    pub fn is_locked(&self, slot: usize) -> bool {
        self.locked.contains(&slot)
    }

    /// Replace the locked slot set.
    ///
    /// Newly locked slots without a button get the wrapper item; slots that
    /// were already locked are left alone. Slots leaving the set show their
    /// button, or nothing. Out-of-range slots are skipped.
    pub fn set_locked_slots(&mut self, slots: &[usize]) {
        let mut next = BTreeSet::new();
        for &slot in slots {
            if slot < self.size {
                next.insert(slot);
            } else {
                log::warn!("[Menu] Not locking slot {} of a {}-slot menu", slot, self.size);
            }
        }

        let changed: Vec<usize> = next.symmetric_difference(&self.locked).copied().collect();
        self.locked = next;
        for slot in changed {
            self.render_slot(slot);
        }
    }

    /// Lock the slots of `shape` at the menu's current size
    pub fn set_locked_shape(&mut self, shape: Shape) -> MenuResult<()> {
        self.set_locked_shape_sized(shape, self.size)
    }

    /// Lock the slots of `shape` as laid out for a `size`-slot grid
    pub fn set_locked_shape_sized(&mut self, shape: Shape, size: usize) -> MenuResult<()> {
        let sized = shapes::resolve(shape, size)?;
        self.set_locked_sized_shape(sized);
        Ok(())
    }

    /// Lock the slots of `sized`. An unsupported shape locks nothing.
    pub fn set_locked_sized_shape(&mut self, sized: SizedShape) {
        if !sized.is_supported() {
            log::debug!("[Menu] Unsupported shape for {} slots, unlocking all", self.size);
        }
        let slots: Vec<usize> = sized.usable_slots().collect();
        self.set_locked_slots(&slots);
    }

    /// Redraw everything and, if the viewer is looking, reopen the window
    /// so the client picks up the new contents.
    pub fn refresh_menu(&mut self) {
        self.host.clear_grid(self.grid);
        self.render_contents();
        if self.is_viewer_viewing() {
            self.host.close_grid(self.viewer);
            self.host.open_grid(self.viewer, self.grid);
        }
    }
}

impl Drop for Menu {
    fn drop(&mut self) {
        if self.is_viewer_viewing() {
            self.host.close_grid(self.viewer);
        }
        self.host.release_grid(self.grid);
        log::debug!("[Menu] Released {:?}", self.grid);
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("viewer", &self.viewer)
            .field("grid", &self.grid)
            .field("size", &self.size)
            .field("name", &self.name)
            .field("buttons", &self.buttons.keys().collect::<Vec<_>>())
            .field("locked", &self.locked)
            .field("state", &self.state)
            .finish()
    }
}
