//! Click and close event handling for menus.

use super::{Menu, MenuState};
use crate::error::{MenuError, MenuResult};
use crate::host::{ClickEvent, CloseEvent};

/// What [`Menu::handle_click`] did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The event was for another grid and was left untouched
    Ignored,
    /// Default handling was cancelled but no button sits at the slot
    Absorbed,
    /// The button at `slot` handled the click
    Dispatched { slot: usize },
}

impl Menu {
    /// Route a click delivered by the host.
    ///
    /// Any click on this menu's grid has its default handling cancelled.
    /// If a button is mapped at the clicked slot, it is invoked with the
    /// clicking viewer, this menu and the click type; a handler error is
    /// returned to the caller.
    pub fn handle_click(&mut self, event: &mut ClickEvent) -> MenuResult<ClickOutcome> {
        if event.grid != self.grid {
            return Ok(ClickOutcome::Ignored);
        }
        event.cancel();

        let slot = match usize::try_from(event.raw_slot) {
            Ok(slot) if slot < self.size => slot,
            _ => return Ok(ClickOutcome::Absorbed),
        };
        let Some(button) = self.buttons.get(&slot).cloned() else {
            return Ok(ClickOutcome::Absorbed);
        };

        log::trace!(
            "[Menu] {:?} {:?}-clicked slot {} of {:?}",
            event.viewer,
            event.click,
            slot,
            self.grid
        );
        button
            .on_click(event.viewer, self, event.click)
            .map_err(|source| MenuError::Handler { slot, source })?;
        Ok(ClickOutcome::Dispatched { slot })
    }

    /// The host reports that a viewer closed a window
    pub fn handle_close(&mut self, event: &CloseEvent) {
        if event.grid == self.grid && event.viewer == self.viewer {
            self.state = MenuState::Hidden;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{ClickType, FnButton};
    use crate::host::{MemoryHost, MenuHost, ViewerId};
    use crate::item::ItemStack;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn menu_with_recorder() -> (Arc<MemoryHost>, Menu, Arc<Mutex<Vec<(ViewerId, ClickType)>>>) {
        let host = Arc::new(MemoryHost::new());
        let clicks = Arc::new(Mutex::new(Vec::new()));
        let recorded = clicks.clone();

        let setup = move |menu: &mut Menu| -> anyhow::Result<()> {
            let recorded = recorded.clone();
            let button = FnButton::new(Some(ItemStack::single("lever")), move |viewer, _, click| {
                recorded.lock().push((viewer, click));
                Ok(())
            });
            menu.set_button(button.shared(), 4)?;
            Ok(())
        };
        let menu = Menu::new(host.clone(), ViewerId(1), setup).expect("setup succeeds");

        (host, menu, clicks)
    }

    #[test]
    fn test_click_dispatches_to_button() {
        let (_host, mut menu, clicks) = menu_with_recorder();
        let mut event = ClickEvent::new(menu.grid(), 4, ViewerId(9), ClickType::ShiftRight);

        let outcome = menu.handle_click(&mut event).unwrap();

        assert_eq!(outcome, ClickOutcome::Dispatched { slot: 4 });
        assert!(event.is_cancelled());
        assert_eq!(*clicks.lock(), vec![(ViewerId(9), ClickType::ShiftRight)]);
    }

    #[test]
    fn test_click_on_empty_or_outside_slot_is_absorbed() {
        let (_host, mut menu, clicks) = menu_with_recorder();

        for raw_slot in [0, -999, 27, 60] {
            let mut event = ClickEvent::new(menu.grid(), raw_slot, ViewerId(1), ClickType::Left);
            assert_eq!(menu.handle_click(&mut event).unwrap(), ClickOutcome::Absorbed);
            assert!(event.is_cancelled());
        }
        assert!(clicks.lock().is_empty());
    }

    #[test]
    fn test_click_on_other_grid_is_ignored() {
        let (host, mut menu, clicks) = menu_with_recorder();
        let other = host.allocate_grid(27, "other");

        let mut event = ClickEvent::new(other, 4, ViewerId(1), ClickType::Left);
        assert_eq!(menu.handle_click(&mut event).unwrap(), ClickOutcome::Ignored);
        assert!(!event.is_cancelled());
        assert!(clicks.lock().is_empty());
    }

    #[test]
    fn test_handler_error_propagates() {
        let host = Arc::new(MemoryHost::new());
        let mut menu = Menu::new(host, ViewerId(1), |menu: &mut Menu| -> anyhow::Result<()> {
            let broken = FnButton::new(None, |_, _, _| anyhow::bail!("out of stock"));
            menu.set_button(broken.shared(), 0)?;
            Ok(())
        })
        .unwrap();

        let mut event = ClickEvent::new(menu.grid(), 0, ViewerId(1), ClickType::Left);
        let err = menu.handle_click(&mut event).unwrap_err();

        assert!(matches!(err, MenuError::Handler { slot: 0, .. }));
        assert!(event.is_cancelled());
    }

    #[test]
    fn test_handler_can_mutate_menu() {
        let host = Arc::new(MemoryHost::new());
        let setup = |menu: &mut Menu| -> anyhow::Result<()> {
            let closer = FnButton::new(Some(ItemStack::single("barrier")), |_, menu, _| {
                menu.rename("&cClosed");
                menu.close_menu();
                Ok(())
            });
            menu.set_button(closer.shared(), 8)?;
            Ok(())
        };
        let mut menu = Menu::new(host.clone(), ViewerId(1), setup).unwrap();
        menu.display();

        let mut event = ClickEvent::new(menu.grid(), 8, ViewerId(1), ClickType::Left);
        menu.handle_click(&mut event).unwrap();

        assert_eq!(menu.name(), "§cClosed");
        assert!(!menu.is_viewer_viewing());
        assert_eq!(menu.state(), MenuState::Hidden);
        // The button survives the reallocation
        assert_eq!(host.item(menu.grid(), 8), Some(ItemStack::single("barrier")));
    }

    #[test]
    fn test_close_event_hides_menu() {
        let (host, mut menu, _) = menu_with_recorder();
        menu.display();

        host.close_grid(menu.viewer());
        menu.handle_close(&CloseEvent {
            grid: menu.grid(),
            viewer: menu.viewer(),
        });
        assert_eq!(menu.state(), MenuState::Hidden);
    }
}
