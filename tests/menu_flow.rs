//! End-to-end menu behaviour against the in-memory host.

use hikari_gui::button::same_button;
use hikari_gui::{
    Button, ButtonRef, ClickEvent, ClickOutcome, ClickType, ItemBuilder, ItemStack, MemoryHost,
    Menu, MenuConfig, MenuError, MenuState, ViewerId,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Button that records every click it receives
struct CountingButton {
    item: ItemStack,
    clicks: Mutex<Vec<ClickType>>,
}

impl CountingButton {
    fn new(material: &str) -> Arc<Self> {
        Arc::new(Self {
            item: ItemStack::single(material),
            clicks: Mutex::new(Vec::new()),
        })
    }
}

impl Button for CountingButton {
    fn item(&self) -> Option<ItemStack> {
        Some(self.item.clone())
    }

    fn on_click(
        &self,
        _viewer: ViewerId,
        _menu: &mut Menu,
        click: ClickType,
    ) -> anyhow::Result<()> {
        self.clicks.lock().push(click);
        Ok(())
    }
}

/// A shop layout built the way a plugin would: a struct implementing the setup hook
struct ShopLayout {
    buttons: Vec<Arc<CountingButton>>,
}

impl hikari_gui::MenuSetup for ShopLayout {
    fn setup(&mut self, menu: &mut Menu) -> anyhow::Result<()> {
        for button in &self.buttons {
            let shared: ButtonRef = button.clone();
            menu.add_button(shared);
        }
        menu.set_wrapper(ItemBuilder::new("black_stained_glass_pane").name(" ").build());
        menu.set_locked_slots(&[4]);
        Ok(())
    }
}

#[test]
fn test_shop_scenario() {
    let host = Arc::new(MemoryHost::new());
    let viewer = ViewerId(42);
    let buttons = vec![
        CountingButton::new("bread"),
        CountingButton::new("apple"),
        CountingButton::new("carrot"),
    ];
    let layout = ShopLayout {
        buttons: buttons.clone(),
    };

    let mut menu = Menu::new(host.clone(), viewer, layout).expect("setup succeeds");
    assert_eq!(menu.size(), 27);

    // Buttons land in 0, 1, 2
    for (slot, button) in buttons.iter().enumerate() {
        let expected: ButtonRef = button.clone();
        assert!(same_button(menu.button(slot).expect("button placed"), &expected));
        assert_eq!(host.item(menu.grid(), slot), Some(button.item.clone()));
    }

    // Slot 4 shows the wrapper and is skipped by add_button
    let wrapper = menu.wrapper().cloned().expect("wrapper set");
    assert_eq!(host.item(menu.grid(), 4), Some(wrapper));
    assert_eq!(menu.add_button(CountingButton::new("egg")), Some(3));
    assert_eq!(menu.add_button(CountingButton::new("milk_bucket")), Some(5));

    menu.display();
    assert_eq!(menu.state(), MenuState::Displayed);

    let mut click = ClickEvent::new(menu.grid(), 1, viewer, ClickType::Right);
    assert_eq!(
        menu.handle_click(&mut click).unwrap(),
        ClickOutcome::Dispatched { slot: 1 }
    );
    assert!(click.is_cancelled());
    assert_eq!(*buttons[1].clicks.lock(), vec![ClickType::Right]);
    assert!(buttons[0].clicks.lock().is_empty());

    let mut locked_click = ClickEvent::new(menu.grid(), 4, viewer, ClickType::Left);
    assert_eq!(
        menu.handle_click(&mut locked_click).unwrap(),
        ClickOutcome::Absorbed
    );
    assert!(locked_click.is_cancelled());
    for button in &buttons {
        assert!(button.clicks.lock().len() <= 1);
    }
}

#[test]
fn test_config_drives_new_menus() {
    let host = Arc::new(MemoryHost::new());
    let config = MenuConfig::from_toml_str(
        r#"
        default_size = 9
        default_title = "&bTiny &lMenu"

        [sound]
        key = "ui.button.click"
        "#,
    )
    .unwrap();

    let noop = |_: &mut Menu| -> anyhow::Result<()> { Ok(()) };
    let mut menu = Menu::with_config(host.clone(), ViewerId(1), &config, noop).unwrap();

    assert_eq!(menu.rows(), 1);
    assert_eq!(menu.name(), "§bTiny §lMenu");
    assert_eq!(host.title(menu.grid()).as_deref(), Some("§bTiny §lMenu"));

    menu.display();
    let sounds = host.sounds_played(ViewerId(1));
    assert_eq!(sounds.len(), 1);
    assert_eq!(sounds[0].key, "ui.button.click");
}

#[test]
fn test_invalid_config_size_fails_construction() {
    let host = Arc::new(MemoryHost::new());
    let config = MenuConfig {
        default_size: 10,
        ..MenuConfig::default()
    };

    let noop = |_: &mut Menu| -> anyhow::Result<()> { Ok(()) };
    let err = Menu::with_config(host.clone(), ViewerId(1), &config, noop).unwrap_err();

    assert!(matches!(err, MenuError::InvalidSize { size: 10 }));
    assert_eq!(host.live_grids(), 0);
}

#[test]
fn test_menus_for_different_viewers_are_independent() {
    let host = Arc::new(MemoryHost::new());
    let noop = |_: &mut Menu| -> anyhow::Result<()> { Ok(()) };
    let mut first = Menu::new(host.clone(), ViewerId(1), noop).unwrap();
    let mut second = Menu::new(host.clone(), ViewerId(2), noop).unwrap();
    let button = CountingButton::new("stone");
    first.set_button(button.clone(), 0).unwrap();

    first.display();
    second.display();
    assert!(first.is_viewer_viewing());
    assert!(second.is_viewer_viewing());

    // A click on the first grid means nothing to the second menu
    let mut event = ClickEvent::new(first.grid(), 0, ViewerId(1), ClickType::Left);
    assert_eq!(second.handle_click(&mut event).unwrap(), ClickOutcome::Ignored);
    assert_eq!(
        first.handle_click(&mut event).unwrap(),
        ClickOutcome::Dispatched { slot: 0 }
    );
    assert_eq!(button.clicks.lock().len(), 1);
}
