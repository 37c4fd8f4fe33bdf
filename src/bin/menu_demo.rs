use hikari_gui::{
    ClickEvent, ClickType, FnButton, ItemBuilder, ItemStack, MemoryHost, Menu, MenuConfig, Shape,
    Sound, ViewerId,
};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,hikari_gui=debug"),
    )
    .init();

    let config = match std::env::args().nth(1) {
        Some(path) => MenuConfig::load(path)?,
        None => MenuConfig {
            default_size: 54,
            default_title: "&6&lGeneral Store".to_string(),
            sound: Some(Sound::new("block.chest.open")),
            wrapper: ItemBuilder::new("gray_stained_glass_pane").name(" ").build(),
        },
    };

    let host = Arc::new(MemoryHost::new());
    let viewer = ViewerId(1);
    let purchases = Arc::new(AtomicU32::new(0));
    let counter = purchases.clone();

    let setup = move |menu: &mut Menu| -> anyhow::Result<()> {
        menu.set_locked_shape(Shape::Bounds)?;

        for (material, price) in [("bread", 2), ("apple", 1), ("cooked_beef", 4)] {
            let counter = counter.clone();
            let item = ItemBuilder::new(material)
                .name(&format!("&a{}", material))
                .lore([format!("&7Price: &e{}", price)])
                .build();
            let button = FnButton::new(item, move |viewer, _, click| {
                let amount = if click.is_shift_click() { 16 } else { 1 };
                counter.fetch_add(amount, Ordering::Relaxed);
                log::info!("[menu_demo] {:?} bought {} {}", viewer, amount, material);
                Ok(())
            });
            let slot = menu
                .add_button(button.shared())
                .ok_or_else(|| anyhow::anyhow!("no free slot for {}", material))?;
            log::debug!("[menu_demo] Placed {} at slot {}", material, slot);
        }

        let close_item = ItemBuilder::new("barrier").name("&cClose").build();
        let close = FnButton::new(close_item, |_, menu, _| {
            menu.close_menu();
            Ok(())
        });
        menu.set_button(close.shared(), 49)?;
        Ok(())
    };
    let mut menu = Menu::with_config(host.clone(), viewer, &config, setup)?;

    menu.display();
    log::info!("[menu_demo] Opened '{}' ({} rows)", menu.name(), menu.rows());

    let clicks = [
        (10, ClickType::Left),
        (11, ClickType::ShiftLeft),
        (0, ClickType::Right),
        (49, ClickType::Left),
    ];
    for (slot, click) in clicks {
        let mut event = ClickEvent::new(menu.grid(), slot, viewer, click);
        let outcome = menu.handle_click(&mut event)?;
        log::info!("[menu_demo] Click on slot {} -> {:?}", slot, outcome);
    }

    println!("{}", render(&host, &menu));
    println!("Items bought: {}", purchases.load(Ordering::Relaxed));
    println!("Menu state: {:?}", menu.state());

    menu.dispose();
    Ok(())
}

/// Draw the grid as text, one character per slot
fn render(host: &MemoryHost, menu: &Menu) -> String {
    let slots = host.snapshot(menu.grid()).unwrap_or_default();
    slots
        .chunks(hikari_gui::shapes::ROW_WIDTH)
        .map(|row| row.iter().map(glyph).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn glyph(slot: &Option<ItemStack>) -> char {
    match slot {
        None => '.',
        Some(item) if item.material.key().ends_with("glass_pane") => '#',
        Some(item) => item
            .material
            .key()
            .rsplit(':')
            .next()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?'),
    }
}
