use std::sync::Arc;

use snippets::{
    command::CommandSender, entity::player::Player, error::SnippetsError, gui::Gui,
    logging::init_logger, plugin_log, server::Server,
};
use snippets_config::{LoadTomlConfiguration, SnippetsConfiguration};
use snippets_core::colorize;
use snippets_inventory::container_click::OUTSIDE_SLOT;
use snippets_item::{enchantment::Enchantment, ItemBuilder, Material};

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let config = match SnippetsConfiguration::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = init_logger(&config.logging) {
        eprintln!("Couldn't set up logging: {err}");
    }

    log::info!("Starting snippets {CARGO_PKG_VERSION}");
    let server = Server::new(config);
    if let Err(err) = run(&server) {
        err.log();
        std::process::exit(1);
    }
}

/// Opens the demo shop for a fake player and replays a few clicks.
fn run(server: &Server) -> Result<(), Box<dyn SnippetsError>> {
    let player = Arc::new(Player::new("Steve"));
    let shop = shop(server)?;
    shop.open(&player);
    plugin_log!(
        server,
        "Opened &b{}&7 for &e{}",
        shop.inventory().lock().title(),
        player.name
    );

    // (mode, button, raw slot) as a client would send them
    let clicks: [(u8, i8, i16); 6] = [
        (0, 0, 4),
        (0, 1, 0),
        (0, 0, 13),
        (0, 0, 27 + 9),
        (0, 0, OUTSIDE_SLOT),
        (0, 0, 22),
    ];
    for (mode, button, slot) in clicks {
        match server.click(&player, mode, button, slot) {
            Ok(event) => plugin_log!(
                server,
                "Slot &e{}&7: {:?} ({:?}), cancelled: {}",
                slot,
                event.action(),
                event.slot_type(),
                event.is_cancelled()
            ),
            Err(err) => err.log(),
        }
    }

    if player.open_view().is_some() {
        server.close_inventory(&player);
    }
    plugin_log!(server, "&aDone");
    Ok(())
}

fn shop(server: &Server) -> Result<Gui, Box<dyn SnippetsError>> {
    let gui = Gui::chest_builder(server, 3, Some("Shop"))?;

    let pane = ItemBuilder::builder(Material::GRAY_STAINED_GLASS_PANE)?
        .name("&r")
        .item();
    let info = ItemBuilder::builder(Material::BOOK)?
        .name("&eHow to buy")
        .lore(["&7Click an item to buy it.", "&7Prices are in emeralds."])
        .item();
    let sword = ItemBuilder::builder(Material::DIAMOND_SWORD)?
        .name("<#55FFFF>Sharp Sword")
        .lore(["&7Costs &a5 emeralds"])
        .add_enchant(Enchantment::SHARPNESS, 5)?
        .unbreakable()
        .item();
    let close = ItemBuilder::builder(Material::BARRIER)?
        .name("&cClose")
        .item();

    let events = server.events().clone();
    gui.fill(pane)
        .lock_slot(4, info)?
        .format_slot(13, sword, |data| {
            data.player()
                .send_message(&colorize("&aYou bought a &bSharp Sword&a!"));
            if let Some(item) = data.clicked_item() {
                log::info!("{} bought {}", data.player().name, item.material);
            }
        })?
        .format_slot(22, close, move |data| {
            data.player().close_inventory(&events);
        })?;
    Ok(gui)
}
