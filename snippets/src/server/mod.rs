use std::sync::Arc;

use snippets_config::SnippetsConfiguration;
use snippets_inventory::{
    action::apply_action, container_click::Click, InventoryAction, InventoryError,
    InventoryHolder, SharedInventory,
};

use crate::{
    command::ConsoleSender,
    entity::player::Player,
    plugin::events::{EventRegistry, InventoryClickEvent},
};

/// The host the helpers run against: configuration, console and listeners.
pub struct Server {
    config: SnippetsConfiguration,
    console: ConsoleSender,
    events: Arc<EventRegistry>,
}

impl Server {
    pub fn new(config: SnippetsConfiguration) -> Self {
        let console = ConsoleSender::new(config.logging.color);
        Self {
            config,
            console,
            events: Arc::new(EventRegistry::new()),
        }
    }

    pub fn config(&self) -> &SnippetsConfiguration {
        &self.config
    }

    pub fn console(&self) -> &ConsoleSender {
        &self.console
    }

    pub fn events(&self) -> &Arc<EventRegistry> {
        &self.events
    }

    pub fn open_inventory(&self, player: &Arc<Player>, inventory: SharedInventory) {
        player.open_inventory(inventory, &self.events);
    }

    pub fn open_holder(&self, player: &Arc<Player>, holder: Arc<dyn InventoryHolder>) {
        player.open_holder(holder, &self.events);
    }

    pub fn close_inventory(&self, player: &Arc<Player>) -> bool {
        player.close_inventory(&self.events)
    }

    /// Handles a container click the way a client would send it.
    ///
    /// The click event is dispatched before anything moves. When no listener
    /// cancels it the resolved action is applied to the clicked slot and the
    /// player's cursor.
    pub fn click(
        &self,
        player: &Arc<Player>,
        mode: u8,
        button: i8,
        raw_slot: i16,
    ) -> Result<InventoryClickEvent, InventoryError> {
        let click = Click::new(mode, button, raw_slot)?;
        let view = player
            .open_view()
            .ok_or_else(|| InventoryError::ClosedContainerInteract(player.name.clone()))?;

        let raw_slot = click.slot.index();
        let (clicked_inventory, slot) = match raw_slot {
            Some(raw_slot) => {
                let (inventory, slot) =
                    view.convert_slot(raw_slot)
                        .ok_or_else(|| InventoryError::InvalidSlot {
                            slot: raw_slot,
                            size: view.count_slots(),
                        })?;
                (Some(inventory.clone()), Some(slot))
            }
            None => (None, None),
        };

        let current_item = match (&clicked_inventory, slot) {
            (Some(inventory), Some(slot)) => inventory.lock().item(slot)?.cloned(),
            _ => None,
        };
        let action =
            InventoryAction::resolve(&click, current_item.as_ref(), player.cursor().as_ref());
        let slot_type = view.slot_type(raw_slot);

        let mut event = InventoryClickEvent::new(
            player.clone(),
            view,
            clicked_inventory,
            raw_slot,
            slot,
            slot_type,
            current_item,
            click,
            action,
        );
        self.events.on_inventory_click(&mut event);

        if event.is_cancelled() {
            log::debug!("{} clicked {:?}, cancelled", player.name, raw_slot);
            return Ok(event);
        }

        let mut cursor = player.cursor_mut();
        let changed = match (event.clicked_inventory(), event.slot()) {
            (Some(inventory), Some(slot)) => {
                let mut inventory = inventory.lock();
                apply_action(action, inventory.slot_mut(slot)?, &mut cursor)
            }
            _ => apply_action(action, &mut None, &mut cursor),
        };
        log::debug!(
            "{} clicked {:?}: {:?} (changed: {})",
            player.name,
            raw_slot,
            action,
            changed
        );
        Ok(event)
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use snippets_config::SnippetsConfiguration;
    use snippets_inventory::{
        container_click::OUTSIDE_SLOT, Inventory, InventoryAction, InventoryError, SlotType,
    };
    use snippets_item::{ItemStack, Material};

    use super::Server;
    use crate::{entity::player::Player, plugin::events::InventoryClickEvent};

    fn setup() -> (Server, Arc<Player>) {
        let server = Server::new(SnippetsConfiguration::default());
        let player = Arc::new(Player::new("Steve"));
        let chest = Inventory::chest(1, None).unwrap().shared();
        chest
            .lock()
            .set_item(0, Some(ItemStack::new(Material::DIAMOND, 5)))
            .unwrap();
        server.open_inventory(&player, chest);
        (server, player)
    }

    #[test]
    fn click_without_open_view() {
        let server = Server::new(SnippetsConfiguration::default());
        let player = Arc::new(Player::new("Steve"));
        assert!(matches!(
            server.click(&player, 0, 0, 0),
            Err(InventoryError::ClosedContainerInteract(_))
        ));
    }

    #[test]
    fn pickup_and_place() {
        let (server, player) = setup();
        let event = server.click(&player, 0, 0, 0).unwrap();
        assert_eq!(event.action(), InventoryAction::PickupAll);
        assert_eq!(event.slot_type(), SlotType::Container);
        assert_eq!(player.cursor(), Some(ItemStack::new(Material::DIAMOND, 5)));

        // first main storage slot of the player
        let event = server.click(&player, 0, 0, 9).unwrap();
        assert_eq!(event.action(), InventoryAction::PlaceAll);
        assert_eq!(event.slot(), Some(9));
        assert_eq!(player.cursor(), None);
        assert_eq!(
            player.inventory().lock().item(9).unwrap(),
            Some(&ItemStack::new(Material::DIAMOND, 5))
        );
    }

    #[test]
    fn oversized_cursor_fills_the_slot() {
        let (server, player) = setup();
        let view = player.open_view().unwrap();
        view.top()
            .lock()
            .set_item(1, Some(ItemStack::new(Material::STONE, 10)))
            .unwrap();
        player.set_cursor(Some(ItemStack::new(Material::STONE, u32::MAX)));

        let event = server.click(&player, 0, 0, 1).unwrap();
        assert_eq!(event.action(), InventoryAction::PlaceSome);
        assert_eq!(view.top().lock().item(1).unwrap().unwrap().amount, 64);
        assert_eq!(player.cursor().unwrap().amount, u32::MAX - 54);
    }

    #[test]
    fn cancelled_clicks_change_nothing() {
        let (server, player) = setup();
        server
            .events()
            .register_on_inventory_click(|event: &mut InventoryClickEvent| {
                event.set_cancelled(true)
            });
        let event = server.click(&player, 0, 0, 0).unwrap();
        assert!(event.is_cancelled());
        assert_eq!(player.cursor(), None);
        let view = player.open_view().unwrap();
        assert!(view.top().lock().item(0).unwrap().is_some());
    }

    #[test]
    fn outside_and_invalid_slots() {
        let (server, player) = setup();
        player.set_cursor(Some(ItemStack::new(Material::STONE, 3)));
        let event = server.click(&player, 0, 1, OUTSIDE_SLOT).unwrap();
        assert_eq!(event.action(), InventoryAction::DropOneCursor);
        assert_eq!(event.slot_type(), SlotType::Outside);
        assert!(event.clicked_inventory().is_none());
        assert_eq!(player.cursor().unwrap().amount, 2);

        assert!(matches!(
            server.click(&player, 0, 0, 9 + 36),
            Err(InventoryError::InvalidSlot { slot: 45, size: 45 })
        ));
        assert!(matches!(
            server.click(&player, 7, 0, 0),
            Err(InventoryError::InvalidPacket(_))
        ));
    }
}
