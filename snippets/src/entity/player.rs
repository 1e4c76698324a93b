use std::sync::Arc;

use parking_lot::Mutex;
use snippets_core::text::legacy::strip_colors;
use snippets_inventory::{Inventory, InventoryHolder, InventoryView, SharedInventory};
use snippets_item::ItemStack;
use uuid::Uuid;

use crate::{
    command::CommandSender,
    plugin::events::{EventRegistry, InventoryCloseEvent},
};

pub struct Player {
    pub name: String,
    pub uuid: Uuid,
    inventory: SharedInventory,
    /// The stack held on the mouse cursor while a view is open.
    cursor: Mutex<Option<ItemStack>>,
    open_view: Mutex<Option<InventoryView>>,
}

impl Player {
    /// An offline-mode player, the uuid is derived from the name.
    pub fn new(name: &str) -> Self {
        let uuid = Uuid::new_v3(&Uuid::NAMESPACE_OID, format!("OfflinePlayer:{name}").as_bytes());
        Self {
            name: name.to_string(),
            uuid,
            inventory: Inventory::player().shared(),
            cursor: Mutex::new(None),
            open_view: Mutex::new(None),
        }
    }

    pub fn inventory(&self) -> &SharedInventory {
        &self.inventory
    }

    pub fn cursor(&self) -> Option<ItemStack> {
        self.cursor.lock().clone()
    }

    pub fn set_cursor(&self, item: Option<ItemStack>) {
        *self.cursor.lock() = item;
    }

    pub(crate) fn cursor_mut(&self) -> parking_lot::MutexGuard<'_, Option<ItemStack>> {
        self.cursor.lock()
    }

    pub fn open_view(&self) -> Option<InventoryView> {
        self.open_view.lock().clone()
    }

    /// Shows `view`, closing whatever was open before.
    pub fn open(self: &Arc<Self>, view: InventoryView, events: &EventRegistry) {
        let window = view.top().lock().window_type().map(|window| window.protocol_id());
        log::debug!("{} opened '{}' (window {:?})", self.name, view.title(), window);
        let previous = self.open_view.lock().replace(view);
        if let Some(previous) = previous {
            events.on_inventory_close(&mut InventoryCloseEvent::new(self.clone(), previous));
        }
    }

    /// Shows `inventory` on top of the player's own inventory.
    pub fn open_inventory(self: &Arc<Self>, inventory: SharedInventory, events: &EventRegistry) {
        self.open(InventoryView::new(inventory, self.inventory.clone()), events);
    }

    /// Shows the inventory of `holder`, keeping the holder alive until the
    /// view is closed.
    pub fn open_holder(self: &Arc<Self>, holder: Arc<dyn InventoryHolder>, events: &EventRegistry) {
        self.open(InventoryView::with_holder(holder, self.inventory.clone()), events);
    }

    /// Returns whether a view was open.
    pub fn close_inventory(self: &Arc<Self>, events: &EventRegistry) -> bool {
        let previous = self.open_view.lock().take();
        match previous {
            Some(view) => {
                events.on_inventory_close(&mut InventoryCloseEvent::new(self.clone(), view));
                true
            }
            None => false,
        }
    }
}

impl CommandSender for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn send_message(&self, message: &str) {
        log::info!(target: "snippets::chat", "{} <- {}", self.name, strip_colors(message));
    }
}

#[cfg(test)]
mod test {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use snippets_inventory::Inventory;

    use super::Player;
    use crate::plugin::events::{EventRegistry, InventoryCloseEvent};

    #[test]
    fn offline_uuid_is_stable() {
        assert_eq!(Player::new("Steve").uuid, Player::new("Steve").uuid);
        assert_ne!(Player::new("Steve").uuid, Player::new("Alex").uuid);
    }

    #[test]
    fn opening_replaces_and_closes() {
        let events = EventRegistry::new();
        let closed = Arc::new(AtomicUsize::new(0));
        let counter = closed.clone();
        events.register_on_inventory_close(move |_: &mut InventoryCloseEvent| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let player = Arc::new(Player::new("Steve"));
        assert!(!player.close_inventory(&events));

        player.open_inventory(Inventory::chest(1, None).unwrap().shared(), &events);
        assert_eq!(closed.load(Ordering::SeqCst), 0);
        player.open_inventory(Inventory::chest(2, None).unwrap().shared(), &events);
        assert_eq!(closed.load(Ordering::SeqCst), 1);
        assert_eq!(player.open_view().unwrap().top_size(), 18);

        assert!(player.close_inventory(&events));
        assert_eq!(closed.load(Ordering::SeqCst), 2);
        assert!(player.open_view().is_none());
    }
}
