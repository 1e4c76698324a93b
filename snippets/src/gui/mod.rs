//! Chest style menus whose slots run callbacks when clicked.
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use snippets::{entity::player::Player, gui::Gui, server::Server};
//! # use snippets_config::SnippetsConfiguration;
//! # use snippets_item::{ItemStack, Material};
//! let server = Server::new(SnippetsConfiguration::default());
//! let player = Arc::new(Player::new("Steve"));
//! Gui::chest_builder(&server, 3, Some("Shop"))?
//!     .fill(ItemStack::new(Material::GRAY_STAINED_GLASS_PANE, 1))
//!     .format_slot(13, ItemStack::new(Material::DIAMOND, 1), |data| {
//!         log::info!("{} bought a diamond", data.player().name);
//!     })?
//!     .open(&player);
//! # Ok::<(), snippets_inventory::InventoryError>(())
//! ```

use std::{
    collections::HashMap,
    sync::{Arc, Weak},
};

use parking_lot::Mutex;
use snippets_inventory::{
    Inventory, InventoryAction, InventoryError, InventoryHolder, InventoryType, SharedInventory,
    SlotType,
};
use snippets_item::ItemStack;

use crate::{
    entity::player::Player,
    plugin::events::{EventRegistry, InventoryClickEvent, InventoryClickListener},
    server::Server,
};

type Callback = Arc<dyn Fn(&InventoryData<'_>) + Send + Sync>;

struct GuiInner {
    inventory: SharedInventory,
    buttons: Mutex<HashMap<usize, Callback>>,
    events: Arc<EventRegistry>,
}

impl InventoryHolder for GuiInner {
    fn inventory(&self) -> &SharedInventory {
        &self.inventory
    }
}

impl GuiInner {
    fn handle_click(self: &Arc<Self>, event: &mut InventoryClickEvent) {
        let Some(clicked) = event.clicked_inventory() else {
            return;
        };
        if !Arc::ptr_eq(clicked, &self.inventory) {
            return;
        }
        event.set_cancelled(true);

        let Some(slot) = event.slot() else {
            return;
        };
        // cloned out so the callback may reformat this gui
        let callback = self.buttons.lock().get(&slot).cloned();
        if let Some(callback) = callback {
            let gui = Gui {
                inner: self.clone(),
            };
            callback(&InventoryData {
                event: &*event,
                gui: &gui,
                slot,
            });
        }
    }
}

/// Listens for clicks on behalf of a [`Gui`] without keeping it alive.
struct GuiListener(Weak<GuiInner>);

impl InventoryClickListener for GuiListener {
    fn on_inventory_click(&self, event: &mut InventoryClickEvent) {
        if let Some(gui) = self.0.upgrade() {
            gui.handle_click(event);
        }
    }

    fn is_expired(&self) -> bool {
        self.0.strong_count() == 0
    }
}

/// A menu backed by one inventory.
///
/// Every click on the menu's own inventory is cancelled. If the clicked slot
/// was formatted with a callback, the callback runs afterwards. Clicks in the
/// player's inventory below are left alone.
///
/// Handles are cheap to clone. The click listener goes away once every handle
/// is dropped and nobody has the menu open anymore. Callbacks reach their menu
/// through [`InventoryData::gui`]; a callback capturing a `Gui` of its own
/// keeps that menu alive for good.
#[derive(Clone)]
pub struct Gui {
    inner: Arc<GuiInner>,
}

impl Gui {
    /// A chest menu with `rows` rows, between 1 and 6.
    pub fn chest_builder(
        server: &Server,
        rows: u8,
        title: Option<&str>,
    ) -> Result<Self, InventoryError> {
        Ok(Self::new(server, Inventory::chest(rows, title)?))
    }

    /// A menu using any creatable inventory type with its default size.
    pub fn custom_builder(
        server: &Server,
        kind: InventoryType,
        title: Option<&str>,
    ) -> Result<Self, InventoryError> {
        Ok(Self::new(server, Inventory::new(kind, title)?))
    }

    fn new(server: &Server, inventory: Inventory) -> Self {
        let inner = Arc::new(GuiInner {
            inventory: inventory.shared(),
            buttons: Mutex::new(HashMap::new()),
            events: server.events().clone(),
        });
        server
            .events()
            .register_on_inventory_click(GuiListener(Arc::downgrade(&inner)));
        Self { inner }
    }

    /// Puts `item` in `slot` and runs `callback` whenever it is clicked.
    pub fn format_slot<F>(
        &self,
        slot: usize,
        item: ItemStack,
        callback: F,
    ) -> Result<&Self, InventoryError>
    where
        F: Fn(&InventoryData<'_>) + Send + Sync + 'static,
    {
        self.format_slots(&[slot], item, callback)
    }

    /// Like [`Self::format_slot`] for several slots sharing one callback.
    /// Nothing changes if any slot is out of range.
    pub fn format_slots<F>(
        &self,
        slots: &[usize],
        item: ItemStack,
        callback: F,
    ) -> Result<&Self, InventoryError>
    where
        F: Fn(&InventoryData<'_>) + Send + Sync + 'static,
    {
        let mut inventory = self.inner.inventory.lock();
        for &slot in slots {
            inventory.check_slot(slot)?;
        }
        let callback: Callback = Arc::new(callback);
        let mut buttons = self.inner.buttons.lock();
        for &slot in slots {
            inventory.set_item(slot, Some(item.clone()))?;
            buttons.insert(slot, callback.clone());
        }
        Ok(self)
    }

    /// Puts `item` in `slot` without any callback. Clicking it does nothing.
    pub fn lock_slot(&self, slot: usize, item: ItemStack) -> Result<&Self, InventoryError> {
        self.inner.inventory.lock().set_item(slot, Some(item))?;
        self.inner.buttons.lock().remove(&slot);
        Ok(self)
    }

    /// Fills every slot with `item`, each running `callback` when clicked.
    pub fn fill_with<F>(&self, item: ItemStack, callback: F) -> &Self
    where
        F: Fn(&InventoryData<'_>) + Send + Sync + 'static,
    {
        let callback: Callback = Arc::new(callback);
        let mut inventory = self.inner.inventory.lock();
        inventory.fill(&item);
        let mut buttons = self.inner.buttons.lock();
        for slot in 0..inventory.size() {
            buttons.insert(slot, callback.clone());
        }
        self
    }

    /// Fills every slot with `item` and removes all callbacks, unlike
    /// [`Self::fill_with`] which puts one callback on every slot.
    pub fn fill(&self, item: ItemStack) -> &Self {
        self.inner.inventory.lock().fill(&item);
        self.inner.buttons.lock().clear();
        self
    }

    pub fn inventory(&self) -> &SharedInventory {
        &self.inner.inventory
    }

    pub fn has_button(&self, slot: usize) -> bool {
        self.inner.buttons.lock().contains_key(&slot)
    }

    /// Shows this menu to `player`, replacing whatever they had open.
    pub fn open(&self, player: &Arc<Player>) -> &Self {
        player.open_holder(self.inner.clone(), &self.inner.events);
        self
    }
}

/// What a slot callback gets to see about the click.
pub struct InventoryData<'a> {
    event: &'a InventoryClickEvent,
    gui: &'a Gui,
    slot: usize,
}

impl InventoryData<'_> {
    pub fn event(&self) -> &InventoryClickEvent {
        self.event
    }

    /// The menu that was clicked.
    pub fn gui(&self) -> &Gui {
        self.gui
    }

    pub fn player(&self) -> &Arc<Player> {
        self.event.who_clicked()
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    /// The item in the slot before the click.
    pub fn clicked_item(&self) -> Option<&ItemStack> {
        self.event.current_item()
    }

    pub fn action(&self) -> InventoryAction {
        self.event.action()
    }

    pub fn slot_type(&self) -> SlotType {
        self.event.slot_type()
    }
}

#[cfg(test)]
mod test {
    use snippets_config::SnippetsConfiguration;
    use snippets_inventory::{InventoryError, InventoryType};
    use snippets_item::{ItemStack, Material};

    use super::Gui;
    use crate::server::Server;

    fn server() -> Server {
        Server::new(SnippetsConfiguration::default())
    }

    #[test]
    fn builders_check_their_input() {
        let server = server();
        assert!(matches!(
            Gui::chest_builder(&server, 0, None),
            Err(InventoryError::InvalidRows(0))
        ));
        assert!(Gui::chest_builder(&server, 7, None).is_err());
        assert!(Gui::custom_builder(&server, InventoryType::Player, None).is_err());

        let hopper = Gui::custom_builder(&server, InventoryType::Hopper, Some("Sorter")).unwrap();
        assert_eq!(hopper.inventory().lock().size(), 5);
        assert_eq!(hopper.inventory().lock().title(), "Sorter");
    }

    #[test]
    fn format_slot_bounds() {
        let server = server();
        let gui = Gui::chest_builder(&server, 1, None).unwrap();
        let diamond = ItemStack::new(Material::DIAMOND, 1);

        gui.format_slot(8, diamond.clone(), |_| {}).unwrap();
        assert!(gui.has_button(8));
        assert!(matches!(
            gui.format_slot(9, diamond.clone(), |_| {}),
            Err(InventoryError::InvalidSlot { slot: 9, size: 9 })
        ));
        assert!(!gui.has_button(9));
    }

    #[test]
    fn format_slots_is_all_or_nothing() {
        let server = server();
        let gui = Gui::chest_builder(&server, 1, None).unwrap();
        let paper = ItemStack::new(Material::PAPER, 1);

        assert!(gui.format_slots(&[0, 1, 20], paper.clone(), |_| {}).is_err());
        assert!(gui.inventory().lock().is_empty());
        assert!(!gui.has_button(0));

        gui.format_slots(&[0, 1, 2], paper.clone(), |_| {}).unwrap();
        assert!((0..3).all(|slot| gui.has_button(slot)));
        assert_eq!(gui.inventory().lock().item(2).unwrap(), Some(&paper));
    }

    #[test]
    fn lock_and_fill_drop_callbacks() {
        let server = server();
        let gui = Gui::chest_builder(&server, 2, None).unwrap();
        let pane = ItemStack::new(Material::BLACK_STAINED_GLASS_PANE, 1);

        gui.fill_with(pane.clone(), |_| {});
        assert!((0..18).all(|slot| gui.has_button(slot)));

        gui.lock_slot(4, ItemStack::new(Material::BARRIER, 1)).unwrap();
        assert!(!gui.has_button(4));
        assert!(gui.lock_slot(18, pane.clone()).is_err());

        gui.fill(pane.clone());
        assert!((0..18).all(|slot| !gui.has_button(slot)));
        assert_eq!(gui.inventory().lock().item(4).unwrap(), Some(&pane));
    }
}
