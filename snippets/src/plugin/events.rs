use std::sync::Arc;

use parking_lot::RwLock;
use snippets_inventory::{
    container_click::Click, InventoryAction, InventoryView, SharedInventory, SlotType,
};
use snippets_item::ItemStack;

use crate::entity::player::Player;

macro_rules! event_types {
    ($($event_name:ident, $register_name:ident, $count_name:ident, $name:ident, $data:ty),+) => {
        $(
            pub trait $name: Send + Sync {
                fn $event_name(&self, event: &mut $data);

                /// Expired listeners are skipped and dropped after the next dispatch.
                fn is_expired(&self) -> bool {
                    false
                }
            }

            impl<Func> $name for Func
            where
                Func: Fn(&mut $data) + Send + Sync,
            {
                fn $event_name(&self, event: &mut $data) {
                    self(event)
                }
            }
        )*

        #[derive(Default)]
        struct EventTypeContainer {
            $($event_name: RwLock<Vec<Arc<dyn $name>>>,)*
        }

        impl EventRegistry {
            $(
                /// Runs every listener. No lock is held while a listener runs,
                /// so listeners may register new listeners.
                pub fn $event_name(&self, event: &mut $data) {
                    let listeners = self.container.$event_name.read().clone();
                    for listener in &listeners {
                        if !listener.is_expired() {
                            listener.$event_name(event);
                        }
                    }
                    self.container
                        .$event_name
                        .write()
                        .retain(|listener| !listener.is_expired());
                }

                pub fn $register_name<L>(&self, listener: L)
                where
                    L: $name + 'static,
                {
                    self.container.$event_name.write().push(Arc::new(listener));
                }

                pub fn $count_name(&self) -> usize {
                    self.container.$event_name.read().len()
                }
            )*
        }
    };
}

event_types![
    on_inventory_click,
    register_on_inventory_click,
    inventory_click_listeners,
    InventoryClickListener,
    InventoryClickEvent,
    on_inventory_close,
    register_on_inventory_close,
    inventory_close_listeners,
    InventoryCloseListener,
    InventoryCloseEvent
];

#[derive(Default)]
pub struct EventRegistry {
    container: EventTypeContainer,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A player clicked somewhere in their open view.
pub struct InventoryClickEvent {
    who_clicked: Arc<Player>,
    view: InventoryView,
    clicked_inventory: Option<SharedInventory>,
    raw_slot: Option<usize>,
    slot: Option<usize>,
    slot_type: SlotType,
    current_item: Option<ItemStack>,
    click: Click,
    action: InventoryAction,
    cancelled: bool,
}

impl InventoryClickEvent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        who_clicked: Arc<Player>,
        view: InventoryView,
        clicked_inventory: Option<SharedInventory>,
        raw_slot: Option<usize>,
        slot: Option<usize>,
        slot_type: SlotType,
        current_item: Option<ItemStack>,
        click: Click,
        action: InventoryAction,
    ) -> Self {
        Self {
            who_clicked,
            view,
            clicked_inventory,
            raw_slot,
            slot,
            slot_type,
            current_item,
            click,
            action,
            cancelled: false,
        }
    }

    pub fn who_clicked(&self) -> &Arc<Player> {
        &self.who_clicked
    }

    pub fn view(&self) -> &InventoryView {
        &self.view
    }

    /// `None` when the click landed outside the window.
    pub fn clicked_inventory(&self) -> Option<&SharedInventory> {
        self.clicked_inventory.as_ref()
    }

    /// Slot index across the whole view.
    pub fn raw_slot(&self) -> Option<usize> {
        self.raw_slot
    }

    /// Slot index inside [`Self::clicked_inventory`].
    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    pub fn slot_type(&self) -> SlotType {
        self.slot_type
    }

    pub fn current_item(&self) -> Option<&ItemStack> {
        self.current_item.as_ref()
    }

    pub fn click(&self) -> &Click {
        &self.click
    }

    pub fn action(&self) -> InventoryAction {
        self.action
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// A cancelled click leaves the inventory and cursor untouched.
    pub fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

/// A player's view was closed or replaced by another one.
pub struct InventoryCloseEvent {
    player: Arc<Player>,
    view: InventoryView,
}

impl InventoryCloseEvent {
    pub fn new(player: Arc<Player>, view: InventoryView) -> Self {
        Self { player, view }
    }

    pub fn player(&self) -> &Arc<Player> {
        &self.player
    }

    pub fn view(&self) -> &InventoryView {
        &self.view
    }
}

#[cfg(test)]
mod test {
    use std::sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    };

    use snippets_inventory::{Inventory, InventoryView};

    use super::{EventRegistry, InventoryCloseEvent, InventoryCloseListener};
    use crate::entity::player::Player;

    fn close_event() -> InventoryCloseEvent {
        let player = Arc::new(Player::new("Alex"));
        let view = InventoryView::new(
            Inventory::chest(1, None).unwrap().shared(),
            player.inventory().clone(),
        );
        InventoryCloseEvent::new(player, view)
    }

    #[test]
    fn closures_are_listeners() {
        let events = EventRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        events.register_on_inventory_close(move |_: &mut InventoryCloseEvent| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        events.on_inventory_close(&mut close_event());
        events.on_inventory_close(&mut close_event());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    struct OneShot(AtomicBool);

    impl InventoryCloseListener for OneShot {
        fn on_inventory_close(&self, _event: &mut InventoryCloseEvent) {
            self.0.store(true, Ordering::SeqCst);
        }

        fn is_expired(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn expired_listeners_are_pruned() {
        let events = EventRegistry::new();
        events.register_on_inventory_close(OneShot(AtomicBool::new(false)));
        assert_eq!(events.inventory_close_listeners(), 1);

        events.on_inventory_close(&mut close_event());
        assert_eq!(events.inventory_close_listeners(), 0);
    }

    #[test]
    fn listeners_can_register_listeners() {
        let events = Arc::new(EventRegistry::new());
        let registry = events.clone();
        events.register_on_inventory_close(move |_: &mut InventoryCloseEvent| {
            registry.register_on_inventory_close(|_: &mut InventoryCloseEvent| {});
        });

        events.on_inventory_close(&mut close_event());
        assert_eq!(events.inventory_close_listeners(), 2);
    }
}
