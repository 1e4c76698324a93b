use std::sync::Arc;

use crate::{InventoryHolder, InventoryType, SharedInventory, ROW_SIZE};

/// Main storage rows plus hotbar, the part of a player's inventory shown
/// under an open container.
const BOTTOM_SLOTS: usize = 36;

/// What a slot is used for, as far as clicks are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotType {
    Result,
    Crafting,
    Armor,
    Container,
    Quickbar,
    Outside,
    Fuel,
}

/// A container a player has open, on top of their own inventory.
///
/// Raw slots count through the top inventory first, then the player's main
/// storage rows and finally the hotbar.
#[derive(Clone)]
pub struct InventoryView {
    top: SharedInventory,
    bottom: SharedInventory,
    holder: Option<Arc<dyn InventoryHolder>>,
}

impl InventoryView {
    pub fn new(top: SharedInventory, bottom: SharedInventory) -> Self {
        Self {
            top,
            bottom,
            holder: None,
        }
    }

    /// A view whose top inventory belongs to `holder`. The holder stays alive
    /// as long as the view does.
    pub fn with_holder(holder: Arc<dyn InventoryHolder>, bottom: SharedInventory) -> Self {
        Self {
            top: holder.inventory().clone(),
            bottom,
            holder: Some(holder),
        }
    }

    pub fn top(&self) -> &SharedInventory {
        &self.top
    }

    pub fn bottom(&self) -> &SharedInventory {
        &self.bottom
    }

    pub fn holder(&self) -> Option<&Arc<dyn InventoryHolder>> {
        self.holder.as_ref()
    }

    pub fn title(&self) -> String {
        self.top.lock().title().to_string()
    }

    pub fn top_size(&self) -> usize {
        self.top.lock().size()
    }

    pub fn count_slots(&self) -> usize {
        self.top_size() + BOTTOM_SLOTS
    }

    /// Maps a raw slot to the inventory it belongs to and the index in there.
    pub fn convert_slot(&self, raw_slot: usize) -> Option<(&SharedInventory, usize)> {
        let top_size = self.top_size();
        if raw_slot < top_size {
            return Some((&self.top, raw_slot));
        }
        let bottom = raw_slot - top_size;
        match bottom {
            // main storage sits behind the hotbar in the player inventory
            0..27 => Some((&self.bottom, bottom + ROW_SIZE)),
            27..36 => Some((&self.bottom, bottom - 27)),
            _ => None,
        }
    }

    pub fn inventory_at(&self, raw_slot: usize) -> Option<&SharedInventory> {
        self.convert_slot(raw_slot).map(|(inventory, _)| inventory)
    }

    pub fn slot_type(&self, raw_slot: Option<usize>) -> SlotType {
        let Some(raw_slot) = raw_slot else {
            return SlotType::Outside;
        };
        let top = self.top.lock();
        let top_size = top.size();
        if raw_slot < top_size {
            return top_slot_type(top.kind(), raw_slot, top_size);
        }
        match raw_slot - top_size {
            0..27 => SlotType::Container,
            27..36 => SlotType::Quickbar,
            _ => SlotType::Outside,
        }
    }
}

fn top_slot_type(kind: InventoryType, slot: usize, size: usize) -> SlotType {
    match kind {
        InventoryType::Furnace | InventoryType::BlastFurnace | InventoryType::Smoker => match slot {
            0 => SlotType::Crafting,
            1 => SlotType::Fuel,
            _ => SlotType::Result,
        },
        InventoryType::Workbench => match slot {
            0 => SlotType::Result,
            _ => SlotType::Crafting,
        },
        InventoryType::Anvil
        | InventoryType::Smithing
        | InventoryType::Grindstone
        | InventoryType::Stonecutter
        | InventoryType::Cartography
        | InventoryType::Loom
        | InventoryType::Merchant => {
            if slot + 1 == size {
                SlotType::Result
            } else {
                SlotType::Crafting
            }
        }
        InventoryType::Enchanting | InventoryType::Brewing | InventoryType::Beacon => {
            SlotType::Crafting
        }
        _ => SlotType::Container,
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::{InventoryView, SlotType};
    use crate::{Inventory, InventoryType};

    fn chest_view(rows: u8) -> InventoryView {
        InventoryView::new(
            Inventory::chest(rows, None).unwrap().shared(),
            Inventory::player().shared(),
        )
    }

    #[test]
    fn converts_raw_slots() {
        let view = chest_view(3);
        assert_eq!(view.count_slots(), 27 + 36);

        let (inventory, slot) = view.convert_slot(26).unwrap();
        assert!(Arc::ptr_eq(inventory, view.top()));
        assert_eq!(slot, 26);

        // first slot below the chest is the first main storage slot
        let (inventory, slot) = view.convert_slot(27).unwrap();
        assert!(Arc::ptr_eq(inventory, view.bottom()));
        assert_eq!(slot, 9);

        // hotbar
        let (inventory, slot) = view.convert_slot(27 + 27).unwrap();
        assert!(Arc::ptr_eq(inventory, view.bottom()));
        assert_eq!(slot, 0);
        assert_eq!(view.convert_slot(27 + 35).unwrap().1, 8);

        assert!(view.convert_slot(27 + 36).is_none());
        assert!(Arc::ptr_eq(view.inventory_at(3).unwrap(), view.top()));
        assert!(view.inventory_at(100).is_none());
    }

    #[test]
    fn slot_types() {
        let view = chest_view(1);
        assert_eq!(view.slot_type(Some(0)), SlotType::Container);
        assert_eq!(view.slot_type(Some(9)), SlotType::Container);
        assert_eq!(view.slot_type(Some(9 + 27)), SlotType::Quickbar);
        assert_eq!(view.slot_type(None), SlotType::Outside);

        let furnace = InventoryView::new(
            Inventory::new(InventoryType::Furnace, None).unwrap().shared(),
            Inventory::player().shared(),
        );
        assert_eq!(furnace.slot_type(Some(0)), SlotType::Crafting);
        assert_eq!(furnace.slot_type(Some(1)), SlotType::Fuel);
        assert_eq!(furnace.slot_type(Some(2)), SlotType::Result);

        let anvil = InventoryView::new(
            Inventory::new(InventoryType::Anvil, None).unwrap().shared(),
            Inventory::player().shared(),
        );
        assert_eq!(anvil.slot_type(Some(1)), SlotType::Crafting);
        assert_eq!(anvil.slot_type(Some(2)), SlotType::Result);
    }
}
