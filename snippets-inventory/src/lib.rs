use std::sync::Arc;

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use parking_lot::Mutex;
use snippets_item::ItemStack;

pub mod action;
pub mod container_click;
mod error;
pub mod view;

pub use action::InventoryAction;
pub use error::InventoryError;
pub use view::{InventoryView, SlotType};

/// Slots per chest row.
pub const ROW_SIZE: usize = 9;
pub const MAX_CHEST_ROWS: u8 = 6;

/// https://wiki.vg/Inventory
#[derive(Debug, ToPrimitive, FromPrimitive, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    Generic9x1,
    Generic9x2,
    // General-purpose 3-row inventory. Used by Chest, minecart with chest, ender chest, and barrel
    Generic9x3,
    Generic9x4,
    Generic9x5,
    // Used by large chests
    Generic9x6,
    // General-purpose 3-by-3 square inventory, used by Dispenser and Dropper
    Generic3x3,
    // General-purpose 3-by-3 square inventory, used by the Crafter
    Craft3x3,
    Anvil,
    Beacon,
    BlastFurnace,
    BrewingStand,
    CraftingTable,
    EnchantmentTable,
    Furnace,
    Grindstone,
    // Hopper or minecart with hopper
    Hopper,
    Lectern,
    Loom,
    // Villager, Wandering Trader
    Merchant,
    ShulkerBox,
    SmithingTable,
    Smoker,
    CartographyTable,
    Stonecutter,
}

impl WindowType {
    /// The generic chest window for `rows` rows.
    pub fn generic_rows(rows: u8) -> Option<Self> {
        if rows == 0 {
            return None;
        }
        Self::from_u8(rows - 1).filter(|_| rows <= MAX_CHEST_ROWS)
    }

    /// Id sent in the open screen packet.
    pub fn protocol_id(&self) -> i32 {
        self.to_i32().unwrap_or_default()
    }
}

/// The kinds of container a plugin can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryType {
    Chest,
    Dispenser,
    Dropper,
    Furnace,
    Workbench,
    Enchanting,
    Brewing,
    /// A player's own inventory: 36 storage slots, 4 armor, 1 offhand.
    Player,
    Merchant,
    EnderChest,
    Anvil,
    Smithing,
    Beacon,
    Hopper,
    ShulkerBox,
    Barrel,
    BlastFurnace,
    Lectern,
    Smoker,
    Loom,
    Cartography,
    Grindstone,
    Stonecutter,
    Crafter,
}

impl InventoryType {
    pub const fn default_size(&self) -> usize {
        match self {
            InventoryType::Chest
            | InventoryType::EnderChest
            | InventoryType::ShulkerBox
            | InventoryType::Barrel => 27,
            InventoryType::Dispenser | InventoryType::Dropper | InventoryType::Crafter => 9,
            InventoryType::Furnace
            | InventoryType::BlastFurnace
            | InventoryType::Smoker
            | InventoryType::Merchant
            | InventoryType::Anvil
            | InventoryType::Cartography
            | InventoryType::Grindstone => 3,
            InventoryType::Workbench => 10,
            InventoryType::Enchanting | InventoryType::Stonecutter => 2,
            InventoryType::Brewing | InventoryType::Hopper => 5,
            InventoryType::Player => 41,
            InventoryType::Smithing | InventoryType::Loom => 4,
            InventoryType::Beacon | InventoryType::Lectern => 1,
        }
    }

    pub const fn default_title(&self) -> &'static str {
        match self {
            InventoryType::Chest => "Chest",
            InventoryType::Dispenser => "Dispenser",
            InventoryType::Dropper => "Dropper",
            InventoryType::Furnace => "Furnace",
            InventoryType::Workbench => "Crafting",
            InventoryType::Enchanting => "Enchant",
            InventoryType::Brewing => "Brewing",
            InventoryType::Player => "Player",
            InventoryType::Merchant => "Villager",
            InventoryType::EnderChest => "Ender Chest",
            InventoryType::Anvil => "Repairing",
            InventoryType::Smithing => "Upgrade Gear",
            InventoryType::Beacon => "Beacon",
            InventoryType::Hopper => "Item Hopper",
            InventoryType::ShulkerBox => "Shulker Box",
            InventoryType::Barrel => "Barrel",
            InventoryType::BlastFurnace => "Blast Furnace",
            InventoryType::Lectern => "Lectern",
            InventoryType::Smoker => "Smoker",
            InventoryType::Loom => "Loom",
            InventoryType::Cartography => "Cartography Table",
            InventoryType::Grindstone => "Repair & Disenchant",
            InventoryType::Stonecutter => "Stonecutter",
            InventoryType::Crafter => "Crafter",
        }
    }

    /// Player inventories only exist attached to a player.
    pub const fn is_creatable(&self) -> bool {
        !matches!(self, InventoryType::Player)
    }

    pub const fn window_type(&self) -> Option<WindowType> {
        Some(match self {
            InventoryType::Chest | InventoryType::EnderChest | InventoryType::Barrel => {
                WindowType::Generic9x3
            }
            InventoryType::Dispenser | InventoryType::Dropper => WindowType::Generic3x3,
            InventoryType::Crafter => WindowType::Craft3x3,
            InventoryType::Furnace => WindowType::Furnace,
            InventoryType::Workbench => WindowType::CraftingTable,
            InventoryType::Enchanting => WindowType::EnchantmentTable,
            InventoryType::Brewing => WindowType::BrewingStand,
            InventoryType::Merchant => WindowType::Merchant,
            InventoryType::Anvil => WindowType::Anvil,
            InventoryType::Smithing => WindowType::SmithingTable,
            InventoryType::Beacon => WindowType::Beacon,
            InventoryType::Hopper => WindowType::Hopper,
            InventoryType::ShulkerBox => WindowType::ShulkerBox,
            InventoryType::BlastFurnace => WindowType::BlastFurnace,
            InventoryType::Lectern => WindowType::Lectern,
            InventoryType::Smoker => WindowType::Smoker,
            InventoryType::Loom => WindowType::Loom,
            InventoryType::Cartography => WindowType::CartographyTable,
            InventoryType::Grindstone => WindowType::Grindstone,
            InventoryType::Stonecutter => WindowType::Stonecutter,
            InventoryType::Player => return None,
        })
    }
}

/// Inventories are shared between whoever built them and every viewer.
pub type SharedInventory = Arc<Mutex<Inventory>>;

/// Something that owns an inventory, kept alive while the inventory is open.
pub trait InventoryHolder: Send + Sync {
    fn inventory(&self) -> &SharedInventory;
}

/// A fixed-size grid of item slots.
#[derive(Debug, Clone)]
pub struct Inventory {
    kind: InventoryType,
    title: String,
    slots: Vec<Option<ItemStack>>,
}

impl Inventory {
    /// A container of `kind` with its default size.
    pub fn new(kind: InventoryType, title: Option<&str>) -> Result<Self, InventoryError> {
        if !kind.is_creatable() {
            return Err(InventoryError::NotCreatable(kind));
        }
        Ok(Self::with_size(kind, kind.default_size(), title))
    }

    /// A chest with `rows` rows of nine slots.
    pub fn chest(rows: u8, title: Option<&str>) -> Result<Self, InventoryError> {
        if !(1..=MAX_CHEST_ROWS).contains(&rows) {
            return Err(InventoryError::InvalidRows(rows));
        }
        Ok(Self::with_size(
            InventoryType::Chest,
            rows as usize * ROW_SIZE,
            title,
        ))
    }

    /// The inventory every player carries.
    pub fn player() -> Self {
        Self::with_size(
            InventoryType::Player,
            InventoryType::Player.default_size(),
            None,
        )
    }

    fn with_size(kind: InventoryType, size: usize, title: Option<&str>) -> Self {
        Self {
            kind,
            title: title.unwrap_or(kind.default_title()).to_string(),
            slots: vec![None; size],
        }
    }

    pub fn shared(self) -> SharedInventory {
        Arc::new(Mutex::new(self))
    }

    pub fn kind(&self) -> InventoryType {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn window_type(&self) -> Option<WindowType> {
        match self.kind {
            InventoryType::Chest => WindowType::generic_rows((self.size() / ROW_SIZE) as u8),
            kind => kind.window_type(),
        }
    }

    pub fn check_slot(&self, slot: usize) -> Result<(), InventoryError> {
        if slot >= self.size() {
            return Err(InventoryError::InvalidSlot {
                slot,
                size: self.size(),
            });
        }
        Ok(())
    }

    pub fn item(&self, slot: usize) -> Result<Option<&ItemStack>, InventoryError> {
        self.check_slot(slot)?;
        Ok(self.slots[slot].as_ref())
    }

    pub fn slot_mut(&mut self, slot: usize) -> Result<&mut Option<ItemStack>, InventoryError> {
        self.check_slot(slot)?;
        Ok(&mut self.slots[slot])
    }

    pub fn set_item(&mut self, slot: usize, item: Option<ItemStack>) -> Result<(), InventoryError> {
        *self.slot_mut(slot)? = item;
        Ok(())
    }

    /// Puts a copy of `item` in every slot.
    pub fn fill(&mut self, item: &ItemStack) {
        self.slots.iter_mut().for_each(|slot| *slot = Some(item.clone()));
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    pub fn contents(&self) -> &[Option<ItemStack>] {
        &self.slots
    }

    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
