use thiserror::Error;

use crate::InventoryType;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Slot '{slot}' outside of inventory with {size} slots")]
    InvalidSlot { slot: usize, size: usize },
    #[error("A chest needs between 1 and 6 rows, got {0}")]
    InvalidRows(u8),
    #[error("Inventories of type {0:?} can't be created")]
    NotCreatable(InventoryType),
    #[error("Player '{0}' tried to interact with a closed container")]
    ClosedContainerInteract(String),
    #[error("Invalid inventory packet: {0}")]
    InvalidPacket(String),
}
