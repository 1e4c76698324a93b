use crate::InventoryError;

/// Raw slot the client sends for clicks outside the window.
pub const OUTSIDE_SLOT: i16 = -999;

/// A decoded container click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub slot: Slot,
    pub click_type: ClickType,
}

impl Click {
    /// Decodes the `(mode, button, slot)` triple of a container click packet.
    pub fn new(mode: u8, button: i8, slot: i16) -> Result<Self, InventoryError> {
        match mode {
            0 => Self::new_normal_click(button, slot),
            // Both buttons do the same here, so we omit it
            1 => Ok(Self {
                slot: Slot::normal(slot)?,
                click_type: ClickType::ShiftClick,
            }),
            2 => Self::new_key_click(button, slot),
            3 => Ok(Self {
                click_type: ClickType::CreativePickItem,
                slot: Slot::normal(slot)?,
            }),
            4 => Self::new_drop_item(button, slot),
            5 => Self::new_drag_item(button, slot),
            6 => Ok(Self {
                click_type: ClickType::DoubleClick,
                slot: Slot::normal(slot)?,
            }),
            _ => Err(InventoryError::InvalidPacket(format!(
                "unknown click mode {mode}"
            ))),
        }
    }

    fn new_normal_click(button: i8, slot: i16) -> Result<Self, InventoryError> {
        let slot = match slot {
            OUTSIDE_SLOT => Slot::OutsideInventory,
            _ => Slot::normal(slot)?,
        };
        let button = match button {
            0 => MouseClick::Left,
            1 => MouseClick::Right,
            _ => {
                return Err(InventoryError::InvalidPacket(format!(
                    "unknown mouse button {button}"
                )))
            }
        };
        Ok(Self {
            click_type: ClickType::MouseClick(button),
            slot,
        })
    }

    fn new_key_click(button: i8, slot: i16) -> Result<Self, InventoryError> {
        let key = match button {
            0..9 => KeyClick::Slot(button as u8),
            40 => KeyClick::Offhand,
            _ => {
                return Err(InventoryError::InvalidPacket(format!(
                    "unknown hotbar key {button}"
                )))
            }
        };

        Ok(Self {
            click_type: ClickType::KeyClick(key),
            slot: Slot::normal(slot)?,
        })
    }

    fn new_drop_item(button: i8, slot: i16) -> Result<Self, InventoryError> {
        let drop_type = match button {
            0 => DropType::SingleItem,
            1 => DropType::FullStack,
            _ => {
                return Err(InventoryError::InvalidPacket(format!(
                    "unknown drop button {button}"
                )))
            }
        };
        Ok(Self {
            click_type: ClickType::DropType(drop_type),
            slot: match slot {
                OUTSIDE_SLOT => Slot::OutsideInventory,
                _ => Slot::normal(slot)?,
            },
        })
    }

    fn new_drag_item(button: i8, slot: i16) -> Result<Self, InventoryError> {
        let state = match button {
            0 => MouseDragState::Start(MouseDragType::Left),
            4 => MouseDragState::Start(MouseDragType::Right),
            8 => MouseDragState::Start(MouseDragType::Middle),
            1 | 5 | 9 => MouseDragState::AddSlot(slot_index(slot)?),
            2 | 6 | 10 => MouseDragState::End,
            _ => {
                return Err(InventoryError::InvalidPacket(format!(
                    "unknown drag button {button}"
                )))
            }
        };
        Ok(Self {
            slot: match &state {
                MouseDragState::AddSlot(slot) => Slot::Normal(*slot),
                _ => Slot::OutsideInventory,
            },
            click_type: ClickType::MouseDrag { drag_state: state },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickType {
    MouseClick(MouseClick),
    ShiftClick,
    KeyClick(KeyClick),
    CreativePickItem,
    DropType(DropType),
    MouseDrag { drag_state: MouseDragState },
    DoubleClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseClick {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClick {
    Slot(u8),
    Offhand,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Raw slot index in the open window.
    Normal(usize),
    OutsideInventory,
}

impl Slot {
    fn normal(slot: i16) -> Result<Self, InventoryError> {
        slot_index(slot).map(Slot::Normal)
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Slot::Normal(slot) => Some(*slot),
            Slot::OutsideInventory => None,
        }
    }
}

fn slot_index(slot: i16) -> Result<usize, InventoryError> {
    usize::try_from(slot).map_err(|_| InventoryError::InvalidPacket(format!("invalid slot {slot}")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropType {
    SingleItem,
    FullStack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseDragType {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseDragState {
    Start(MouseDragType),
    AddSlot(usize),
    End,
}
