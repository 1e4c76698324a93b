use snippets_item::ItemStack;

use crate::container_click::{Click, ClickType, DropType, KeyClick, MouseClick, Slot};

/// What a click would do if nothing cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryAction {
    Nothing,
    PickupAll,
    PickupHalf,
    PlaceAll,
    PlaceSome,
    PlaceOne,
    SwapWithCursor,
    DropAllCursor,
    DropOneCursor,
    DropAllSlot,
    DropOneSlot,
    MoveToOtherInventory,
    HotbarSwap,
    SwapWithOffhand,
    CloneStack,
    CollectToCursor,
    /// Drags are handled separately from single clicks.
    Unknown,
}

impl InventoryAction {
    pub fn resolve(click: &Click, current: Option<&ItemStack>, cursor: Option<&ItemStack>) -> Self {
        match (&click.click_type, click.slot) {
            (ClickType::MouseClick(button), Slot::OutsideInventory) => match (button, cursor) {
                (_, None) => Self::Nothing,
                (MouseClick::Left, Some(_)) => Self::DropAllCursor,
                (MouseClick::Right, Some(_)) => Self::DropOneCursor,
            },
            (ClickType::MouseClick(MouseClick::Left), Slot::Normal(_)) => match (current, cursor) {
                (None, None) => Self::Nothing,
                (None, Some(_)) => Self::PlaceAll,
                (Some(_), None) => Self::PickupAll,
                (Some(current), Some(cursor)) if current.is_similar(cursor) => {
                    let max = current.max_stack_size();
                    if current.amount >= max {
                        Self::Nothing
                    } else if cursor.amount <= max - current.amount {
                        Self::PlaceAll
                    } else {
                        Self::PlaceSome
                    }
                }
                (Some(_), Some(_)) => Self::SwapWithCursor,
            },
            (ClickType::MouseClick(MouseClick::Right), Slot::Normal(_)) => {
                match (current, cursor) {
                    (None, None) => Self::Nothing,
                    (None, Some(_)) => Self::PlaceOne,
                    (Some(_), None) => Self::PickupHalf,
                    (Some(current), Some(cursor)) if current.is_similar(cursor) => {
                        if current.amount < current.max_stack_size() {
                            Self::PlaceOne
                        } else {
                            Self::Nothing
                        }
                    }
                    (Some(_), Some(_)) => Self::SwapWithCursor,
                }
            }
            (ClickType::ShiftClick, _) if current.is_some() => Self::MoveToOtherInventory,
            (ClickType::KeyClick(KeyClick::Slot(_)), _) => Self::HotbarSwap,
            (ClickType::KeyClick(KeyClick::Offhand), _) => Self::SwapWithOffhand,
            (ClickType::CreativePickItem, _) if current.is_some() => Self::CloneStack,
            (ClickType::DropType(DropType::SingleItem), Slot::Normal(_)) if current.is_some() => {
                Self::DropOneSlot
            }
            (ClickType::DropType(DropType::FullStack), Slot::Normal(_)) if current.is_some() => {
                Self::DropAllSlot
            }
            (ClickType::DoubleClick, _) if cursor.is_some() => Self::CollectToCursor,
            (ClickType::MouseDrag { .. }, _) => Self::Unknown,
            _ => Self::Nothing,
        }
    }
}

/// Moves items between a slot and the cursor for the simple actions.
///
/// Returns whether anything changed. Actions involving other slots are left
/// alone and report `false`.
pub fn apply_action(
    action: InventoryAction,
    slot: &mut Option<ItemStack>,
    cursor: &mut Option<ItemStack>,
) -> bool {
    match action {
        InventoryAction::PickupAll if cursor.is_none() => {
            *cursor = slot.take();
            cursor.is_some()
        }
        InventoryAction::PickupHalf if cursor.is_none() => {
            let Some(item) = slot.as_mut() else {
                return false;
            };
            let taken = item.amount.div_ceil(2);
            *cursor = Some(item.with_amount(taken));
            take_from(slot, taken);
            true
        }
        InventoryAction::PlaceAll => {
            let Some(held) = cursor.take() else {
                return false;
            };
            match slot {
                Some(item) => item.amount = item.amount.saturating_add(held.amount),
                None => *slot = Some(held),
            }
            true
        }
        InventoryAction::PlaceSome => {
            let (Some(item), Some(held)) = (slot.as_mut(), cursor.as_ref()) else {
                return false;
            };
            let moved = item.max_stack_size().saturating_sub(item.amount).min(held.amount);
            item.amount += moved;
            take_from(cursor, moved);
            moved > 0
        }
        InventoryAction::PlaceOne => {
            let Some(held) = cursor.as_ref() else {
                return false;
            };
            match slot {
                Some(item) => item.amount = item.amount.saturating_add(1),
                None => *slot = Some(held.with_amount(1)),
            }
            take_from(cursor, 1);
            true
        }
        InventoryAction::SwapWithCursor => {
            std::mem::swap(slot, cursor);
            true
        }
        InventoryAction::DropAllCursor => cursor.take().is_some(),
        InventoryAction::DropOneCursor => take_from(cursor, 1),
        InventoryAction::DropAllSlot => slot.take().is_some(),
        InventoryAction::DropOneSlot => take_from(slot, 1),
        _ => false,
    }
}

/// Removes `amount` items, clearing the stack once it is empty.
fn take_from(stack: &mut Option<ItemStack>, amount: u32) -> bool {
    let Some(item) = stack.as_mut() else {
        return false;
    };
    item.amount = item.amount.saturating_sub(amount);
    if item.amount == 0 {
        *stack = None;
    }
    true
}
