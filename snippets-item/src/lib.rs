use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod attribute;
pub mod builder;
pub mod enchantment;
pub mod identifier;
pub mod material;
pub mod meta;

pub use builder::ItemBuilder;
pub use material::Material;
pub use meta::ItemMeta;

use attribute::Attribute;
use enchantment::Enchantment;

/// Vanilla stack limit for most materials.
pub const MAX_STACK_SIZE: u32 = 64;
/// The client can't display more than this in one slot.
pub const MAX_AMOUNT: u32 = 99;

#[derive(Error, Debug)]
pub enum ItemError {
    #[error("Item can not be air")]
    AirMaterial,
    #[error("Amount must be between 1 and {MAX_AMOUNT}, got {0}")]
    InvalidAmount(u32),
    #[error("Invalid key '{0}'")]
    InvalidKey(String),
    #[error("Enchantment '{0}' can not have level 0")]
    InvalidEnchantmentLevel(Enchantment),
    #[error("Modifier {id} is already applied to {}", .attribute.key())]
    DuplicateModifier { attribute: Attribute, id: Uuid },
}

/// A quantity of a material plus its optional metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub material: Material,
    pub amount: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<ItemMeta>,
}

impl ItemStack {
    pub fn new(material: Material, amount: u32) -> Self {
        Self {
            material,
            amount,
            meta: None,
        }
    }

    /// A copy of the metadata, empty if none was set.
    pub fn item_meta(&self) -> ItemMeta {
        self.meta.clone().unwrap_or_default()
    }

    pub fn has_item_meta(&self) -> bool {
        self.meta.is_some()
    }

    pub fn set_item_meta(&mut self, meta: ItemMeta) {
        self.meta = if meta.is_empty() { None } else { Some(meta) };
    }

    /// Same material and metadata, amounts may differ.
    pub fn is_similar(&self, other: &ItemStack) -> bool {
        self.material == other.material && self.meta == other.meta
    }

    pub fn max_stack_size(&self) -> u32 {
        MAX_STACK_SIZE
    }

    /// The stack with only `amount` items, metadata kept.
    pub fn with_amount(&self, amount: u32) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }
}
