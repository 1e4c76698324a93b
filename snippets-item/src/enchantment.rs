use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{identifier::NamespacedKey, ItemError};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Enchantment(NamespacedKey);

impl Enchantment {
    pub const EFFICIENCY: Enchantment = Enchantment(NamespacedKey::from_static("minecraft:efficiency"));
    pub const FORTUNE: Enchantment = Enchantment(NamespacedKey::from_static("minecraft:fortune"));
    pub const LOOTING: Enchantment = Enchantment(NamespacedKey::from_static("minecraft:looting"));
    pub const MENDING: Enchantment = Enchantment(NamespacedKey::from_static("minecraft:mending"));
    pub const PROTECTION: Enchantment = Enchantment(NamespacedKey::from_static("minecraft:protection"));
    pub const SHARPNESS: Enchantment = Enchantment(NamespacedKey::from_static("minecraft:sharpness"));
    pub const SILK_TOUCH: Enchantment = Enchantment(NamespacedKey::from_static("minecraft:silk_touch"));
    pub const UNBREAKING: Enchantment = Enchantment(NamespacedKey::from_static("minecraft:unbreaking"));

    pub fn new(key: &str) -> Result<Self, ItemError> {
        NamespacedKey::parse(key).map(Self)
    }

    pub fn key(&self) -> &NamespacedKey {
        &self.0
    }
}

impl fmt::Display for Enchantment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
