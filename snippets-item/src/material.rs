use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{identifier::NamespacedKey, ItemError};

/// The kind of an item, identified by its registry key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Material(NamespacedKey);

macro_rules! materials {
    ($($name:ident => $key:literal),+ $(,)?) => {
        impl Material {
            $(
                pub const $name: Material = Material(NamespacedKey::from_static($key));
            )+
        }
    };
}

materials! {
    AIR => "minecraft:air",
    CAVE_AIR => "minecraft:cave_air",
    VOID_AIR => "minecraft:void_air",
    ARROW => "minecraft:arrow",
    BARRIER => "minecraft:barrier",
    BLACK_STAINED_GLASS_PANE => "minecraft:black_stained_glass_pane",
    BOOK => "minecraft:book",
    CHEST => "minecraft:chest",
    DIAMOND => "minecraft:diamond",
    DIAMOND_PICKAXE => "minecraft:diamond_pickaxe",
    DIAMOND_SWORD => "minecraft:diamond_sword",
    EMERALD => "minecraft:emerald",
    GRAY_STAINED_GLASS_PANE => "minecraft:gray_stained_glass_pane",
    PAPER => "minecraft:paper",
    PLAYER_HEAD => "minecraft:player_head",
    STONE => "minecraft:stone",
}

impl Material {
    pub fn new(key: &str) -> Result<Self, ItemError> {
        NamespacedKey::parse(key).map(Self)
    }

    /// Air variants are placeholders for "no item" and can't be held.
    pub fn is_air(&self) -> bool {
        *self == Self::AIR || *self == Self::CAVE_AIR || *self == Self::VOID_AIR
    }

    pub fn key(&self) -> &NamespacedKey {
        &self.0
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Material {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
