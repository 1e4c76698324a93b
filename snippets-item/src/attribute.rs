use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Attributes an item can modify while equipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Armor,
    ArmorToughness,
    AttackDamage,
    AttackKnockback,
    AttackSpeed,
    BlockInteractionRange,
    EntityInteractionRange,
    KnockbackResistance,
    Luck,
    MaxHealth,
    MovementSpeed,
    Scale,
}

impl Attribute {
    pub const fn key(&self) -> &'static str {
        match self {
            Attribute::Armor => "minecraft:armor",
            Attribute::ArmorToughness => "minecraft:armor_toughness",
            Attribute::AttackDamage => "minecraft:attack_damage",
            Attribute::AttackKnockback => "minecraft:attack_knockback",
            Attribute::AttackSpeed => "minecraft:attack_speed",
            Attribute::BlockInteractionRange => "minecraft:block_interaction_range",
            Attribute::EntityInteractionRange => "minecraft:entity_interaction_range",
            Attribute::KnockbackResistance => "minecraft:knockback_resistance",
            Attribute::Luck => "minecraft:luck",
            Attribute::MaxHealth => "minecraft:max_health",
            Attribute::MovementSpeed => "minecraft:movement_speed",
            Attribute::Scale => "minecraft:scale",
        }
    }
}

/// How the modifier amount is combined with the base value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    AddNumber,
    AddScalar,
    MultiplyScalar1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlotGroup {
    Any,
    MainHand,
    OffHand,
    Hand,
    Feet,
    Legs,
    Chest,
    Head,
    Armor,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeModifier {
    /// Two modifiers with the same id can't be stacked on one attribute.
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub operation: Operation,
    pub slot: EquipmentSlotGroup,
}

impl AttributeModifier {
    /// A modifier with a random id that applies in any slot.
    pub fn new(name: impl Into<String>, amount: f64, operation: Operation) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            operation,
            slot: EquipmentSlotGroup::Any,
        }
    }

    pub fn with_slot(mut self, slot: EquipmentSlotGroup) -> Self {
        self.slot = slot;
        self
    }
}
