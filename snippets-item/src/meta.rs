use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    attribute::{Attribute, AttributeModifier},
    enchantment::Enchantment,
    ItemError,
};

/// Everything on an item besides its material and amount.
///
/// Names and lore are stored already colorized.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lore: Option<Vec<String>>,
    /// Enchantment levels, never zero.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub enchants: BTreeMap<Enchantment, u32>,
    pub unbreakable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_model_data: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attribute_modifiers: Vec<(Attribute, AttributeModifier)>,
}

impl ItemMeta {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Adds or replaces an enchantment. Levels above the vanilla maximum are
    /// allowed.
    pub fn add_enchant(&mut self, enchantment: Enchantment, level: u32) -> Result<(), ItemError> {
        if level == 0 {
            return Err(ItemError::InvalidEnchantmentLevel(enchantment));
        }
        self.enchants.insert(enchantment, level);
        Ok(())
    }

    pub fn remove_enchant(&mut self, enchantment: &Enchantment) -> bool {
        self.enchants.remove(enchantment).is_some()
    }

    pub fn enchant_level(&self, enchantment: &Enchantment) -> Option<u32> {
        self.enchants.get(enchantment).copied()
    }

    pub fn add_attribute_modifier(
        &mut self,
        attribute: Attribute,
        modifier: AttributeModifier,
    ) -> Result<(), ItemError> {
        if self
            .attribute_modifiers
            .iter()
            .any(|(existing, other)| *existing == attribute && other.id == modifier.id)
        {
            return Err(ItemError::DuplicateModifier {
                attribute,
                id: modifier.id,
            });
        }
        self.attribute_modifiers.push((attribute, modifier));
        Ok(())
    }

    pub fn attribute_modifiers(
        &self,
        attribute: Attribute,
    ) -> impl Iterator<Item = &AttributeModifier> + '_ {
        self.attribute_modifiers
            .iter()
            .filter(move |(existing, _)| *existing == attribute)
            .map(|(_, modifier)| modifier)
    }
}
