use itertools::Itertools;
use snippets_core::colorize;

use crate::{
    attribute::{Attribute, AttributeModifier},
    enchantment::Enchantment,
    ItemError, ItemMeta, ItemStack, Material, MAX_AMOUNT,
};

/// Builds [`ItemStack`]s with chained calls.
///
/// ```
/// use snippets_item::{enchantment::Enchantment, ItemBuilder, Material};
///
/// let sword = ItemBuilder::builder(Material::DIAMOND_SWORD)?
///     .name("&bExcalibur")
///     .lore(["&7Pulled from a stone", "<#FFAA00>Legendary"])
///     .add_enchant(Enchantment::SHARPNESS, 10)?
///     .unbreakable()
///     .item();
/// assert_eq!(sword.item_meta().display_name.as_deref(), Some("§bExcalibur"));
/// # Ok::<(), snippets_item::ItemError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ItemBuilder {
    item_stack: ItemStack,
    item_meta: ItemMeta,
}

impl ItemBuilder {
    /// A builder for a single item.
    pub fn builder(material: Material) -> Result<Self, ItemError> {
        Self::with_amount(material, 1)
    }

    pub fn with_amount(material: Material, amount: u32) -> Result<Self, ItemError> {
        if material.is_air() {
            return Err(ItemError::AirMaterial);
        }
        check_amount(amount)?;
        let item_stack = ItemStack::new(material, amount);
        let item_meta = item_stack.item_meta();
        Ok(Self {
            item_stack,
            item_meta,
        })
    }

    pub fn amount(mut self, amount: u32) -> Result<Self, ItemError> {
        check_amount(amount)?;
        self.item_stack.amount = amount;
        Ok(self)
    }

    /// Sets the display name, `&` codes and `<#RRGGBB>` markers are applied.
    pub fn name(mut self, name: &str) -> Self {
        self.item_meta.display_name = Some(colorize(name));
        self
    }

    pub fn add_enchant(mut self, enchantment: Enchantment, level: u32) -> Result<Self, ItemError> {
        self.item_meta.add_enchant(enchantment, level)?;
        Ok(self)
    }

    /// Replaces the lore, every line is colorized.
    pub fn lore<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.item_meta.lore = Some(lines.into_iter().map(|s| colorize(s.as_ref())).collect_vec());
        self
    }

    /// Appends one colorized line of lore.
    pub fn add_lore(mut self, line: &str) -> Self {
        self.item_meta
            .lore
            .get_or_insert_with(Vec::new)
            .push(colorize(line));
        self
    }

    pub fn unbreakable(mut self) -> Self {
        self.item_meta.unbreakable = true;
        self
    }

    pub fn custom_model_data(mut self, model: i32) -> Self {
        self.item_meta.custom_model_data = Some(model);
        self
    }

    pub fn attribute(
        mut self,
        attribute: Attribute,
        modifier: AttributeModifier,
    ) -> Result<Self, ItemError> {
        self.item_meta.add_attribute_modifier(attribute, modifier)?;
        Ok(self)
    }

    /// The finished stack with the metadata merged in.
    pub fn item(&self) -> ItemStack {
        let mut item_stack = self.item_stack.clone();
        item_stack.set_item_meta(self.item_meta.clone());
        item_stack
    }
}

fn check_amount(amount: u32) -> Result<(), ItemError> {
    if amount == 0 || amount > MAX_AMOUNT {
        return Err(ItemError::InvalidAmount(amount));
    }
    Ok(())
}
