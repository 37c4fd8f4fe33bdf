//! Fluent construction of menu items with formatted names and lore.

use super::item_stack::{ItemStack, Material, MAX_STACK_SIZE};
use crate::text::colorize;
use std::collections::BTreeMap;

/// Builder for [`ItemStack`]s
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    material: Material,
    amount: u32,
    name: Option<String>,
    lore: Vec<String>,
    enchantments: BTreeMap<String, u32>,
    damage: u16,
    unbreakable: bool,
    hide_tags: bool,
    custom_model_data: Option<i32>,
}

impl ItemBuilder {
    pub fn new(material: impl Into<Material>) -> Self {
        Self {
            material: material.into(),
            amount: 1,
            name: None,
            lore: Vec::new(),
            enchantments: BTreeMap::new(),
            damage: 0,
            unbreakable: false,
            hide_tags: false,
            custom_model_data: None,
        }
    }

    /// Display name, colour codes allowed
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(colorize(name));
        self
    }

    /// Append lore lines, colour codes allowed
    pub fn lore<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lore
            .extend(lines.into_iter().map(|line| colorize(line.as_ref())));
        self
    }

    pub fn material(mut self, material: impl Into<Material>) -> Self {
        self.material = material.into();
        self
    }

    pub fn amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    pub fn damage(mut self, damage: u16) -> Self {
        self.damage = damage;
        self
    }

    /// Add an enchantment; a later call with the same key replaces the level
    pub fn enchant(mut self, enchantment: &str, level: u32) -> Self {
        self.add_enchantment(enchantment, level);
        self
    }

    pub fn add_enchantment(&mut self, enchantment: &str, level: u32) {
        self.enchantments
            .insert(Material::new(enchantment).key().to_string(), level);
    }

    pub fn unbreakable(mut self, unbreakable: bool) -> Self {
        self.unbreakable = unbreakable;
        self
    }

    /// Hide attribute and enchantment tooltips
    pub fn hide_tags(mut self, hide_tags: bool) -> Self {
        self.hide_tags = hide_tags;
        self
    }

    pub fn custom_model_data(mut self, model_data: Option<i32>) -> Self {
        self.custom_model_data = model_data;
        self
    }

    /// Build the item. Air materials have nothing to render and build `None`.
    pub fn build(self) -> Option<ItemStack> {
        if self.material.is_air() {
            return None;
        }

        Some(ItemStack {
            material: self.material,
            count: self.amount.clamp(1, MAX_STACK_SIZE),
            display_name: self.name,
            lore: self.lore,
            enchantments: self.enchantments,
            damage: self.damage,
            unbreakable: self.unbreakable,
            hide_tags: self.hide_tags,
            custom_model_data: self.custom_model_data,
        })
    }
}

impl From<ItemStack> for ItemBuilder {
    fn from(item: ItemStack) -> Self {
        Self {
            material: item.material,
            amount: item.count,
            name: item.display_name,
            lore: item.lore,
            enchantments: item.enchantments,
            damage: item.damage,
            unbreakable: item.unbreakable,
            hide_tags: item.hide_tags,
            custom_model_data: item.custom_model_data,
        }
    }
}
