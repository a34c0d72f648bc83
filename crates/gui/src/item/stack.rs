//! Rendered item stacks.
//!
//! An [`ItemStack`] is what actually sits in an inventory slot. Click
//! dispatch compares stacks structurally, so two stacks built from the same
//! attributes are interchangeable.

use std::collections::BTreeMap;

use super::{Enchantment, ItemFlags, Material};

/// Rendered contents of one inventory slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    material: Material,
    amount: u8,
    display_name: Option<String>,
    lore: Vec<String>,
    enchantments: BTreeMap<Enchantment, u32>,
    flags: ItemFlags,
}

impl ItemStack {
    /// Creates a single unnamed stack of `material`.
    pub fn new(material: Material) -> Self {
        Self::builder(material).build()
    }

    /// Creates a builder for constructing a stack.
    pub fn builder(material: Material) -> ItemStackBuilder {
        ItemStackBuilder::new(material)
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn amount(&self) -> u8 {
        self.amount
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn lore(&self) -> &[String] {
        &self.lore
    }

    pub fn enchantments(&self) -> &BTreeMap<Enchantment, u32> {
        &self.enchantments
    }

    pub fn enchantment_level(&self, enchantment: Enchantment) -> Option<u32> {
        self.enchantments.get(&enchantment).copied()
    }

    pub fn flags(&self) -> ItemFlags {
        self.flags
    }
}

/// Builder for constructing item stacks.
#[derive(Clone, Debug)]
pub struct ItemStackBuilder {
    material: Material,
    amount: u8,
    display_name: Option<String>,
    lore: Vec<String>,
    enchantments: BTreeMap<Enchantment, u32>,
    flags: ItemFlags,
}

impl ItemStackBuilder {
    pub fn new(material: Material) -> Self {
        Self {
            material,
            amount: 1,
            display_name: None,
            lore: Vec::new(),
            enchantments: BTreeMap::new(),
            flags: ItemFlags::empty(),
        }
    }

    pub fn amount(mut self, amount: u8) -> Self {
        self.amount = amount;
        self
    }

    pub fn display_name(mut self, name: Option<String>) -> Self {
        self.display_name = name;
        self
    }

    pub fn lore(mut self, lore: Vec<String>) -> Self {
        self.lore = lore;
        self
    }

    pub fn enchantments(mut self, enchantments: BTreeMap<Enchantment, u32>) -> Self {
        self.enchantments = enchantments;
        self
    }

    pub fn enchantment(mut self, enchantment: Enchantment, level: u32) -> Self {
        self.enchantments.insert(enchantment, level);
        self
    }

    pub fn flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn build(self) -> ItemStack {
        ItemStack {
            material: self.material,
            amount: self.amount,
            display_name: self.display_name,
            lore: self.lore,
            enchantments: self.enchantments,
            flags: self.flags,
        }
    }
}
