//! Menu items: the visual and interactive definition of one slot.
//!
//! - [`Item`]: editable slot definition with an optional click callback
//! - [`ItemStack`]: the rendered value an item turns into
//! - [`Material`], [`Enchantment`], [`ItemFlags`]: attribute vocabularies

mod flags;
mod material;
mod stack;

pub use flags::ItemFlags;
pub use material::{Enchantment, Material};
pub use stack::{ItemStack, ItemStackBuilder};

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::config::GuiConfig;
use crate::error::{GuiError, Result};
use crate::events::Click;

/// Callback run when the item is clicked.
pub type ClickAction = Rc<dyn Fn(&mut Click)>;

/// Definition of a single menu slot.
///
/// Items are matched against clicked stacks by their rendered value (see
/// [`Item::to_item_stack`]), so two items that render identically are
/// indistinguishable to click dispatch.
#[derive(Clone)]
pub struct Item {
    amount: u8,
    name: Option<String>,
    material: Material,
    enchantments: BTreeMap<Enchantment, u32>,
    flags: ItemFlags,
    lore: Vec<String>,
    click_action: Option<ClickAction>,
}

impl Item {
    pub fn new(material: Material) -> Self {
        Self {
            amount: 1,
            name: None,
            material,
            enchantments: BTreeMap::new(),
            flags: ItemFlags::empty(),
            lore: Vec::new(),
            click_action: None,
        }
    }

    pub fn named(name: impl Into<String>, material: Material) -> Self {
        let mut item = Self::new(material);
        item.name = Some(name.into());
        item
    }

    /// Rebuilds an item from a rendered stack. The result has no click action.
    pub fn from_item_stack(stack: &ItemStack) -> Self {
        Self {
            amount: stack.amount(),
            name: stack.display_name().map(str::to_owned),
            material: stack.material(),
            enchantments: stack.enchantments().clone(),
            flags: stack.flags(),
            lore: stack.lore().to_vec(),
            click_action: None,
        }
    }

    // ===== attributes =====

    pub fn amount(&self) -> u8 {
        self.amount
    }

    /// Sets the stack size.
    ///
    /// # Errors
    ///
    /// Returns [`GuiError::InvalidAmount`] for 0 or anything above
    /// [`GuiConfig::MAX_STACK_AMOUNT`].
    pub fn set_amount(&mut self, amount: u8) -> Result<()> {
        if amount == 0 || amount > GuiConfig::MAX_STACK_AMOUNT {
            return Err(GuiError::InvalidAmount { amount });
        }
        self.amount = amount;
        Ok(())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn clear_name(&mut self) {
        self.name = None;
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    // ===== enchantments & flags =====

    pub fn enchantments(&self) -> &BTreeMap<Enchantment, u32> {
        &self.enchantments
    }

    /// Adds or re-levels an enchantment.
    pub fn add_enchantment(&mut self, enchantment: Enchantment, level: u32) {
        self.enchantments.insert(enchantment, level);
    }

    pub fn set_enchantments(&mut self, enchantments: BTreeMap<Enchantment, u32>) {
        self.enchantments = enchantments;
    }

    /// Makes the item shimmer without showing an enchantment line.
    pub fn add_glow(&mut self) {
        self.add_enchantment(Enchantment::Power, 1);
        self.add_flag(ItemFlags::HIDE_ENCHANTS);
    }

    pub fn flags(&self) -> ItemFlags {
        self.flags
    }

    pub fn add_flag(&mut self, flag: ItemFlags) {
        self.flags.insert(flag);
    }

    pub fn set_flags(&mut self, flags: ItemFlags) {
        self.flags = flags;
    }

    // ===== lore =====

    pub fn lore(&self) -> &[String] {
        &self.lore
    }

    pub fn add_lore_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lore.extend(lines.into_iter().map(Into::into));
    }

    pub fn set_lore<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lore = lines.into_iter().map(Into::into).collect();
    }

    /// Replaces an existing lore line.
    ///
    /// # Errors
    ///
    /// Returns [`GuiError::LoreIndexOutOfBounds`] if `index` has no line yet.
    pub fn set_lore_line(&mut self, line: impl Into<String>, index: usize) -> Result<()> {
        let len = self.lore.len();
        let slot = self
            .lore
            .get_mut(index)
            .ok_or(GuiError::LoreIndexOutOfBounds { index, len })?;
        *slot = line.into();
        Ok(())
    }

    pub fn clear_lore(&mut self) {
        self.lore.clear();
    }

    // ===== interaction =====

    /// Registers the click callback, replacing any previous one.
    pub fn on_click<F>(&mut self, action: F)
    where
        F: Fn(&mut Click) + 'static,
    {
        self.click_action = Some(Rc::new(action));
    }

    pub fn click_action(&self) -> Option<&ClickAction> {
        self.click_action.as_ref()
    }

    /// Renders the item into the stack placed in its slot.
    pub fn to_item_stack(&self) -> ItemStack {
        ItemStack::builder(self.material)
            .display_name(self.name.clone())
            .lore(self.lore.clone())
            .flags(self.flags)
            .enchantments(self.enchantments.clone())
            .amount(self.amount)
            .build()
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new(Material::default())
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("amount", &self.amount)
            .field("name", &self.name)
            .field("material", &self.material)
            .field("enchantments", &self.enchantments)
            .field("flags", &self.flags)
            .field("lore", &self.lore)
            .field("clickable", &self.click_action.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_adds_hidden_enchantment() {
        let mut item = Item::named("Shiny", Material::Paper);
        item.add_glow();

        let stack = item.to_item_stack();
        assert_eq!(stack.enchantment_level(Enchantment::Power), Some(1));
        assert!(stack.flags().contains(ItemFlags::HIDE_ENCHANTS));
    }

    #[test]
    fn amount_must_be_positive_and_bounded() {
        let mut item = Item::default();
        assert_eq!(item.set_amount(0), Err(GuiError::InvalidAmount { amount: 0 }));
        assert_eq!(
            item.set_amount(100),
            Err(GuiError::InvalidAmount { amount: 100 })
        );
        assert_eq!(item.amount(), 1);

        item.set_amount(64).unwrap();
        assert_eq!(item.to_item_stack().amount(), 64);
    }

    #[test]
    fn lore_line_replacement_requires_existing_line() {
        let mut item = Item::default();
        item.add_lore_lines(["first", "second"]);

        item.set_lore_line("changed", 1).unwrap();
        assert_eq!(item.lore(), ["first".to_string(), "changed".to_string()]);

        assert_eq!(
            item.set_lore_line("nope", 2),
            Err(GuiError::LoreIndexOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn items_do_not_share_collections() {
        let mut a = Item::default();
        let b = Item::default();
        a.add_enchantment(Enchantment::Sharpness, 3);
        a.add_lore_lines(["only on a"]);

        assert!(b.enchantments().is_empty());
        assert!(b.lore().is_empty());
    }

    #[test]
    fn from_item_stack_preserves_rendering() {
        let mut button = Item::named("Back", Material::Arrow);
        button.add_lore_lines(["Return to the previous page"]);
        button.add_flag(ItemFlags::HIDE_ATTRIBUTES);
        button.on_click(|_| {});

        let rebuilt = Item::from_item_stack(&button.to_item_stack());
        assert_eq!(rebuilt.to_item_stack(), button.to_item_stack());
        assert!(rebuilt.click_action().is_none());
    }
}
