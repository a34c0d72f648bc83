//! Rendered slot grids.
//!
//! An [`Inventory`] is a live handle: the page that renders into it and the
//! host that displays it hold clones of the same grid, so a re-render is
//! visible to whoever is looking at the window.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::item::ItemStack;

static NEXT_INVENTORY_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a rendered inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryId(pub u64);

#[derive(Debug)]
struct Contents {
    title: String,
    slots: Vec<Option<ItemStack>>,
}

/// Shared handle to a titled grid of item slots.
///
/// Clones compare equal and observe the same contents.
#[derive(Clone, Debug)]
pub struct Inventory {
    id: InventoryId,
    contents: Rc<RefCell<Contents>>,
}

impl Inventory {
    /// Creates an empty inventory with a fresh identity.
    pub fn new(title: impl Into<String>, size: usize) -> Self {
        let id = InventoryId(NEXT_INVENTORY_ID.fetch_add(1, Ordering::Relaxed));
        Self {
            id,
            contents: Rc::new(RefCell::new(Contents {
                title: title.into(),
                slots: vec![None; size],
            })),
        }
    }

    pub fn id(&self) -> InventoryId {
        self.id
    }

    pub fn title(&self) -> String {
        self.contents.borrow().title.clone()
    }

    pub fn size(&self) -> usize {
        self.contents.borrow().slots.len()
    }

    /// Returns a copy of the stack in `slot`, if any.
    pub fn get(&self, slot: usize) -> Option<ItemStack> {
        self.contents.borrow().slots.get(slot).cloned().flatten()
    }

    /// Writes a stack into `slot`. Writes past the end are ignored.
    pub fn set(&self, slot: usize, stack: ItemStack) {
        if let Some(cell) = self.contents.borrow_mut().slots.get_mut(slot) {
            *cell = Some(stack);
        }
    }

    /// Empties every slot.
    pub fn clear(&self) {
        self.contents.borrow_mut().slots.fill(None);
    }

    /// Number of non-empty slots.
    pub fn occupied(&self) -> usize {
        self.contents
            .borrow()
            .slots
            .iter()
            .filter(|s| s.is_some())
            .count()
    }

    pub(crate) fn set_title(&self, title: impl Into<String>) {
        self.contents.borrow_mut().title = title.into();
    }

    /// Resizes the grid. New slots are empty; truncated slots are dropped.
    pub(crate) fn resize(&self, size: usize) {
        self.contents.borrow_mut().slots.resize(size, None);
    }
}

impl PartialEq for Inventory {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Inventory {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Material;

    #[test]
    fn clones_share_contents() {
        let inventory = Inventory::new("Shop", 9);
        let view = inventory.clone();

        inventory.set(4, ItemStack::new(Material::Emerald));
        assert_eq!(view.get(4), Some(ItemStack::new(Material::Emerald)));
        assert_eq!(view, inventory);
    }

    #[test]
    fn distinct_inventories_have_distinct_ids() {
        let a = Inventory::new("A", 9);
        let b = Inventory::new("A", 9);
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let inventory = Inventory::new("Small", 9);
        inventory.set(9, ItemStack::new(Material::Stone));
        assert_eq!(inventory.occupied(), 0);
    }
}
