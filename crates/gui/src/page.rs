//! Menu pages.
//!
//! A [`Page`] is one displayable screen: a sparse slot→[`Item`] map rendered
//! into an [`Inventory`], plus open/close callbacks and a prevent-close flag.
//!
//! `Page` is a shared handle. Cloning it yields another reference to the same
//! page, and equality is identity, which is what history de-duplication and
//! navigation requests from click callbacks rely on.
//!
//! # Rendering
//!
//! Every mutator ends by calling [`Page::update`], so the rendered inventory
//! always mirrors the item map.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use tracing::{trace, warn};

use crate::config::GuiConfig;
use crate::error::{GuiError, Result};
use crate::host::PlayerId;
use crate::inventory::Inventory;
use crate::item::Item;

/// Callback run with the acting player when a page opens or closes.
pub type PageAction = Rc<dyn Fn(PlayerId)>;

struct PageState {
    title: String,
    size: usize,
    items: BTreeMap<usize, Item>,
    prevent_close: bool,
    open_action: Option<PageAction>,
    close_action: Option<PageAction>,
    inventory: Inventory,
}

/// Shared handle to a menu page.
#[derive(Clone)]
pub struct Page {
    inner: Rc<RefCell<PageState>>,
}

impl Page {
    /// Creates an empty page.
    ///
    /// # Errors
    ///
    /// Returns [`GuiError::InvalidPageSize`] unless `size` is a whole number
    /// of rows between 1 and [`GuiConfig::MAX_ROWS`].
    pub fn new(title: impl Into<String>, size: usize) -> Result<Self> {
        if !GuiConfig::is_valid_size(size) {
            return Err(GuiError::InvalidPageSize { size });
        }
        Ok(Self::build(title.into(), size))
    }

    /// Creates an empty page `rows` rows tall.
    pub fn with_rows(title: impl Into<String>, rows: usize) -> Result<Self> {
        Self::new(title, rows.saturating_mul(GuiConfig::SLOTS_PER_ROW))
    }

    /// Creates an empty page using the configured default title and height.
    pub fn from_config(config: &GuiConfig) -> Self {
        Self::build(config.default_title.clone(), config.default_size())
    }

    fn build(title: String, size: usize) -> Self {
        let inventory = Inventory::new(title.clone(), size);
        Self {
            inner: Rc::new(RefCell::new(PageState {
                title,
                size,
                items: BTreeMap::new(),
                prevent_close: false,
                open_action: None,
                close_action: None,
                inventory,
            })),
        }
    }

    // ===== items =====

    /// Places `item` in `slot`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns [`GuiError::SlotOutOfRange`] if `slot` is not below the page size.
    pub fn set_item(&self, item: Item, slot: usize) -> Result<()> {
        {
            let mut state = self.inner.borrow_mut();
            if slot >= state.size {
                return Err(GuiError::SlotOutOfRange {
                    slot,
                    size: state.size,
                });
            }
            state.items.insert(slot, item);
        }
        self.update();
        Ok(())
    }

    /// Places `item` in the lowest free slot below the current item count.
    ///
    /// The scan bound is the number of occupied slots, not the page size:
    /// an empty page never takes an item this way, and a page whose first
    /// `n` slots are all filled reports no free slot. Returns the chosen slot.
    pub fn add_item(&self, item: Item) -> Option<usize> {
        let chosen = {
            let mut state = self.inner.borrow_mut();
            let bound = state.items.len();
            let free = (0..bound).find(|slot| !state.items.contains_key(slot));
            if let Some(slot) = free {
                state.items.insert(slot, item);
            }
            free
        };
        trace!(target: "chest_gui::page", slot = ?chosen, "add_item");
        self.update();
        chosen
    }

    /// Removes and returns the item in `slot`.
    pub fn remove_item(&self, slot: usize) -> Option<Item> {
        let removed = self.inner.borrow_mut().items.remove(&slot);
        self.update();
        removed
    }

    /// Removes every item.
    pub fn clear(&self) {
        self.inner.borrow_mut().items.clear();
        self.update();
    }

    /// Re-renders the inventory from the item map.
    pub fn update(&self) {
        let state = self.inner.borrow();
        state.inventory.clear();
        for (&slot, item) in &state.items {
            state.inventory.set(slot, item.to_item_stack());
        }
    }

    pub fn item(&self, slot: usize) -> Option<Item> {
        self.inner.borrow().items.get(&slot).cloned()
    }

    /// Snapshot of the items in ascending slot order.
    pub fn items(&self) -> Vec<(usize, Item)> {
        self.inner
            .borrow()
            .items
            .iter()
            .map(|(&slot, item)| (slot, item.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().items.is_empty()
    }

    // ===== window =====

    pub fn title(&self) -> String {
        self.inner.borrow().title.clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        let mut state = self.inner.borrow_mut();
        state.title = title.into();
        state.inventory.set_title(state.title.clone());
    }

    pub fn size(&self) -> usize {
        self.inner.borrow().size
    }

    /// Resizes the page, dropping items that no longer fit.
    ///
    /// # Errors
    ///
    /// Returns [`GuiError::InvalidPageSize`] for sizes [`Page::new`] rejects.
    pub fn set_size(&self, size: usize) -> Result<()> {
        if !GuiConfig::is_valid_size(size) {
            return Err(GuiError::InvalidPageSize { size });
        }
        {
            let mut state = self.inner.borrow_mut();
            let dropped = state.items.split_off(&size);
            if !dropped.is_empty() {
                warn!(
                    target: "chest_gui::page",
                    dropped = dropped.len(),
                    size,
                    "Items dropped while shrinking page"
                );
            }
            state.size = size;
            state.inventory.resize(size);
        }
        self.update();
        Ok(())
    }

    /// Handle to the rendered inventory.
    pub fn inventory(&self) -> Inventory {
        self.inner.borrow().inventory.clone()
    }

    // ===== lifecycle =====

    pub fn prevent_close(&self, prevent: bool) {
        self.inner.borrow_mut().prevent_close = prevent;
    }

    pub fn is_close_prevented(&self) -> bool {
        self.inner.borrow().prevent_close
    }

    /// Registers the open callback, replacing any previous one.
    pub fn on_open<F>(&self, action: F)
    where
        F: Fn(PlayerId) + 'static,
    {
        self.inner.borrow_mut().open_action = Some(Rc::new(action));
    }

    /// Registers the close callback, replacing any previous one.
    pub fn on_close<F>(&self, action: F)
    where
        F: Fn(PlayerId) + 'static,
    {
        self.inner.borrow_mut().close_action = Some(Rc::new(action));
    }

    // Callbacks are cloned out before running so they may freely use the page.
    pub(crate) fn run_open_action(&self, player: PlayerId) {
        let action = self.inner.borrow().open_action.clone();
        if let Some(action) = action {
            action(player);
        }
    }

    pub(crate) fn run_close_action(&self, player: PlayerId) {
        let action = self.inner.borrow().close_action.clone();
        if let Some(action) = action {
            action(player);
        }
    }
}

impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Page {}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("Page")
            .field("title", &state.title)
            .field("size", &state.size)
            .field("items", &state.items.len())
            .field("prevent_close", &state.prevent_close)
            .field("inventory", &state.inventory.id())
            .finish()
    }
}
