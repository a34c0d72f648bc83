//! In-memory host used by tests and the demo binary.
//!
//! Tracks which window each player sees and which listeners are live, and
//! records every primitive call in order. It can also synthesize the events a
//! real server would emit when a player clicks or closes their window.

use std::collections::HashMap;

use tracing::trace;

use super::{Host, ListenerId, PlayerId};
use crate::events::{ClickEvent, ClickType, CloseEvent};
use crate::inventory::{Inventory, InventoryId};
use crate::item::ItemStack;

/// Size of a player's own inventory grid (bottom half of a chest view).
const PLAYER_INVENTORY_SIZE: usize = 36;

/// One recorded host primitive call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostCall {
    Open {
        player: PlayerId,
        inventory: InventoryId,
    },
    Close {
        player: PlayerId,
    },
    Register {
        player: PlayerId,
        listener: ListenerId,
    },
    Unregister {
        listener: ListenerId,
    },
}

#[derive(Debug, Default)]
pub struct MemoryHost {
    views: HashMap<PlayerId, Inventory>,
    player_inventories: HashMap<PlayerId, Inventory>,
    listeners: HashMap<ListenerId, PlayerId>,
    next_listener: u64,
    calls: Vec<HostCall>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Window `player` currently has open.
    pub fn open_view(&self, player: PlayerId) -> Option<&Inventory> {
        self.views.get(&player)
    }

    pub fn is_viewing(&self, player: PlayerId, inventory: &Inventory) -> bool {
        self.views.get(&player) == Some(inventory)
    }

    /// Number of live listeners registered for `player`.
    pub fn listeners_for(&self, player: PlayerId) -> usize {
        self.listeners.values().filter(|&&p| p == player).count()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Returns and forgets the recorded calls.
    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    /// The player's own inventory, created empty on first use.
    pub fn player_inventory(&mut self, player: PlayerId) -> Inventory {
        self.player_inventories
            .entry(player)
            .or_insert_with(|| Inventory::new("Inventory", PLAYER_INVENTORY_SIZE))
            .clone()
    }

    /// Event for `player` clicking `slot` of their open window.
    ///
    /// Returns `None` if the player has no window open.
    pub fn click(&self, player: PlayerId, slot: usize, click: ClickType) -> Option<ClickEvent> {
        let view = self.views.get(&player)?;
        Some(ClickEvent::new(
            player,
            view.id(),
            Some(view.id()),
            slot,
            view.get(slot),
            click,
        ))
    }

    /// Event for `player` clicking `slot` of their own inventory below the window.
    pub fn click_player_inventory(
        &mut self,
        player: PlayerId,
        slot: usize,
        click: ClickType,
    ) -> Option<ClickEvent> {
        let view = self.views.get(&player)?.id();
        let own = self.player_inventory(player);
        Some(ClickEvent::new(
            player,
            view,
            Some(own.id()),
            slot,
            own.get(slot),
            click,
        ))
    }

    /// Event for `player` clicking outside any window with `cursor` held.
    pub fn click_outside(
        &self,
        player: PlayerId,
        cursor: Option<ItemStack>,
        click: ClickType,
    ) -> Option<ClickEvent> {
        let view = self.views.get(&player)?.id();
        Some(ClickEvent::new(player, view, None, 0, cursor, click))
    }

    /// The player presses escape: their window goes away and a close event is
    /// produced for the server glue to forward.
    pub fn player_close(&mut self, player: PlayerId) -> Option<CloseEvent> {
        let view = self.views.remove(&player)?;
        Some(CloseEvent::new(player, view.id()))
    }
}

impl Host for MemoryHost {
    fn open_inventory(&mut self, player: PlayerId, inventory: &Inventory) {
        trace!(target: "chest_gui::host", %player, inventory = ?inventory.id(), "open");
        self.views.insert(player, inventory.clone());
        self.calls.push(HostCall::Open {
            player,
            inventory: inventory.id(),
        });
    }

    fn close_inventory(&mut self, player: PlayerId) {
        trace!(target: "chest_gui::host", %player, "close");
        self.views.remove(&player);
        self.calls.push(HostCall::Close { player });
    }

    fn register_listener(&mut self, player: PlayerId) -> ListenerId {
        self.next_listener += 1;
        let listener = ListenerId(self.next_listener);
        self.listeners.insert(listener, player);
        self.calls.push(HostCall::Register { player, listener });
        listener
    }

    fn unregister_listener(&mut self, listener: ListenerId) {
        self.listeners.remove(&listener);
        self.calls.push(HostCall::Unregister { listener });
    }
}
