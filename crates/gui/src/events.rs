//! Window events and the per-session dispatcher.
//!
//! The server glue turns its native notifications into [`ClickEvent`] and
//! [`CloseEvent`] values and forwards them to the owning session. `Events`
//! holds the session's listener registration and decides what each event
//! means for the page on top of the history:
//!
//! - **Close**: ignore closes of other windows; re-display the page if closing
//!   is prevented, otherwise run the page's close callback and unregister.
//! - **Click**: find the first item (in slot order) whose rendered stack equals
//!   the clicked stack, cancel the click and run the item's callback.
//!
//! Click callbacks cannot borrow the session that is dispatching to them, so
//! they ask for follow-up navigation through [`Click`] instead. The session
//! applies the request once the callback has returned.

use tracing::{debug, trace};

use crate::host::{Host, ListenerId, PlayerId};
use crate::inventory::InventoryId;
use crate::item::ItemStack;
use crate::page::Page;

/// How the player clicked.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ClickType {
    #[default]
    Left,
    ShiftLeft,
    Right,
    ShiftRight,
    Middle,
    /// Hotbar number key pressed while hovering a slot.
    NumberKey,
    DoubleClick,
    Drop,
    ControlDrop,
    SwapOffhand,
    Creative,
    WindowBorderLeft,
    WindowBorderRight,
    Unknown,
}

impl ClickType {
    pub fn is_left_click(&self) -> bool {
        matches!(
            self,
            Self::Left | Self::ShiftLeft | Self::DoubleClick | Self::Creative
        )
    }

    pub fn is_right_click(&self) -> bool {
        matches!(self, Self::Right | Self::ShiftRight)
    }

    pub fn is_shift_click(&self) -> bool {
        matches!(self, Self::ShiftLeft | Self::ShiftRight)
    }

    pub fn is_keyboard_click(&self) -> bool {
        matches!(
            self,
            Self::NumberKey | Self::Drop | Self::ControlDrop | Self::SwapOffhand
        )
    }
}

/// A player clicked somewhere while a window was open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickEvent {
    player: PlayerId,
    inventory: InventoryId,
    clicked_inventory: Option<InventoryId>,
    slot: usize,
    current_item: Option<ItemStack>,
    click: ClickType,
    cancelled: bool,
}

impl ClickEvent {
    /// `inventory` is the window's top inventory; `clicked_inventory` is the
    /// grid the cursor was over (`None` outside the window).
    pub fn new(
        player: PlayerId,
        inventory: InventoryId,
        clicked_inventory: Option<InventoryId>,
        slot: usize,
        current_item: Option<ItemStack>,
        click: ClickType,
    ) -> Self {
        Self {
            player,
            inventory,
            clicked_inventory,
            slot,
            current_item,
            click,
            cancelled: false,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn inventory(&self) -> InventoryId {
        self.inventory
    }

    pub fn clicked_inventory(&self) -> Option<InventoryId> {
        self.clicked_inventory
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn current_item(&self) -> Option<&ItemStack> {
        self.current_item.as_ref()
    }

    pub fn click(&self) -> ClickType {
        self.click
    }

    /// Whether the server should suppress its default handling.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

/// A player's window was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseEvent {
    player: PlayerId,
    inventory: InventoryId,
}

impl CloseEvent {
    pub fn new(player: PlayerId, inventory: InventoryId) -> Self {
        Self { player, inventory }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn inventory(&self) -> InventoryId {
        self.inventory
    }
}

/// Follow-up navigation requested from a click callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Same as [`Gui::open`](crate::Gui::open).
    Open(Page),
    /// Same as [`Gui::open_page_from_history`](crate::Gui::open_page_from_history).
    History(usize),
    /// Same as [`Gui::close`](crate::Gui::close).
    Close,
}

/// Context handed to an item's click callback.
#[derive(Debug)]
pub struct Click {
    player: PlayerId,
    kind: ClickType,
    slot: usize,
    navigation: Option<Navigation>,
}

impl Click {
    pub(crate) fn new(player: PlayerId, kind: ClickType, slot: usize) -> Self {
        Self {
            player,
            kind,
            slot,
            navigation: None,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn kind(&self) -> ClickType {
        self.kind
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Opens `page` once the callback returns.
    pub fn open(&mut self, page: &Page) {
        self.navigation = Some(Navigation::Open(page.clone()));
    }

    /// Jumps back to history entry `index` once the callback returns.
    pub fn open_from_history(&mut self, index: usize) {
        self.navigation = Some(Navigation::History(index));
    }

    /// Closes the menu once the callback returns.
    pub fn close(&mut self) {
        self.navigation = Some(Navigation::Close);
    }

    /// Navigation requested so far. Later requests replace earlier ones.
    pub fn navigation(&self) -> Option<&Navigation> {
        self.navigation.as_ref()
    }

    pub(crate) fn into_navigation(self) -> Option<Navigation> {
        self.navigation
    }
}

/// What a click notification turned into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Listener not registered, no page shown, another player's event, wrong
    /// inventory, or a click outside the menu grid.
    Ignored,
    /// Click inside the menu grid that matched no item; left uncancelled.
    Unmatched,
    /// Matched the item in `slot`; the click was cancelled.
    Dispatched { slot: usize },
}

/// What a close notification turned into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Listener not registered, no page shown, another player's event, or the
    /// closed window is not the page's inventory.
    Ignored,
    /// Closing is prevented; the page was shown again.
    Reopened,
    /// The page's close callback ran and the listener was unregistered.
    Closed,
}

/// Listener half of a menu session.
///
/// Holds only the host registration; page data is read from the session's
/// history on every notification.
#[derive(Debug, Default)]
pub(crate) struct Events {
    listener: Option<ListenerId>,
}

impl Events {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_registered(&self) -> bool {
        self.listener.is_some()
    }

    /// Subscribes with the host unless already subscribed.
    pub(crate) fn register<H: Host>(&mut self, host: &mut H, player: PlayerId) {
        if self.listener.is_none() {
            let listener = host.register_listener(player);
            trace!(target: "chest_gui::events", %player, ?listener, "Listener registered");
            self.listener = Some(listener);
        }
    }

    pub(crate) fn unregister<H: Host>(&mut self, host: &mut H) {
        if let Some(listener) = self.listener.take() {
            trace!(target: "chest_gui::events", ?listener, "Listener unregistered");
            host.unregister_listener(listener);
        }
    }

    /// Handles a close notification against the current page.
    pub(crate) fn on_close<H: Host>(
        &mut self,
        host: &mut H,
        page: Option<&Page>,
        event: &CloseEvent,
    ) -> CloseOutcome {
        let Some(page) = page else {
            debug!(target: "chest_gui::events", player = %event.player(), "Close with no page shown");
            return CloseOutcome::Ignored;
        };

        if event.inventory() != page.inventory().id() {
            debug!(
                target: "chest_gui::events",
                player = %event.player(),
                inventory = ?event.inventory(),
                "Close of another window"
            );
            return CloseOutcome::Ignored;
        }

        if page.is_close_prevented() {
            debug!(target: "chest_gui::events", player = %event.player(), "Close prevented, reopening");
            host.open_inventory(event.player(), &page.inventory());
            return CloseOutcome::Reopened;
        }

        page.run_close_action(event.player());
        self.unregister(host);
        CloseOutcome::Closed
    }

    /// Handles a click notification against the current page.
    ///
    /// Returns the outcome and any navigation the item's callback requested.
    pub(crate) fn on_click(
        &self,
        page: Option<&Page>,
        event: &mut ClickEvent,
    ) -> (ClickOutcome, Option<Navigation>) {
        let Some(page) = page else {
            return (ClickOutcome::Ignored, None);
        };

        let tracked = page.inventory().id();
        if event.inventory() != tracked || event.clicked_inventory() != Some(tracked) {
            return (ClickOutcome::Ignored, None);
        }

        let Some(clicked) = event.current_item().cloned() else {
            return (ClickOutcome::Unmatched, None);
        };

        // Snapshot so callbacks may edit the page while running.
        let matched = page
            .items()
            .into_iter()
            .find(|(_, item)| item.to_item_stack() == clicked);

        let Some((slot, item)) = matched else {
            trace!(target: "chest_gui::events", slot = event.slot(), "Click matched no item");
            return (ClickOutcome::Unmatched, None);
        };

        event.set_cancelled(true);
        debug!(
            target: "chest_gui::events",
            player = %event.player(),
            slot,
            click = %event.click(),
            "Dispatching item click"
        );

        let navigation = item.click_action().and_then(|action| {
            let mut click = Click::new(event.player(), event.click(), slot);
            action(&mut click);
            click.into_navigation()
        });

        (ClickOutcome::Dispatched { slot }, navigation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_type_groups() {
        assert!(ClickType::ShiftLeft.is_shift_click());
        assert!(ClickType::ShiftLeft.is_left_click());
        assert!(ClickType::ShiftRight.is_right_click());
        assert!(ClickType::NumberKey.is_keyboard_click());
        assert!(!ClickType::Middle.is_left_click());
        assert!(!ClickType::Middle.is_right_click());
    }

    #[test]
    fn later_navigation_request_replaces_earlier() {
        let mut click = Click::new(PlayerId(1), ClickType::Left, 0);
        click.open_from_history(0);
        click.close();
        assert_eq!(click.into_navigation(), Some(Navigation::Close));
    }
}
