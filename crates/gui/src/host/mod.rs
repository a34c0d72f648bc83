//! Game server primitives consumed by menu sessions.
//!
//! The server is an external collaborator: menus only need to show and hide
//! a player's window and to (un)register the session's event listener. The
//! server glue forwards the resulting [`ClickEvent`]s and [`CloseEvent`]s back
//! into the session (or a [`GuiManager`]).
//!
//! [`ClickEvent`]: crate::ClickEvent
//! [`CloseEvent`]: crate::CloseEvent
//! [`GuiManager`]: crate::GuiManager

pub mod memory;

use std::fmt;

use crate::inventory::Inventory;

pub use memory::{HostCall, MemoryHost};

/// Identity of a connected player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

/// Handle returned by [`Host::register_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);

/// Window and event-bus primitives of the game server.
///
/// All calls are synchronous and infallible; they run on the server's event
/// thread alongside the session that issues them.
pub trait Host {
    /// Shows `inventory` to `player`, replacing any window they have open.
    fn open_inventory(&mut self, player: PlayerId, inventory: &Inventory);

    /// Closes whatever window `player` has open.
    fn close_inventory(&mut self, player: PlayerId);

    /// Subscribes a session listener for `player`'s window events.
    fn register_listener(&mut self, player: PlayerId) -> ListenerId;

    /// Drops a subscription created by [`Host::register_listener`].
    fn unregister_listener(&mut self, listener: ListenerId);
}
