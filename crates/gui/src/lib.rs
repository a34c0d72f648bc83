//! Paged, clickable inventory menus for block-game server plugins.
//!
//! Plugin code builds [`Item`]s, places them on [`Page`]s and opens pages
//! through a per-player [`Gui`] session, which keeps a back-navigation
//! [`History`]. The server glue forwards window events to the session (or to
//! a [`GuiManager`] holding every player's session), and the session
//! dispatches them to item and page callbacks.
//!
//! Modules are organized by responsibility:
//! - [`item`] defines slot contents and their rendered [`ItemStack`] form
//! - [`page`] and [`inventory`] hold what a screen shows
//! - [`history`] and [`session`] implement navigation
//! - [`events`] turns click/close notifications into callbacks
//! - [`host`] abstracts the server, with an in-memory implementation
//!
//! Everything runs on the server's event thread; handles are `Rc`-based.
pub mod config;
pub mod error;
pub mod events;
pub mod history;
pub mod host;
pub mod inventory;
pub mod item;
pub mod manager;
pub mod page;
pub mod session;

pub use config::GuiConfig;
pub use error::{GuiError, Result};
pub use events::{
    Click, ClickEvent, ClickOutcome, ClickType, CloseEvent, CloseOutcome, Navigation,
};
pub use history::History;
pub use host::{Host, HostCall, ListenerId, MemoryHost, PlayerId};
pub use inventory::{Inventory, InventoryId};
pub use item::{ClickAction, Enchantment, Item, ItemFlags, ItemStack, ItemStackBuilder, Material};
pub use manager::GuiManager;
pub use page::{Page, PageAction};
pub use session::{Gui, GuiState};
