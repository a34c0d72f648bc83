//! Per-player session table.

use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::events::{ClickEvent, ClickOutcome, CloseEvent, CloseOutcome};
use crate::host::{Host, PlayerId};
use crate::session::Gui;

/// Owns one [`Gui`] per player and routes forwarded server events to it.
///
/// Sessions are created on first use and dropped when the player leaves.
#[derive(Debug, Default)]
pub struct GuiManager {
    sessions: HashMap<PlayerId, Gui>,
}

impl GuiManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session for `player`, created if missing.
    pub fn session(&mut self, player: PlayerId) -> &mut Gui {
        self.sessions
            .entry(player)
            .or_insert_with(|| Gui::new(player))
    }

    pub fn get(&self, player: PlayerId) -> Option<&Gui> {
        self.sessions.get(&player)
    }

    /// Drops `player`'s session, closing it first if it has history.
    pub fn remove<H: Host>(&mut self, host: &mut H, player: PlayerId) -> Option<Gui> {
        let mut gui = self.sessions.remove(&player)?;
        let closed = gui.close(host).is_ok();
        debug!(target: "chest_gui::manager", %player, closed, "Session removed");
        Some(gui)
    }

    /// Routes a click to the clicking player's session.
    pub fn dispatch_click<H: Host>(
        &mut self,
        host: &mut H,
        event: &mut ClickEvent,
    ) -> Result<ClickOutcome> {
        match self.sessions.get_mut(&event.player()) {
            Some(gui) => gui.handle_click(host, event),
            None => Ok(ClickOutcome::Ignored),
        }
    }

    /// Routes a close to the closing player's session.
    pub fn dispatch_close<H: Host>(&mut self, host: &mut H, event: &CloseEvent) -> CloseOutcome {
        match self.sessions.get_mut(&event.player()) {
            Some(gui) => gui.handle_close(host, event),
            None => CloseOutcome::Ignored,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ClickType;
    use crate::host::MemoryHost;
    use crate::item::{Item, Material};
    use crate::page::Page;

    #[test]
    fn routes_events_by_player() {
        let mut host = MemoryHost::new();
        let mut manager = GuiManager::new();
        let alice = PlayerId(1);
        let bob = PlayerId(2);

        let page = Page::new("Shared", 9).unwrap();
        page.set_item(Item::new(Material::Emerald), 0).unwrap();
        manager.session(alice).open(&mut host, &page);

        let mut click = host.click(alice, 0, ClickType::Left).unwrap();
        assert_eq!(
            manager.dispatch_click(&mut host, &mut click).unwrap(),
            ClickOutcome::Dispatched { slot: 0 }
        );

        let mut stray = ClickEvent::new(
            bob,
            page.inventory().id(),
            Some(page.inventory().id()),
            0,
            page.inventory().get(0),
            ClickType::Left,
        );
        assert_eq!(
            manager.dispatch_click(&mut host, &mut stray).unwrap(),
            ClickOutcome::Ignored
        );
        assert!(!stray.is_cancelled());
    }

    #[test]
    fn remove_closes_open_session() {
        let mut host = MemoryHost::new();
        let mut manager = GuiManager::new();
        let player = PlayerId(3);

        manager
            .session(player)
            .open(&mut host, &Page::new("Menu", 9).unwrap());
        let gui = manager.remove(&mut host, player).unwrap();

        assert!(gui.history().is_empty());
        assert!(host.open_view(player).is_none());
        assert_eq!(host.listener_count(), 0);
        assert!(manager.is_empty());
    }

    #[test]
    fn remove_unopened_session_leaves_host_alone() {
        let mut host = MemoryHost::new();
        let mut manager = GuiManager::new();
        let player = PlayerId(4);

        manager.session(player);
        let gui = manager.remove(&mut host, player).unwrap();

        assert!(!gui.history().is_seeded());
        assert!(host.calls().is_empty());
        assert!(manager.remove(&mut host, player).is_none());
    }
}
