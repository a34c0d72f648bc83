//! Per-player menu session controller.
//!
//! A [`Gui`] owns one player's [`History`] and the host listener
//! registration. Its state is derived from the history top:
//!
//! - **Closed**: history unseeded, or topped by the sentinel
//! - **Viewing(page)**: history topped by a page
//!
//! Every transition that leaves a page (navigating away, closing, jumping
//! back through history) runs the page's close callback, unregisters the
//! listener and force-closes the window before anything else happens.

use tracing::debug;

use crate::error::{GuiError, Result};
use crate::events::{ClickEvent, ClickOutcome, CloseEvent, CloseOutcome, Events, Navigation};
use crate::history::History;
use crate::host::{Host, PlayerId};
use crate::page::Page;

/// Observable session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuiState {
    Closed,
    Viewing(Page),
}

/// One player's menu session.
#[derive(Debug)]
pub struct Gui {
    player: PlayerId,
    history: History,
    events: Events,
}

impl Gui {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            history: History::new(),
            events: Events::new(),
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Page the player is looking at, if any.
    pub fn current_page(&self) -> Option<&Page> {
        self.history.top()
    }

    pub fn state(&self) -> GuiState {
        match self.history.top() {
            Some(page) => GuiState::Viewing(page.clone()),
            None => GuiState::Closed,
        }
    }

    /// Whether the session's listener is subscribed with the host.
    pub fn is_listening(&self) -> bool {
        self.events.is_registered()
    }

    /// Shows `page`, recording it in history.
    ///
    /// Re-opening the page already on top tears it down and shows it again
    /// without growing the history.
    pub fn open<H: Host>(&mut self, host: &mut H, page: &Page) {
        if self.history.is_seeded() {
            self.leave_current(host);
        } else {
            self.history.seed();
        }

        let pushed = self.history.push(page);
        debug!(
            target: "chest_gui::session",
            player = %self.player,
            title = %page.title(),
            pushed,
            depth = self.history.len(),
            "Opening page"
        );

        self.show(host, page);
    }

    /// Returns to history entry `index`, discarding every later entry.
    ///
    /// Landing on the sentinel leaves the session closed.
    ///
    /// # Errors
    ///
    /// Returns [`GuiError::HistoryIndexOutOfBounds`] if `index` is past the end.
    pub fn open_page_from_history<H: Host>(&mut self, host: &mut H, index: usize) -> Result<()> {
        let target = self.history.get(index)?.cloned();

        self.leave_current(host);
        self.history.truncate_after(index);

        debug!(
            target: "chest_gui::session",
            player = %self.player,
            index,
            closed = target.is_none(),
            "Opening page from history"
        );

        if let Some(page) = target {
            self.show(host, &page);
        }
        Ok(())
    }

    /// Closes the menu and forgets the whole history.
    ///
    /// # Errors
    ///
    /// Returns [`GuiError::NotOpen`] if the history is unseeded.
    pub fn close<H: Host>(&mut self, host: &mut H) -> Result<()> {
        if !self.history.is_seeded() {
            return Err(GuiError::NotOpen);
        }

        self.leave_current(host);
        self.history.clear();
        debug!(target: "chest_gui::session", player = %self.player, "Session closed");
        Ok(())
    }

    /// Forwards a click notification from the server.
    ///
    /// # Errors
    ///
    /// Propagates failures of navigation requested by the item's callback.
    pub fn handle_click<H: Host>(
        &mut self,
        host: &mut H,
        event: &mut ClickEvent,
    ) -> Result<ClickOutcome> {
        if !self.events.is_registered() || event.player() != self.player {
            return Ok(ClickOutcome::Ignored);
        }

        let (outcome, navigation) = self.events.on_click(self.history.top(), event);
        if let Some(navigation) = navigation {
            self.navigate(host, navigation)?;
        }
        Ok(outcome)
    }

    /// Forwards a close notification from the server.
    ///
    /// Events for other players are ignored.
    pub fn handle_close<H: Host>(&mut self, host: &mut H, event: &CloseEvent) -> CloseOutcome {
        if !self.events.is_registered() || event.player() != self.player {
            return CloseOutcome::Ignored;
        }
        self.events.on_close(host, self.history.top(), event)
    }

    fn navigate<H: Host>(&mut self, host: &mut H, navigation: Navigation) -> Result<()> {
        match navigation {
            Navigation::Open(page) => {
                self.open(host, &page);
                Ok(())
            }
            Navigation::History(index) => self.open_page_from_history(host, index),
            Navigation::Close => self.close(host),
        }
    }

    /// Tears down whatever is on top: close callback, listener, window.
    fn leave_current<H: Host>(&mut self, host: &mut H) {
        if let Some(page) = self.history.top() {
            page.run_close_action(self.player);
        }
        self.events.unregister(host);
        host.close_inventory(self.player);
    }

    fn show<H: Host>(&mut self, host: &mut H, page: &Page) {
        page.run_open_action(self.player);
        self.events.register(host, self.player);
        host.open_inventory(self.player, &page.inventory());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    const PLAYER: PlayerId = PlayerId(1);

    fn page(title: &str) -> Page {
        Page::new(title, 9).unwrap()
    }

    #[test]
    fn fresh_session_is_closed_and_unseeded() {
        let gui = Gui::new(PLAYER);
        assert_eq!(gui.state(), GuiState::Closed);
        assert!(gui.history().is_empty());
        assert!(!gui.is_listening());
    }

    #[test]
    fn first_open_seeds_sentinel() {
        let mut host = MemoryHost::new();
        let mut gui = Gui::new(PLAYER);
        let a = page("A");

        gui.open(&mut host, &a);

        assert_eq!(gui.history().entries(), &[None, Some(a.clone())]);
        assert_eq!(gui.state(), GuiState::Viewing(a.clone()));
        assert!(host.is_viewing(PLAYER, &a.inventory()));
        assert_eq!(host.listeners_for(PLAYER), 1);
    }

    #[test]
    fn close_on_unseeded_session_is_an_error() {
        let mut host = MemoryHost::new();
        let mut gui = Gui::new(PLAYER);
        assert_eq!(gui.close(&mut host), Err(GuiError::NotOpen));
    }

    #[test]
    fn history_index_past_end_is_an_error() {
        let mut host = MemoryHost::new();
        let mut gui = Gui::new(PLAYER);
        gui.open(&mut host, &page("A"));

        assert_eq!(
            gui.open_page_from_history(&mut host, 2),
            Err(GuiError::HistoryIndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(gui.history().len(), 2);
    }

    #[test]
    fn only_one_listener_across_navigation() {
        let mut host = MemoryHost::new();
        let mut gui = Gui::new(PLAYER);

        gui.open(&mut host, &page("A"));
        gui.open(&mut host, &page("B"));
        gui.open(&mut host, &page("C"));
        gui.open_page_from_history(&mut host, 1).unwrap();

        assert_eq!(host.listeners_for(PLAYER), 1);
        assert_eq!(host.listener_count(), 1);
    }
}
