//! Back-navigation history of a menu session.

use crate::error::{GuiError, Result};
use crate::page::Page;

/// Ordered pages visited in one session.
///
/// `None` entries are the "closed" sentinel. A seeded history always starts
/// with one sentinel, and its last entry is what the player currently sees.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<Option<Page>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the history has been seeded with its leading sentinel.
    pub fn is_seeded(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Page at the top, or `None` when empty or topped by the sentinel.
    pub fn top(&self) -> Option<&Page> {
        self.entries.last().and_then(Option::as_ref)
    }

    pub fn get(&self, index: usize) -> Result<Option<&Page>> {
        self.entries
            .get(index)
            .map(Option::as_ref)
            .ok_or(GuiError::HistoryIndexOutOfBounds {
                index,
                len: self.entries.len(),
            })
    }

    pub fn entries(&self) -> &[Option<Page>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&Page>> + '_ {
        self.entries.iter().map(Option::as_ref)
    }

    /// Pushes the sentinel if nothing has been recorded yet.
    pub(crate) fn seed(&mut self) {
        if self.entries.is_empty() {
            self.entries.push(None);
        }
    }

    /// Pushes `page` unless it is already on top.
    ///
    /// Returns whether the history grew.
    pub(crate) fn push(&mut self, page: &Page) -> bool {
        if self.top() == Some(page) {
            return false;
        }
        self.entries.push(Some(page.clone()));
        true
    }

    /// Keeps entries `0..=index`, discarding everything after.
    pub(crate) fn truncate_after(&mut self, index: usize) {
        self.entries.truncate(index.saturating_add(1));
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str) -> Page {
        Page::new(title, 9).unwrap()
    }

    #[test]
    fn seed_is_idempotent() {
        let mut history = History::new();
        history.seed();
        history.seed();
        assert_eq!(history.len(), 1);
        assert_eq!(history.top(), None);
    }

    #[test]
    fn push_skips_page_already_on_top() {
        let a = page("A");
        let b = page("B");
        let mut history = History::new();
        history.seed();

        assert!(history.push(&a));
        assert!(!history.push(&a));
        assert!(history.push(&b));
        assert!(history.push(&a));
        assert_eq!(history.len(), 4);
        assert_eq!(history.top(), Some(&a));
    }

    #[test]
    fn truncate_keeps_index_inclusive() {
        let mut history = History::new();
        history.seed();
        history.push(&page("A"));
        history.push(&page("B"));

        history.truncate_after(1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.top().map(Page::title).as_deref(), Some("A"));
    }

    #[test]
    fn get_past_end_is_an_error() {
        let history = History::new();
        assert_eq!(
            history.get(0),
            Err(GuiError::HistoryIndexOutOfBounds { index: 0, len: 0 })
        );
    }
}
