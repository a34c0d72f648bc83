//! Error types surfaced by the menu API.
//!
//! Every failure here is a caller mistake (bad index, bad size, bad amount)
//! reported immediately. Host primitives are infallible and never appear here.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GuiError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GuiError {
    #[error("history index {index} out of bounds for history of length {len}")]
    HistoryIndexOutOfBounds { index: usize, len: usize },

    #[error("menu session has no open history")]
    NotOpen,

    #[error("page size {size} must be a positive multiple of 9 no larger than 54")]
    InvalidPageSize { size: usize },

    #[error("slot {slot} out of range for page of size {size}")]
    SlotOutOfRange { slot: usize, size: usize },

    #[error("item amount {amount} must be between 1 and 99")]
    InvalidAmount { amount: u8 },

    #[error("lore index {index} out of bounds for lore of length {len}")]
    LoreIndexOutOfBounds { index: usize, len: usize },
}
