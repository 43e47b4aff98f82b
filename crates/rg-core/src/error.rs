//! Errors for operations outside the command layer
//!
//! Player commands never fail with an error: a refused command writes a
//! message and reports that no time passed. The errors here cover the
//! plumbing around commands (pack bookkeeping and option loading).

use thiserror::Error;

use crate::object::ItemId;

/// Errors raised by pack management and configuration
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Pack is full ({capacity} items)")]
    PackFull { capacity: usize },

    #[error("No such item in pack: {0:?}")]
    NoSuchItem(ItemId),

    #[error("Invalid options: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
