//! Player actions
//!
//! Equipment commands and the interface they use to reach the rest of the
//! game. A command either completes (time passes) or is refused with a
//! message and no change to the game state.

use crate::gameloop::GameState;
use crate::message::MessageLog;
use crate::object::{Item, ItemId, ItemKind, Pack};

pub mod pickup;
pub mod ring;
pub mod wear;

#[cfg(test)]
pub(crate) mod script;

pub use pickup::pick_up;
pub use ring::{auto_equip, ring_off, ring_on};
pub use wear::{take_off, unequip, wear, wield};

/// Outcome of a command, read by the turn loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// Action completed, time passes
    Success,
    /// Action refused, no time passes
    NoTime,
    /// Player backed out of a prompt, no time passes
    Cancelled,
}

impl ActionResult {
    /// Whether the world should advance after this command
    pub const fn consumes_turn(&self) -> bool {
        matches!(self, ActionResult::Success)
    }
}

/// Restriction passed to item selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFilter {
    Weapon,
    Ring,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            ItemFilter::Weapon => item.kind == ItemKind::Weapon,
            ItemFilter::Ring => item.is_ring(),
        }
    }
}

/// Everything an equipment command needs from outside the core.
///
/// Frontends implement the input methods; the defaults cover the rules the
/// core can decide on its own.
pub trait Hooks {
    /// Ask the player to pick an item from the pack. `None` when they back out.
    fn select_item(&mut self, pack: &Pack, purpose: &str, filter: Option<ItemFilter>)
    -> Option<ItemId>;

    /// Block for one key press
    fn read_key(&mut self) -> char;

    /// Whether `item` may leave its slot. On refusal the explanation has
    /// already been written to `log`.
    fn can_drop(&mut self, item: &Item, log: &mut MessageLog) -> bool {
        if item.is_cursed() {
            log.push("you can't. It appears to be cursed");
            return false;
        }
        true
    }

    /// Run scheduled per-turn and one-shot effects once
    fn waste_time(&mut self, _state: &mut GameState) {}

    /// Wake and anger every monster on the level
    fn aggravate(&mut self, _state: &mut GameState) {}
}
