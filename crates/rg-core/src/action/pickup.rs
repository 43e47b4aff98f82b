//! Picking items up

use super::Hooks;
use super::ring::auto_equip;
use crate::error::GameError;
use crate::gameloop::GameState;
use crate::object::{Item, inv_name};

/// Put a newly found item in the pack.
///
/// Rings are offered to [`auto_equip`] when the `auto_equip_rings` option is
/// on. Returns the item's pack letter.
pub fn pick_up(state: &mut GameState, hooks: &mut impl Hooks, item: Item) -> Result<char, GameError> {
    let id = item.id;
    let is_ring = item.is_ring();
    let name = inv_name(&item);
    let letter = state.add_to_pack(item)?;
    state.message(format!("you now have {name} ({letter})"));

    if is_ring && state.flags.auto_equip_rings {
        auto_equip(state, hooks, id, false);
    }
    Ok(letter)
}
