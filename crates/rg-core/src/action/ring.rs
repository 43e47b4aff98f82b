//! Putting rings on and taking them off
//!
//! The hero has two ring hands. `ring_on` and `ring_off` are the manual
//! commands; `auto_equip` is called on pickup and may swap out the weaker
//! of two worn rings.

use super::{ActionResult, Hooks, ItemFilter};
use crate::consts::ESCAPE;
use crate::gameloop::GameState;
use crate::magic::rings::{ring_effect_off, ring_effect_on, ring_power};
use crate::object::{ItemId, inv_name, pack_char};
use crate::player::{Hand, Slot};

/// Try to put a ring from the pack on without asking the player.
///
/// Free hands only take rings that score at least zero. With both hands
/// full the lower scoring ring (left on a tie) is replaced if the new one
/// scores strictly higher and the old one can come off. Returns whether the
/// ring went on; a refusal changes nothing.
pub fn auto_equip(state: &mut GameState, hooks: &mut impl Hooks, id: ItemId, silent: bool) -> bool {
    let Some(item) = state.pack.get(id) else {
        return false;
    };
    if !item.is_ring() || item.is_cursed() {
        return false;
    }

    let new_power = ring_power(Some(item));
    let equipment = &state.player.equipment;
    let hand = match (equipment.ring(Hand::Left), equipment.ring(Hand::Right)) {
        (None, _) if new_power >= 0 => Hand::Left,
        (Some(_), None) if new_power >= 0 => Hand::Right,
        (Some(left), Some(right)) => {
            let (left_power, right_power) = (ring_power(Some(left)), ring_power(Some(right)));
            let (worst, worst_power) = if left_power <= right_power {
                (left, left_power)
            } else {
                (right, right_power)
            };
            if new_power <= worst_power {
                tracing::debug!(new_power, worst_power, "auto-equip: candidate not better");
                return false;
            }
            if !hooks.can_drop(worst, &mut state.log) {
                return false;
            }
            if left_power <= right_power {
                Hand::Left
            } else {
                Hand::Right
            }
        }
        _ => {
            tracing::debug!(new_power, "auto-equip: declined harmful ring");
            return false;
        }
    };

    let Some(ring) = state.pack.take(id) else {
        return false;
    };
    if let Some(evicted) = remove_ring(state, hand) {
        tracing::debug!(?evicted, %hand, "auto-equip: evicted ring");
    }
    let name = inv_name(&ring);
    state.player.equipment.put(Slot::Ring(hand), ring);
    ring_effect_on(state, hooks, hand);
    state.update_armor_class();

    tracing::debug!(?id, %hand, new_power, "auto-equip: ring on");
    if !silent {
        state.message(format!("Auto-equipped {name} on {hand} hand!"));
    }
    true
}

/// Put a ring on a hand
pub fn ring_on(state: &mut GameState, hooks: &mut impl Hooks) -> ActionResult {
    let Some(id) = hooks.select_item(&state.pack, "put on", Some(ItemFilter::Ring)) else {
        return ActionResult::Cancelled;
    };
    let Some(item) = state.pack.get(id) else {
        return ActionResult::Cancelled;
    };
    if !ItemFilter::Ring.matches(item) {
        state.message("you can't put that on your finger");
        return ActionResult::NoTime;
    }

    let free: Vec<Hand> = state.player.equipment.free_hands().collect();
    let hand = match free.as_slice() {
        [hand] => *hand,
        [_, _] => match gethand(state, hooks) {
            Some(hand) => hand,
            None => return ActionResult::Cancelled,
        },
        _ => {
            state.message("you already have a ring on each hand");
            return ActionResult::NoTime;
        }
    };

    let Some(ring) = state.pack.take(id) else {
        return ActionResult::Cancelled;
    };
    state.player.equipment.put(Slot::Ring(hand), ring);
    ring_effect_on(state, hooks, hand);
    state.update_armor_class();

    let Some(ring) = state.player.equipment.ring(hand) else {
        return ActionResult::Success;
    };
    let msg = format!(
        "{}wearing {} ({})",
        state.flags.noterse("you are now "),
        inv_name(ring),
        pack_char(ring)
    );
    state.message(msg);
    ActionResult::Success
}

/// Take a ring off
pub fn ring_off(state: &mut GameState, hooks: &mut impl Hooks) -> ActionResult {
    let worn: Vec<Hand> = state.player.equipment.occupied_hands().collect();
    let hand = match worn.as_slice() {
        [] => {
            state.message("you aren't wearing any rings");
            return ActionResult::NoTime;
        }
        [hand] => *hand,
        _ => match gethand(state, hooks) {
            Some(hand) => hand,
            None => return ActionResult::Cancelled,
        },
    };

    let Some(ring) = state.player.equipment.ring(hand) else {
        state.message("not wearing such a ring");
        return ActionResult::NoTime;
    };
    if !hooks.can_drop(ring, &mut state.log) {
        return ActionResult::NoTime;
    }

    let (name, letter) = (inv_name(ring), pack_char(ring));
    remove_ring(state, hand);
    state.update_armor_class();

    state.message(format!("was wearing {name}({letter})"));
    ActionResult::Success
}

/// Take the ring off `hand`, undo its effect and return it to the pack.
///
/// Does not recompute armor class; callers do that once they are done.
pub(crate) fn remove_ring(state: &mut GameState, hand: Hand) -> Option<ItemId> {
    let ring = state.player.equipment.take(Slot::Ring(hand))?;
    ring_effect_off(state, &ring, hand);
    let id = ring.id;
    state.pack.insert(ring);
    Some(id)
}

/// Ask which hand; `None` if the player escapes
fn gethand(state: &mut GameState, hooks: &mut impl Hooks) -> Option<Hand> {
    loop {
        state.message("left hand or right hand? ");
        let key = hooks.read_key();
        if key == ESCAPE {
            return None;
        }
        if let Some(hand) = Hand::from_key(key) {
            return Some(hand);
        }
        state.message("please type L or R");
    }
}
