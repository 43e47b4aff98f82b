//! Wearing, wielding and removing equipment
//!
//! Armor pieces go on through `wear`, the weapon through `wield`. `take_off`
//! only handles body armor; `unequip` clears any slot.

use super::ring::remove_ring;
use super::{ActionResult, Hooks, ItemFilter};
use crate::gameloop::GameState;
use crate::object::{ItemFlags, inv_name, pack_char};
use crate::player::{Hand, Slot};

/// Wear a piece of armor
pub fn wear(state: &mut GameState, hooks: &mut impl Hooks) -> ActionResult {
    let Some(id) = hooks.select_item(&state.pack, "wear", None) else {
        return ActionResult::Cancelled;
    };
    let Some(kind) = state.pack.get(id).map(|i| i.kind) else {
        return ActionResult::Cancelled;
    };

    let Some(slot) = kind.wear_slot() else {
        state.message("you can't wear that");
        return ActionResult::NoTime;
    };
    if state.player.equipment.is_occupied(slot) {
        state.message(slot.already_wearing());
        return ActionResult::NoTime;
    }

    hooks.waste_time(state);

    // The tick runs arbitrary world effects; the item may be gone now.
    let Some(mut item) = state.pack.take(id) else {
        return ActionResult::Success;
    };
    item.flags.insert(ItemFlags::KNOWN);
    let name = inv_name(&item);
    if let Some(old) = state.player.equipment.put(slot, item) {
        state.pack.insert(old);
    }
    state.update_armor_class();

    tracing::debug!(%slot, item = %name, ac = state.player.stats.armor_class, "wear");
    state.message(format!("you are now wearing {name}"));
    ActionResult::Success
}

/// Take off body armor
pub fn take_off(state: &mut GameState, hooks: &mut impl Hooks) -> ActionResult {
    let Some(armor) = state.player.equipment.get(Slot::Armor) else {
        state.message("you aren't wearing any armor");
        return ActionResult::NoTime;
    };
    if !hooks.can_drop(armor, &mut state.log) {
        return ActionResult::NoTime;
    }

    let (letter, name) = (pack_char(armor), inv_name(armor));
    state.unequip_to_pack(Slot::Armor);
    state.update_armor_class();

    state.message(format!("you used to be wearing {letter}) {name}"));
    ActionResult::Success
}

/// What the first unequip key selects
enum Choice {
    Slot(Slot),
    Ring,
}

impl Choice {
    fn from_key(key: char) -> Option<Choice> {
        let slot = match key {
            'w' => Slot::Weapon,
            'a' => Slot::Armor,
            'h' => Slot::Helmet,
            'g' => Slot::Gloves,
            'b' => Slot::Boots,
            's' => Slot::Shield,
            'r' => return Some(Choice::Ring),
            _ => return None,
        };
        Some(Choice::Slot(slot))
    }
}

/// Remove any equipped item
pub fn unequip(state: &mut GameState, hooks: &mut impl Hooks) -> ActionResult {
    state.message(
        "Unequip which item? (w)eapon, (a)rmor, (h)elmet, (g)loves, (b)oots, (s)hield, (r)ing",
    );
    let slot = match Choice::from_key(hooks.read_key()) {
        Some(Choice::Slot(slot)) => slot,
        Some(Choice::Ring) => match which_ring(state, hooks) {
            Some(hand) => Slot::Ring(hand),
            None => return ActionResult::NoTime,
        },
        None => {
            state.message("Invalid choice");
            return ActionResult::NoTime;
        }
    };

    let Some(item) = state.player.equipment.get(slot) else {
        state.message("Not equipped");
        return ActionResult::NoTime;
    };
    if !hooks.can_drop(item, &mut state.log) {
        return ActionResult::NoTime;
    }

    let name = inv_name(item);
    match slot {
        Slot::Ring(hand) => {
            remove_ring(state, hand);
        }
        _ => {
            state.unequip_to_pack(slot);
        }
    }
    state.update_armor_class();

    tracing::debug!(%slot, item = %name, "unequip");
    state.message(format!("you removed {name}"));
    ActionResult::Success
}

/// Resolve the ring hand for `unequip`; messages and returns `None` when
/// there is nothing to pick or the answer is not l/r.
fn which_ring(state: &mut GameState, hooks: &mut impl Hooks) -> Option<Hand> {
    let worn: Vec<Hand> = state.player.equipment.occupied_hands().collect();
    match worn.as_slice() {
        [] => {
            state.message("No ring equipped");
            None
        }
        [hand] => Some(*hand),
        _ => {
            state.message("Left or right ring? (l/r)");
            let hand = Hand::from_key(hooks.read_key());
            if hand.is_none() {
                state.message("Invalid");
            }
            hand
        }
    }
}

/// Wield a weapon
pub fn wield(state: &mut GameState, hooks: &mut impl Hooks) -> ActionResult {
    if let Some(current) = state.player.equipment.get(Slot::Weapon)
        && !hooks.can_drop(current, &mut state.log)
    {
        return ActionResult::NoTime;
    }

    let Some(id) = hooks.select_item(&state.pack, "wield", Some(ItemFilter::Weapon)) else {
        return ActionResult::Cancelled;
    };
    let Some(item) = state.pack.get(id) else {
        return ActionResult::Cancelled;
    };
    if !ItemFilter::Weapon.matches(item) {
        state.message("you can't wield that");
        return ActionResult::NoTime;
    }

    let (letter, name) = (pack_char(item), inv_name(item));
    if let Err(err) = state.equip_from_pack(id, Slot::Weapon) {
        tracing::warn!(%err, "wield target vanished");
        return ActionResult::NoTime;
    }

    state.message(format!("you are now wielding {name} ({letter})"));
    ActionResult::Success
}
