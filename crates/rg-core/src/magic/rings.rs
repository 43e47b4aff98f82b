//! Rings
//!
//! Ranking rings for automatic equipping, the food each worn ring burns per
//! turn, the bonus shown in a ring's name, and the passive effects applied
//! when a ring goes on or comes off.

use crate::action::Hooks;
use crate::gameloop::GameState;
use crate::object::{Item, RingKind};
use crate::player::{Hand, Player, PlayerFlags, Slot};
use crate::rng::GameRng;

/// Score of an absent ring; loses against any ring
pub const NO_RING_SCORE: i32 = -1000;

/// Penalty added for a cursed ring
pub const CURSE_PENALTY: i32 = 150;

/// How much the hero wants to wear `ring`.
///
/// Used only to rank rings against each other.
pub fn ring_power(ring: Option<&Item>) -> i32 {
    let Some(ring) = ring else {
        return NO_RING_SCORE;
    };

    let m = ring.magnitude;
    let mut score = match ring.ring_kind() {
        Some(RingKind::AddStr) => m.saturating_mul(12).saturating_add(60),
        Some(RingKind::AddDam) => m.saturating_mul(10).saturating_add(55),
        Some(RingKind::AddHit) => m.saturating_mul(8).saturating_add(50),
        Some(RingKind::Protect) => m.saturating_mul(10).saturating_add(50),
        Some(RingKind::Regen) => 45,
        Some(RingKind::Digest) => 35,
        Some(RingKind::Stealth) => 34,
        Some(RingKind::SustStr | RingKind::SustArm) => 32,
        Some(RingKind::Search) => 30,
        Some(RingKind::SeeInvis) => 28,
        Some(RingKind::Nop) => 5,
        Some(RingKind::Teleport | RingKind::Aggr) => -150,
        None => 0,
    };

    if ring.is_cursed() {
        score = score.saturating_sub(CURSE_PENALTY);
    }
    score
}

/// Food used this turn by the ring on `hand`.
///
/// Slow digestion can give food back, so the result may be negative.
pub fn ring_eat(player: &Player, hand: Hand, rng: &mut GameRng) -> i32 {
    let Some(kind) = player.equipment.ring(hand).and_then(Item::ring_kind) else {
        return 0;
    };
    let cost = match kind {
        RingKind::Regen => 2,
        RingKind::SustStr
        | RingKind::SustArm
        | RingKind::Protect
        | RingKind::AddStr
        | RingKind::Stealth => 1,
        RingKind::Search | RingKind::SeeInvis => i32::from(rng.one_in(5)),
        RingKind::AddHit | RingKind::AddDam => i32::from(rng.one_in(3)),
        RingKind::Digest => -(rng.rn2(2) as i32),
        RingKind::Nop | RingKind::Teleport | RingKind::Aggr => 0,
    };
    tracing::trace!(%hand, ?kind, cost, "ring food cost");
    cost
}

/// Food used by the hero in one turn, rings included
pub fn food_cost(player: &Player, rng: &mut GameRng) -> i32 {
    1 + ring_eat(player, Hand::Left, rng) + ring_eat(player, Hand::Right, rng)
}

/// Bonus suffix for an identified ring name, e.g. `" +2"`.
///
/// Empty for unidentified rings and for rings without a bonus.
pub fn ring_num(ring: &Item) -> String {
    if !ring.is_known() {
        return String::new();
    }
    match ring.ring_kind() {
        Some(kind) if kind.has_bonus() => format!(" {:+}", ring.magnitude),
        _ => String::new(),
    }
}

/// Apply the passive effect of the ring now on `hand`
pub fn ring_effect_on(state: &mut GameState, hooks: &mut impl Hooks, hand: Hand) {
    let Some(ring) = state.player.equipment.ring(hand) else {
        return;
    };
    match ring.ring_kind() {
        Some(RingKind::AddStr) => state.player.recompute_strength(),
        Some(RingKind::SeeInvis) => state.player.flags.insert(PlayerFlags::SEE_INVISIBLE),
        Some(RingKind::Aggr) => hooks.aggravate(state),
        _ => {}
    }
}

/// Undo the passive effect of `ring`, just taken off `hand`
pub fn ring_effect_off(state: &mut GameState, ring: &Item, hand: Hand) {
    match ring.ring_kind() {
        Some(RingKind::AddStr) => state.player.recompute_strength(),
        Some(RingKind::SeeInvis) => {
            let other = state.player.equipment.get(Slot::Ring(hand.other()));
            if other.and_then(Item::ring_kind) != Some(RingKind::SeeInvis) {
                state.player.flags.remove(PlayerFlags::SEE_INVISIBLE);
            }
        }
        _ => {}
    }
}
