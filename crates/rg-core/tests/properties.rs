//! Property tests for scoring, armor class and allocation invariants

mod common;

use common::*;
use proptest::prelude::*;
use rg_core::action::auto_equip;
use rg_core::magic::rings::ring_power;
use rg_core::object::{Item, ItemFlags, ItemId, ItemKind, RingKind};
use rg_core::player::{Equipment, Hand, Slot, armor_class_of};
use rg_core::BASE_AC;
use strum::IntoEnumIterator;

fn ring_kind() -> impl Strategy<Value = RingKind> {
    let kinds: Vec<RingKind> = RingKind::iter().collect();
    proptest::sample::select(kinds)
}

fn armor_slot() -> impl Strategy<Value = (ItemKind, Slot)> {
    proptest::sample::select(vec![
        (ItemKind::Armor, Slot::Armor),
        (ItemKind::Helmet, Slot::Helmet),
        (ItemKind::Gloves, Slot::Gloves),
        (ItemKind::Boots, Slot::Boots),
        (ItemKind::Shield, Slot::Shield),
    ])
}

proptest! {
    #[test]
    fn absent_ring_loses_to_any_uncursed_ring(kind in ring_kind(), magnitude in -3i32..=3) {
        let ring = Item::ring(ItemId(1), kind, magnitude, "agate");
        prop_assert!(ring_power(None) < ring_power(Some(&ring)));
    }

    #[test]
    fn curse_always_lowers_score(kind in ring_kind(), magnitude in -3i32..=3) {
        let ring = Item::ring(ItemId(1), kind, magnitude, "agate");
        let cursed = ring.clone().with_flags(ItemFlags::CURSED);
        prop_assert!(ring_power(Some(&cursed)) < ring_power(Some(&ring)));
    }

    #[test]
    fn armor_class_is_best_piece_minus_protection(
        pieces in proptest::collection::vec((armor_slot(), -5i32..=10), 0..5),
        left in -3i32..=3,
        right in -3i32..=3,
    ) {
        let mut equipment = Equipment::new();
        for (i, ((kind, slot), ac)) in pieces.iter().enumerate() {
            equipment.put(*slot, Item::armor(ItemId(i as u32 + 1), *kind, "piece", *ac));
        }
        let best = equipment
            .iter()
            .filter(|i| i.kind.is_armor_piece())
            .map(|i| i.magnitude)
            .fold(BASE_AC, i32::min);
        equipment.put(Slot::Ring(Hand::Left), Item::ring(ItemId(90), RingKind::Protect, left, "agate"));
        equipment.put(Slot::Ring(Hand::Right), Item::ring(ItemId(91), RingKind::Protect, right, "agate"));

        prop_assert_eq!(armor_class_of(&equipment, BASE_AC), best - left - right);
    }

    #[test]
    fn auto_equip_never_puts_negative_ring_on_free_hand(kind in ring_kind(), magnitude in -3i32..=3) {
        let mut state = new_game();
        let id = carry_ring(&mut state, kind, magnitude);
        let power = ring_power(state.pack.get(id));
        let equipped = auto_equip(&mut state, &mut Scripted::default(), id, true);

        prop_assert_eq!(equipped, power >= 0);
        prop_assert_eq!(state.pack.contains(id), !equipped);
    }

    #[test]
    fn auto_equip_keeps_ring_count_bounded(kinds in proptest::collection::vec((ring_kind(), -3i32..=3), 1..8)) {
        let mut state = new_game();
        for (kind, magnitude) in kinds {
            let id = carry_ring(&mut state, kind, magnitude);
            auto_equip(&mut state, &mut Scripted::default(), id, true);
            prop_assert!(state.player.equipment.occupied_hands().count() <= 2);
            prop_assert_eq!(state.player.stats.armor_class, armor_class_of(&state.player.equipment, BASE_AC));
        }
    }
}
