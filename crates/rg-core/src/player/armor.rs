//! Armor class calculation
//!
//! Armor pieces do not stack: the best (lowest) single piece wins.
//! Protection rings stack and are subtracted afterwards. There is no clamp;
//! armor class may go negative.

use super::{Equipment, Hand, Player, Slot};
use crate::flags::ArmorClassMode;
use crate::object::RingKind;

/// Armor class for `equipment`, starting the running minimum at `seed`
pub fn armor_class_of(equipment: &Equipment, seed: i32) -> i32 {
    let mut ac = seed;
    for slot in Slot::ARMOR_SLOTS {
        if let Some(piece) = equipment.get(slot) {
            ac = ac.min(piece.magnitude);
        }
    }
    for hand in Hand::ALL {
        if let Some(ring) = equipment.ring(hand)
            && ring.ring_kind() == Some(RingKind::Protect)
        {
            ac = ac.saturating_sub(ring.magnitude);
        }
    }
    ac
}

impl Player {
    /// Recompute and store the armor class.
    ///
    /// Must run after every slot change that can affect defense.
    pub fn recompute_armor_class(&mut self, mode: ArmorClassMode) {
        let seed = match mode {
            ArmorClassMode::Fixed => self.base_armor_class,
            ArmorClassMode::Incremental => self.stats.armor_class,
        };
        let ac = armor_class_of(&self.equipment, seed);
        tracing::debug!(?mode, seed, ac, "armor class recomputed");
        self.stats.armor_class = ac;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Item, ItemId, ItemKind};

    fn protect(id: u32, bonus: i32) -> Item {
        Item::ring(ItemId(id), RingKind::Protect, bonus, "agate")
    }

    #[test]
    fn test_empty_equipment_keeps_seed() {
        assert_eq!(armor_class_of(&Equipment::new(), 10), 10);
    }

    #[test]
    fn test_best_piece_wins() {
        let mut eq = Equipment::new();
        eq.put(Slot::Armor, Item::armor(ItemId(1), ItemKind::Armor, "ring mail", 4));
        assert_eq!(armor_class_of(&eq, 10), 4);

        eq.put(Slot::Helmet, Item::armor(ItemId(2), ItemKind::Helmet, "helmet", 9));
        assert_eq!(armor_class_of(&eq, 10), 4);

        eq.put(Slot::Shield, Item::armor(ItemId(3), ItemKind::Shield, "shield", 3));
        assert_eq!(armor_class_of(&eq, 10), 3);
    }

    #[test]
    fn test_protection_rings_stack() {
        let mut eq = Equipment::new();
        eq.put(Slot::Armor, Item::armor(ItemId(1), ItemKind::Armor, "ring mail", 4));
        eq.put(Slot::Ring(Hand::Left), protect(2, 3));
        assert_eq!(armor_class_of(&eq, 10), 1);

        eq.put(Slot::Ring(Hand::Right), protect(3, 2));
        assert_eq!(armor_class_of(&eq, 10), -1);
    }

    #[test]
    fn test_other_rings_ignored() {
        let mut eq = Equipment::new();
        eq.put(
            Slot::Ring(Hand::Left),
            Item::ring(ItemId(1), RingKind::AddStr, 3, "ruby"),
        );
        assert_eq!(armor_class_of(&eq, 10), 10);
    }

    #[test]
    fn test_weapon_does_not_count() {
        let mut eq = Equipment::new();
        let mut mace = Item::new(ItemId(1), ItemKind::Weapon, "mace");
        mace.magnitude = 1;
        eq.put(Slot::Weapon, mace);
        assert_eq!(armor_class_of(&eq, 10), 10);
    }

    #[test]
    fn test_fixed_mode_is_idempotent() {
        let mut p = Player::new();
        p.equipment.put(Slot::Ring(Hand::Left), protect(1, 2));
        p.recompute_armor_class(ArmorClassMode::Fixed);
        p.recompute_armor_class(ArmorClassMode::Fixed);
        assert_eq!(p.stats.armor_class, 8);
    }

    #[test]
    fn test_incremental_mode_restacks_rings() {
        let mut p = Player::new();
        p.equipment.put(Slot::Ring(Hand::Left), protect(1, 2));
        p.recompute_armor_class(ArmorClassMode::Incremental);
        assert_eq!(p.stats.armor_class, 8);
        p.recompute_armor_class(ArmorClassMode::Incremental);
        assert_eq!(p.stats.armor_class, 6);
    }

    #[test]
    fn test_incremental_mode_keeps_best_after_removal() {
        let mut p = Player::new();
        p.equipment.put(Slot::Armor, Item::armor(ItemId(1), ItemKind::Armor, "plate mail", 3));
        p.recompute_armor_class(ArmorClassMode::Incremental);
        assert_eq!(p.stats.armor_class, 3);

        p.equipment.take(Slot::Armor);
        p.recompute_armor_class(ArmorClassMode::Incremental);
        assert_eq!(p.stats.armor_class, 3);

        p.recompute_armor_class(ArmorClassMode::Fixed);
        assert_eq!(p.stats.armor_class, 10);
    }

    #[test]
    fn test_huge_protection_saturates() {
        let mut eq = Equipment::new();
        eq.put(Slot::Ring(Hand::Left), protect(1, i32::MAX));
        eq.put(Slot::Ring(Hand::Right), protect(2, i32::MAX));
        assert_eq!(armor_class_of(&eq, 10), i32::MIN);
    }
}
