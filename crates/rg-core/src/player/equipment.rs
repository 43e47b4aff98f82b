//! Equipment slots
//!
//! Each slot owns the item in it. An item is either in the pack or in
//! exactly one slot, never both; the move in and out of a slot is the only
//! way it changes hands.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::object::Item;

/// Ring hands
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub const ALL: [Hand; 2] = [Hand::Left, Hand::Right];

    pub const fn other(self) -> Hand {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }

    /// Parse an `l`/`r` answer, either case
    pub fn from_key(key: char) -> Option<Hand> {
        match key {
            'l' | 'L' => Some(Hand::Left),
            'r' | 'R' => Some(Hand::Right),
            _ => None,
        }
    }
}

/// Equipment positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Weapon,
    Armor,
    Helmet,
    Gloves,
    Boots,
    Shield,
    Ring(Hand),
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Weapon => f.write_str("weapon"),
            Slot::Armor => f.write_str("armor"),
            Slot::Helmet => f.write_str("helmet"),
            Slot::Gloves => f.write_str("gloves"),
            Slot::Boots => f.write_str("boots"),
            Slot::Shield => f.write_str("shield"),
            Slot::Ring(hand) => write!(f, "{hand} ring"),
        }
    }
}

impl Slot {
    /// Armor slots in the order the armor class calculator visits them
    pub const ARMOR_SLOTS: [Slot; 5] =
        [Slot::Armor, Slot::Helmet, Slot::Gloves, Slot::Boots, Slot::Shield];

    /// Message for wearing into an occupied armor slot
    pub const fn already_wearing(&self) -> &'static str {
        match self {
            Slot::Armor => "you are already wearing some armor.",
            Slot::Helmet => "you are already wearing a helmet.",
            Slot::Gloves => "you are already wearing gloves.",
            Slot::Boots => "you are already wearing boots.",
            Slot::Shield => "you are already wearing a shield.",
            Slot::Weapon => "you are already wielding a weapon.",
            Slot::Ring(_) => "you already have a ring on that hand.",
        }
    }
}

/// What the hero has equipped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    weapon: Option<Item>,
    armor: Option<Item>,
    helmet: Option<Item>,
    gloves: Option<Item>,
    boots: Option<Item>,
    shield: Option<Item>,
    ring_left: Option<Item>,
    ring_right: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_ref(&self, slot: Slot) -> &Option<Item> {
        match slot {
            Slot::Weapon => &self.weapon,
            Slot::Armor => &self.armor,
            Slot::Helmet => &self.helmet,
            Slot::Gloves => &self.gloves,
            Slot::Boots => &self.boots,
            Slot::Shield => &self.shield,
            Slot::Ring(Hand::Left) => &self.ring_left,
            Slot::Ring(Hand::Right) => &self.ring_right,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<Item> {
        match slot {
            Slot::Weapon => &mut self.weapon,
            Slot::Armor => &mut self.armor,
            Slot::Helmet => &mut self.helmet,
            Slot::Gloves => &mut self.gloves,
            Slot::Boots => &mut self.boots,
            Slot::Shield => &mut self.shield,
            Slot::Ring(Hand::Left) => &mut self.ring_left,
            Slot::Ring(Hand::Right) => &mut self.ring_right,
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&Item> {
        self.slot_ref(slot).as_ref()
    }

    pub fn is_occupied(&self, slot: Slot) -> bool {
        self.slot_ref(slot).is_some()
    }

    /// Put an item into a slot, returning whatever was there
    pub fn put(&mut self, slot: Slot, item: Item) -> Option<Item> {
        self.slot_mut(slot).replace(item)
    }

    /// Empty a slot
    pub fn take(&mut self, slot: Slot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    pub fn ring(&self, hand: Hand) -> Option<&Item> {
        self.get(Slot::Ring(hand))
    }

    /// Hands with a ring on
    pub fn occupied_hands(&self) -> impl Iterator<Item = Hand> + '_ {
        Hand::ALL.into_iter().filter(|h| self.ring(*h).is_some())
    }

    /// Hands without a ring
    pub fn free_hands(&self) -> impl Iterator<Item = Hand> + '_ {
        Hand::ALL.into_iter().filter(|h| self.ring(*h).is_none())
    }

    /// Every equipped item
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        [
            &self.weapon,
            &self.armor,
            &self.helmet,
            &self.gloves,
            &self.boots,
            &self.shield,
            &self.ring_left,
            &self.ring_right,
        ]
        .into_iter()
        .flatten()
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }
}
