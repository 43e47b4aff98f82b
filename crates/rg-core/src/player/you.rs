//! The hero

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::{Equipment, Hand};
use crate::consts::{BASE_AC, START_FOOD, START_STR, STR_MAX, STR_MIN};
use crate::object::RingKind;

bitflags! {
    /// Hero capabilities granted by equipment or magic
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct PlayerFlags: u32 {
        /// Can see invisible monsters
        const SEE_INVISIBLE = 0x0001;
    }
}

impl Serialize for PlayerFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PlayerFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(PlayerFlags::from_bits_truncate(bits))
    }
}

/// Combat statistics shown on the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Effective defense, lower is better. Derived from equipment.
    pub armor_class: i32,
    pub strength: i32,
    pub max_strength: i32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            armor_class: BASE_AC,
            strength: START_STR,
            max_strength: START_STR,
        }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub stats: PlayerStats,
    pub equipment: Equipment,

    /// Armor class with nothing worn
    pub base_armor_class: i32,

    /// Strength without ring bonuses
    pub base_strength: i32,

    pub flags: PlayerFlags,

    /// Turns of food left before starving
    pub food_left: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            stats: PlayerStats::default(),
            equipment: Equipment::new(),
            base_armor_class: BASE_AC,
            base_strength: START_STR,
            flags: PlayerFlags::empty(),
            food_left: START_FOOD,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute shown strength from base strength and worn strength rings.
    ///
    /// Only the shown value is clamped to `STR_MIN..=STR_MAX`, so taking a
    /// ring off always lands back on the unaided value. `max_strength`
    /// tracks unaided strength and ignores rings.
    pub fn recompute_strength(&mut self) {
        let bonus = Hand::ALL
            .into_iter()
            .filter_map(|hand| self.equipment.ring(hand))
            .filter(|ring| ring.ring_kind() == Some(RingKind::AddStr))
            .fold(0i32, |acc, ring| acc.saturating_add(ring.magnitude));
        self.stats.strength = self.base_strength.saturating_add(bonus).clamp(STR_MIN, STR_MAX);
        self.stats.max_strength = self.stats.max_strength.max(self.base_strength);
    }

    pub fn can_see_invisible(&self) -> bool {
        self.flags.contains(PlayerFlags::SEE_INVISIBLE)
    }

    /// Spend one turn's worth of food
    pub fn digest(&mut self, cost: i32) {
        self.food_left -= cost;
    }
}
