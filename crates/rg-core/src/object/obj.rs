//! Item instances

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::player::Slot;

/// Unique identifier for item instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    pub fn next(self) -> Self {
        ItemId(self.0 + 1)
    }
}

/// Ring subtypes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum RingKind {
    #[strum(serialize = "protection")]
    Protect,
    #[strum(serialize = "add strength")]
    AddStr,
    #[strum(serialize = "sustain strength")]
    SustStr,
    #[strum(serialize = "searching")]
    Search,
    #[strum(serialize = "see invisible")]
    SeeInvis,
    #[strum(serialize = "adornment")]
    Nop,
    #[strum(serialize = "aggravate monster")]
    Aggr,
    #[strum(serialize = "dexterity")]
    AddHit,
    #[strum(serialize = "increase damage")]
    AddDam,
    #[strum(serialize = "regeneration")]
    Regen,
    #[strum(serialize = "slow digestion")]
    Digest,
    #[strum(serialize = "teleportation")]
    Teleport,
    #[strum(serialize = "stealth")]
    Stealth,
    #[strum(serialize = "maintain armor")]
    SustArm,
}

impl RingKind {
    /// Rings whose magnitude is a bonus worth showing
    pub const fn has_bonus(&self) -> bool {
        matches!(
            self,
            RingKind::Protect | RingKind::AddStr | RingKind::AddDam | RingKind::AddHit
        )
    }
}

/// What an item is. Only rings carry a subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Armor,
    Helmet,
    Gloves,
    Boots,
    Shield,
    Ring(RingKind),
    Food,
    Potion,
    Scroll,
    Amulet,
    Gold,
}

impl ItemKind {
    /// The equipment slot a wearable item goes into.
    ///
    /// Weapons are wielded and rings need a hand, so both return `None`.
    pub const fn wear_slot(&self) -> Option<Slot> {
        match self {
            ItemKind::Armor => Some(Slot::Armor),
            ItemKind::Helmet => Some(Slot::Helmet),
            ItemKind::Gloves => Some(Slot::Gloves),
            ItemKind::Boots => Some(Slot::Boots),
            ItemKind::Shield => Some(Slot::Shield),
            _ => None,
        }
    }

    pub const fn is_armor_piece(&self) -> bool {
        self.wear_slot().is_some()
    }

    pub const fn ring_kind(&self) -> Option<RingKind> {
        match self {
            ItemKind::Ring(kind) => Some(*kind),
            _ => None,
        }
    }
}

bitflags! {
    /// Per-item state bits
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ItemFlags: u8 {
        /// Properties revealed to the player
        const KNOWN = 0x01;
        /// Cannot be removed voluntarily
        const CURSED = 0x02;
    }
}

impl Serialize for ItemFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ItemFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(ItemFlags::from_bits_truncate(bits))
    }
}

/// Item instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,

    pub kind: ItemKind,

    /// Armor: the armor class the piece gives (lower is better).
    /// Rings: the bonus.
    pub magnitude: i32,

    pub flags: ItemFlags,

    /// Pack letter; `'\0'` until the item enters the pack
    pub letter: char,

    /// Base name, e.g. "ring mail"
    pub name: String,

    /// Unidentified look, e.g. "garnet" for a ring
    pub appearance: String,
}

impl Item {
    pub fn new(id: ItemId, kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            magnitude: 0,
            flags: ItemFlags::empty(),
            letter: '\0',
            name: name.into(),
            appearance: String::new(),
        }
    }

    /// A ring of the given kind with a stone appearance
    pub fn ring(id: ItemId, kind: RingKind, magnitude: i32, stone: impl Into<String>) -> Self {
        let mut ring = Self::new(id, ItemKind::Ring(kind), "ring");
        ring.magnitude = magnitude;
        ring.appearance = stone.into();
        ring
    }

    /// An armor piece granting armor class `ac`
    pub fn armor(id: ItemId, kind: ItemKind, name: impl Into<String>, ac: i32) -> Self {
        let mut piece = Self::new(id, kind, name);
        piece.magnitude = ac;
        piece
    }

    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn is_known(&self) -> bool {
        self.flags.contains(ItemFlags::KNOWN)
    }

    pub fn is_cursed(&self) -> bool {
        self.flags.contains(ItemFlags::CURSED)
    }

    pub fn is_ring(&self) -> bool {
        matches!(self.kind, ItemKind::Ring(_))
    }

    pub fn ring_kind(&self) -> Option<RingKind> {
        self.kind.ring_kind()
    }
}
