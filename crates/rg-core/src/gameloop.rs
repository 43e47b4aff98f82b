//! Game state aggregate
//!
//! Everything the equipment commands touch lives here and is passed around
//! by `&mut`. Commands run one at a time to completion.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_PACK;
use crate::error::GameError;
use crate::flags::Flags;
use crate::magic::rings;
use crate::message::MessageLog;
use crate::object::{Item, ItemId, Pack};
use crate::player::{Hand, Player, Slot};
use crate::rng::GameRng;

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub pack: Pack,
    pub rng: GameRng,
    pub flags: Flags,
    pub log: MessageLog,
    next_item_id: ItemId,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Flags::default())
    }
}

impl GameState {
    /// Create a new game with the given options
    pub fn new(flags: Flags) -> Self {
        let rng = match flags.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        tracing::debug!(seed = rng.seed(), mode = ?flags.armor_class_mode, "new game");
        let mut player = Player::new();
        player.recompute_armor_class(flags.armor_class_mode);
        Self {
            player,
            pack: Pack::new(),
            rng,
            log: MessageLog::new(flags.message_log_size),
            flags,
            next_item_id: ItemId(1),
        }
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        self.log.push(msg);
    }

    /// Allocate an id for a newly generated item
    pub fn new_item_id(&mut self) -> ItemId {
        let id = self.next_item_id;
        self.next_item_id = id.next();
        id
    }

    /// Items carried, equipped ones included
    pub fn carried_count(&self) -> usize {
        self.pack.len() + self.player.equipment.count()
    }

    /// Put a new item in the pack under the first free letter.
    ///
    /// Letters held by equipped items stay reserved, so an item returning
    /// from a slot never collides with a newer one.
    pub fn add_to_pack(&mut self, mut item: Item) -> Result<char, GameError> {
        if self.carried_count() >= MAX_PACK {
            return Err(GameError::PackFull { capacity: MAX_PACK });
        }
        let used: HashSet<char> = self
            .pack
            .iter()
            .chain(self.player.equipment.iter())
            .map(|i| i.letter)
            .collect();
        let letter = ('a'..='z')
            .find(|c| !used.contains(c))
            .ok_or(GameError::PackFull { capacity: MAX_PACK })?;
        item.letter = letter;
        self.pack.insert(item);
        Ok(letter)
    }

    /// Move an item from the pack into a slot; a previous occupant goes back
    /// to the pack
    pub(crate) fn equip_from_pack(&mut self, id: ItemId, slot: Slot) -> Result<(), GameError> {
        let item = self.pack.take(id).ok_or(GameError::NoSuchItem(id))?;
        if let Some(old) = self.player.equipment.put(slot, item) {
            self.pack.insert(old);
        }
        Ok(())
    }

    /// Empty a slot back into the pack
    pub(crate) fn unequip_to_pack(&mut self, slot: Slot) -> Option<ItemId> {
        let item = self.player.equipment.take(slot)?;
        let id = item.id;
        self.pack.insert(item);
        Some(id)
    }

    /// Recompute the hero's armor class with the configured policy
    pub fn update_armor_class(&mut self) {
        self.player.recompute_armor_class(self.flags.armor_class_mode);
    }

    /// Food used this turn by the ring on `hand`
    pub fn ring_eat(&mut self, hand: Hand) -> i32 {
        rings::ring_eat(&self.player, hand, &mut self.rng)
    }

    /// Spend one turn of food: one unit plus whatever the rings cost
    pub fn digest(&mut self) -> i32 {
        let cost = rings::food_cost(&self.player, &mut self.rng);
        self.player.digest(cost);
        cost
    }
}
