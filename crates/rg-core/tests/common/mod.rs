//! Shared helpers for integration tests

#![allow(dead_code)]

use std::collections::VecDeque;

use rg_core::action::{Hooks, ItemFilter};
use rg_core::object::{Item, ItemId, ItemKind, Pack, RingKind};
use rg_core::player::{Hand, Slot};
use rg_core::{ESCAPE, Flags, GameState};

/// Frontend double that answers prompts from queues
#[derive(Default)]
pub struct Scripted {
    pub picks: VecDeque<ItemId>,
    pub keys: VecDeque<char>,
    pub ticks: u32,
    pub aggravated: u32,
    pub purposes: Vec<String>,
}

impl Scripted {
    pub fn pick(id: ItemId) -> Self {
        Self {
            picks: VecDeque::from([id]),
            ..Self::default()
        }
    }

    pub fn keys(keys: &str) -> Self {
        Self {
            keys: keys.chars().collect(),
            ..Self::default()
        }
    }
}

impl Hooks for Scripted {
    fn select_item(&mut self, _pack: &Pack, purpose: &str, _filter: Option<ItemFilter>) -> Option<ItemId> {
        self.purposes.push(purpose.to_string());
        self.picks.pop_front()
    }

    fn read_key(&mut self) -> char {
        self.keys.pop_front().unwrap_or(ESCAPE)
    }

    fn waste_time(&mut self, _state: &mut GameState) {
        self.ticks += 1;
    }

    fn aggravate(&mut self, _state: &mut GameState) {
        self.aggravated += 1;
    }
}

pub fn new_game() -> GameState {
    GameState::new(Flags {
        seed: Some(2024),
        ..Flags::default()
    })
}

pub fn carry(state: &mut GameState, item: Item) -> ItemId {
    let id = item.id;
    state.add_to_pack(item).expect("pack has room");
    id
}

pub fn carry_armor(state: &mut GameState, kind: ItemKind, ac: i32) -> ItemId {
    let id = state.new_item_id();
    carry(state, Item::armor(id, kind, format!("{kind:?}").to_lowercase(), ac))
}

pub fn carry_ring(state: &mut GameState, kind: RingKind, magnitude: i32) -> ItemId {
    let id = state.new_item_id();
    carry(state, Item::ring(id, kind, magnitude, "moonstone"))
}

/// Put a ring straight on a hand, bypassing commands
pub fn force_ring(state: &mut GameState, id: ItemId, hand: Hand) {
    let ring = state.pack.take(id).expect("ring in pack");
    state.player.equipment.put(Slot::Ring(hand), ring);
}

pub fn ring_on_hand(state: &GameState, hand: Hand) -> Option<ItemId> {
    state.player.equipment.ring(hand).map(|r| r.id)
}
