//! Scripted hooks for command tests

use std::collections::VecDeque;

use super::{Hooks, ItemFilter};
use crate::ESCAPE;
use crate::gameloop::GameState;
use crate::object::{ItemId, Pack};

/// Answers prompts from a queue; an empty queue means the player escapes
#[derive(Default)]
pub(crate) struct Script {
    pub picks: VecDeque<ItemId>,
    pub keys: VecDeque<char>,
    pub ticks: u32,
    pub aggravated: u32,
    /// Item a monster steals from the pack during the next tick
    pub stolen: Option<ItemId>,
}

impl Script {
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

impl Hooks for Script {
    fn select_item(&mut self, _: &Pack, _: &str, _: Option<ItemFilter>) -> Option<ItemId> {
        self.picks.pop_front()
    }

    fn read_key(&mut self) -> char {
        self.keys.pop_front().unwrap_or(ESCAPE)
    }

    fn waste_time(&mut self, state: &mut GameState) {
        self.ticks += 1;
        if let Some(id) = self.stolen.take() {
            state.pack.take(id);
        }
    }

    fn aggravate(&mut self, _state: &mut GameState) {
        self.aggravated += 1;
    }
}
