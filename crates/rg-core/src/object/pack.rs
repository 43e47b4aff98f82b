//! The hero's pack
//!
//! Items in the pack are not equipped. Equipping moves an item out of the
//! pack into a slot; removing it moves it back with its letter unchanged.

use serde::{Deserialize, Serialize};

use super::{Item, ItemId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pack {
    items: Vec<Item>,
}

impl Pack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an item in the pack as is, letter included
    pub fn insert(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove an item from the pack
    pub fn take(&mut self, id: ItemId) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(idx))
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
