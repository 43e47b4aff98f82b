//! Item naming
//!
//! Names follow what the player knows: an unidentified ring shows only its
//! stone, an identified one its power and bonus.

use super::{Item, ItemKind};
use crate::magic::rings::ring_num;

/// Full inventory name of an item
pub fn inv_name(item: &Item) -> String {
    match item.kind {
        ItemKind::Ring(kind) => {
            if item.is_known() {
                format!("ring of {}{}", kind, ring_num(item))
            } else {
                format!("{} ring", item.appearance)
            }
        }
        kind if kind.is_armor_piece() && item.is_known() => {
            format!("{} [{}]", item.name, item.magnitude)
        }
        _ => item.name.clone(),
    }
}

/// Pack letter of an item
pub fn pack_char(item: &Item) -> char {
    item.letter
}
