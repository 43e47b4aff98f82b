//! Player system
//!
//! The hero, their equipment, and the armor class derived from it.

mod armor;
mod equipment;
mod you;

pub use armor::armor_class_of;
pub use equipment::{Equipment, Hand, Slot};
pub use you::{Player, PlayerFlags, PlayerStats};
