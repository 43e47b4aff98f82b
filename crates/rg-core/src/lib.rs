//! rg-core: equipment and ring allocation for a Rogue clone
//!
//! This crate holds the part of the game that decides what the hero is
//! wearing: armor pieces, the wielded weapon and the two ring fingers. It
//! keeps the derived armor class in step with the equipment and picks rings
//! automatically on pickup.
//!
//! Everything the core cannot decide for itself (which item the player
//! selects, which key they press, whether a cursed item may leave its slot,
//! what the scheduled world effects do) goes through [`action::Hooks`].

pub mod action;
pub mod magic;
pub mod message;
pub mod object;
pub mod player;

mod consts;
mod error;
mod flags;
mod gameloop;
mod rng;

pub use consts::*;
pub use error::GameError;
pub use flags::{ArmorClassMode, Flags};
pub use gameloop::GameState;
pub use rng::GameRng;
