//! Core game constants

/// Armor class of an unarmored hero; lower is better
pub const BASE_AC: i32 = 10;

/// Maximum number of items carried, worn items included
pub const MAX_PACK: usize = 23;

/// Strength bounds enforced when a ring changes strength
pub const STR_MIN: i32 = 3;
pub const STR_MAX: i32 = 31;

/// Starting strength of a new hero
pub const START_STR: i32 = 16;

/// Starting food supply
pub const START_FOOD: i32 = 1300;

/// Lines kept in the message history
pub const MSG_LOG_SIZE: usize = 100;

/// Key that cancels a prompt
pub const ESCAPE: char = '\x1b';
