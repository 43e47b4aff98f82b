//! Magic items
//!
//! Only rings have behavior in this crate.

pub mod rings;
