//! Object system
//!
//! Item instances, the hero's pack, and display-name formatting.

mod obj;
mod objname;
mod pack;

pub use obj::{Item, ItemFlags, ItemId, ItemKind, RingKind};
pub use objname::{inv_name, pack_char};
pub use pack::Pack;
