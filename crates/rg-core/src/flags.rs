//! Game options
//!
//! Options are plain data read once at startup. They can be built in code
//! or parsed from a JSON options document; missing fields take defaults.

use serde::{Deserialize, Serialize};

use crate::consts::MSG_LOG_SIZE;
use crate::error::GameError;

/// How the armor class calculator seeds its running minimum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorClassMode {
    /// Start from the hero's base armor class every time. The result depends
    /// only on what is equipped.
    #[default]
    Fixed,
    /// Start from the armor class currently shown. Repeated recomputation
    /// keeps the best value ever reached and stacks protection rings again.
    Incremental,
}

/// Global game options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flags {
    /// Shorter messages
    pub terse: bool,

    /// Seeding policy for armor class recomputation
    pub armor_class_mode: ArmorClassMode,

    /// Try to put picked-up rings on automatically
    pub auto_equip_rings: bool,

    /// Number of lines kept in the message history
    pub message_log_size: usize,

    /// RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            terse: false,
            armor_class_mode: ArmorClassMode::Fixed,
            auto_equip_rings: true,
            message_log_size: MSG_LOG_SIZE,
            seed: None,
        }
    }
}

impl Flags {
    /// Parse options from a JSON document
    pub fn from_json(text: &str) -> Result<Self, GameError> {
        let flags = serde_json::from_str(text)?;
        Ok(flags)
    }

    /// Return `verbose` unless terse messages are on
    pub fn noterse<'a>(&self, verbose: &'a str) -> &'a str {
        if self.terse { "" } else { verbose }
    }
}
