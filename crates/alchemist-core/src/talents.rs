//! Player talent snapshot.
//!
//! Talents are configured outside the engine. Every engine call receives a
//! read-only snapshot; nothing here is cached or mutated.

use serde::{Deserialize, Serialize};

/// The talents that gate optional foraging and brewing branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TalentConfig {
    /// Common and uncommon forages yield two units instead of one.
    pub double_forage_talent: bool,
    /// Uncommon and rare brews also leave a free common potion behind.
    pub cauldron_bonus: bool,
    /// Lets the player pick between the top two scores and grants a
    /// percentage chance of a second potion.
    pub potion_brewer_talent: bool,
    /// Success threshold for the potion brewer d100 roll.
    pub potion_brewer_level: u32,
}

impl Default for TalentConfig {
    fn default() -> Self {
        Self {
            double_forage_talent: false,
            cauldron_bonus: false,
            potion_brewer_talent: false,
            potion_brewer_level: 1,
        }
    }
}
