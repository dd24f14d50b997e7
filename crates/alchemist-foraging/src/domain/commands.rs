//! Commands for the Foraging context.

use alchemist_catalog::domain::ingredient::Region;
use alchemist_core::command::Command;
use uuid::Uuid;

use super::dice::{AdvantageMode, BonusDie};

/// Command to make a foraging attempt.
#[derive(Debug, Clone)]
pub struct ForageIngredient {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The player foraging.
    pub player_id: Uuid,
    /// Where the player forages.
    pub region: Region,
    /// The skill used for the check, as named by the table.
    pub test_type: String,
    /// Flat modifier added to the check.
    pub modifier: i32,
    /// Bonus die rolled ahead of the check, if any.
    pub bonus_die: Option<BonusDie>,
    /// Advantage mode for the check die.
    pub advantage: AdvantageMode,
}

impl Command for ForageIngredient {
    fn command_type(&self) -> &'static str {
        "foraging.forage_ingredient"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn player_id(&self) -> Uuid {
        self.player_id
    }
}
