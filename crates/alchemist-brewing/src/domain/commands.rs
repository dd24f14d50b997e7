//! Commands for the Brewing context.

use alchemist_catalog::domain::potion::PotionCategory;
use alchemist_core::command::Command;
use uuid::Uuid;

/// Command to brew a potion from three pantry ingredients.
#[derive(Debug, Clone)]
pub struct BrewPotion {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The player brewing.
    pub player_id: Uuid,
    /// Catalog ids of the ingredients to combine.
    pub ingredient_ids: Vec<u32>,
    /// The attribute the player picked, when the potion brewer talent offers
    /// a choice.
    pub chosen_attribute: Option<PotionCategory>,
}

impl Command for BrewPotion {
    fn command_type(&self) -> &'static str {
        "brewing.brew_potion"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn player_id(&self) -> Uuid {
        self.player_id
    }
}
