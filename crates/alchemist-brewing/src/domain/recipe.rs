//! Brewed recipes and the potions they produce.

use alchemist_catalog::domain::ingredient::Ingredient;
use alchemist_catalog::domain::potion::{Potion, PotionCategory};
use alchemist_core::clock::Clock;
use alchemist_core::error::DomainError;
use alchemist_inventory::domain::stock::StockLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::scoring::AttributeScores;

/// Record type of a stored recipe.
pub const RECIPE_RECORD_TYPE: &str = "brewing.recipe";

/// Record type of a stored created potion.
pub const POTION_CREATED_RECORD_TYPE: &str = "brewing.potion_created";

/// Three ingredients, their scores, and the potion they brewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionRecipe {
    /// Recipe identifier.
    pub id: Uuid,
    /// The ingredients, in the order they were given.
    pub ingredients: [Ingredient; 3],
    /// Summed stats.
    pub scores: AttributeScores,
    /// The attribute the potion was drawn from.
    pub winning_attribute: PotionCategory,
    /// The resulting potion.
    pub potion: Potion,
    /// When the recipe was brewed.
    pub created_at: DateTime<Utc>,
}

impl PotionRecipe {
    /// The score that selected the potion.
    #[must_use]
    pub fn winning_score(&self) -> i32 {
        self.scores.get(self.winning_attribute)
    }
}

/// A potion sitting in a player's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPotion {
    /// Inventory entry identifier.
    pub id: Uuid,
    /// The catalog potion.
    pub potion: Potion,
    /// The recipe that produced it.
    pub recipe: PotionRecipe,
    /// Units held and used markers.
    pub stock: StockLevel,
    /// When the potion was brewed.
    pub created_at: DateTime<Utc>,
}

impl CreatedPotion {
    /// A single unit of `potion` brewed by `recipe`.
    #[must_use]
    pub fn new(potion: Potion, recipe: &PotionRecipe, clock: &dyn Clock) -> Self {
        Self {
            id: Uuid::new_v4(),
            potion,
            recipe: recipe.clone(),
            stock: StockLevel::new(1),
            created_at: clock.now(),
        }
    }

    /// Drinks one unit.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the potion is already used up.
    pub fn use_potion(&mut self, clock: &dyn Clock) -> Result<(), DomainError> {
        self.stock.consume(1, clock)
    }
}
