//! Scores three ingredients and ranks the attributes.
//!
//! Ties are broken by a fixed priority, combat over utility over whimsy,
//! so the same ingredients always produce the same winner.

use std::collections::HashSet;

use alchemist_catalog::domain::ingredient::Ingredient;
use alchemist_catalog::domain::potion::PotionCategory;
use alchemist_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of ingredients in every brew.
pub const RECIPE_SIZE: usize = 3;

/// Summed stats of a brew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeScores {
    /// Sum of combat stats.
    pub combat: i32,
    /// Sum of utility stats.
    pub utility: i32,
    /// Sum of whimsy stats.
    pub whimsy: i32,
}

impl AttributeScores {
    /// Returns the score of one attribute.
    #[must_use]
    pub fn get(&self, attribute: PotionCategory) -> i32 {
        match attribute {
            PotionCategory::Combat => self.combat,
            PotionCategory::Utility => self.utility,
            PotionCategory::Whimsy => self.whimsy,
        }
    }

    /// All three scores, highest first, ties in priority order.
    #[must_use]
    pub fn ranked(&self) -> [AttributeScore; 3] {
        let mut ranked = PotionCategory::ALL.map(|attribute| AttributeScore {
            attribute,
            value: self.get(attribute),
        });
        ranked.sort_by(|a, b| b.value.cmp(&a.value).then(a.attribute.cmp(&b.attribute)));
        ranked
    }
}

/// One attribute and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeScore {
    /// The attribute.
    pub attribute: PotionCategory,
    /// Its summed score.
    pub value: i32,
}

/// The scores of a brew and the attribute that wins them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Summed stats.
    pub scores: AttributeScores,
    /// Highest scoring attribute after the tie-break.
    pub winning_attribute: PotionCategory,
}

impl ScoreCard {
    /// The winning attribute's score.
    #[must_use]
    pub fn winning_score(&self) -> i32 {
        self.scores.get(self.winning_attribute)
    }

    /// The top two scores and whether the player may pick between them.
    ///
    /// Choosing requires the potion brewer talent and a strict gap between
    /// the top two; a tie leaves the tie-break winner.
    #[must_use]
    pub fn choice(&self, potion_brewer_enabled: bool) -> ScoreChoice {
        let [first, second, _] = self.scores.ranked();
        ScoreChoice {
            scores: vec![first, second],
            can_choose: potion_brewer_enabled && first.value != second.value,
        }
    }
}

/// The top two scores offered to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreChoice {
    /// Top two scores, highest first.
    pub scores: Vec<AttributeScore>,
    /// Whether the player may pick either of them.
    pub can_choose: bool,
}

impl ScoreChoice {
    /// Whether `attribute` is one of the offered scores.
    #[must_use]
    pub fn offers(&self, attribute: PotionCategory) -> bool {
        self.scores.iter().any(|score| score.attribute == attribute)
    }
}

/// Checks that a brew has exactly three distinct ingredients.
///
/// # Errors
///
/// Returns `DomainError::InvalidRecipeComposition` otherwise.
pub fn validate_composition(ingredients: &[Ingredient]) -> Result<(), DomainError> {
    if ingredients.len() != RECIPE_SIZE {
        return Err(DomainError::InvalidRecipeComposition(format!(
            "expected {RECIPE_SIZE} ingredients, got {}",
            ingredients.len()
        )));
    }
    let mut seen = HashSet::new();
    for ingredient in ingredients {
        if !seen.insert(ingredient.id) {
            return Err(DomainError::InvalidRecipeComposition(format!(
                "ingredient {} appears more than once",
                ingredient.id
            )));
        }
    }
    Ok(())
}

/// Sums the stats of three ingredients and picks the winning attribute.
///
/// # Errors
///
/// Returns `DomainError::InvalidRecipeComposition` unless there are exactly
/// three distinct ingredients.
pub fn score(ingredients: &[Ingredient]) -> Result<ScoreCard, DomainError> {
    validate_composition(ingredients)?;
    let scores = AttributeScores {
        combat: ingredients.iter().map(|i| i.combat).sum(),
        utility: ingredients.iter().map(|i| i.utility).sum(),
        whimsy: ingredients.iter().map(|i| i.whimsy).sum(),
    };
    let [winner, _, _] = scores.ranked();
    Ok(ScoreCard {
        scores,
        winning_attribute: winner.attribute,
    })
}

/// The top two scores for three ingredients.
///
/// # Errors
///
/// Returns `DomainError::InvalidRecipeComposition` unless there are exactly
/// three distinct ingredients.
pub fn available_scores(
    ingredients: &[Ingredient],
    potion_brewer_enabled: bool,
) -> Result<ScoreChoice, DomainError> {
    Ok(score(ingredients)?.choice(potion_brewer_enabled))
}
