//! Turns three ingredients into a brew result.
//!
//! Scoring and selection produce the primary recipe. The cauldron bonus and
//! potion brewer talents are layered on top, each gated by the injected
//! `TalentConfig`.

use alchemist_catalog::domain::catalog::CatalogPort;
use alchemist_catalog::domain::ingredient::Ingredient;
use alchemist_catalog::domain::potion::{Potion, PotionCategory, PotionRarity};
use alchemist_core::clock::Clock;
use alchemist_core::error::DomainError;
use alchemist_core::rng::DeterministicRng;
use alchemist_core::talents::TalentConfig;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recipe::PotionRecipe;
use super::scoring::{self, ScoreCard, ScoreChoice};
use super::selector::{select_potion, select_remains_potion};

/// The d100 roll of the potion brewer talent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionBrewerRoll {
    /// The rolled percentage.
    pub roll: u32,
    /// The level the roll had to meet or beat from below.
    pub level: u32,
    /// Whether `roll <= level`.
    pub success: bool,
}

/// A finished brew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrewResult {
    /// The primary recipe.
    pub recipe: PotionRecipe,
    /// Whether the cauldron bonus produced a remains potion.
    pub cauldron_bonus: bool,
    /// The free common potion from the cauldron bonus.
    pub remains_potion: Option<Potion>,
    /// The potion brewer roll, when the talent is enabled.
    pub potion_brewer: Option<PotionBrewerRoll>,
    /// The duplicate recipe from a successful potion brewer roll.
    pub second_potion: Option<PotionRecipe>,
}

impl BrewResult {
    /// The primary potion.
    #[must_use]
    pub fn potion(&self) -> &Potion {
        &self.recipe.potion
    }

    /// Whether the potion brewer roll succeeded.
    #[must_use]
    pub fn potion_brewer_success(&self) -> bool {
        self.potion_brewer.is_some_and(|roll| roll.success)
    }
}

/// Result of a brew request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrewOutcome {
    /// The player must pick one of the offered attributes and brew again.
    /// Nothing was rolled.
    AwaitingChoice(ScoreChoice),
    /// The brew completed.
    Brewed(BrewResult),
}

fn build_recipe(
    ingredients: &[Ingredient; 3],
    card: &ScoreCard,
    attribute: PotionCategory,
    catalog: &dyn CatalogPort,
    clock: &dyn Clock,
) -> Result<PotionRecipe, DomainError> {
    let potion = select_potion(catalog, attribute, card.scores.get(attribute))?;
    Ok(PotionRecipe {
        id: Uuid::new_v4(),
        ingredients: ingredients.clone(),
        scores: card.scores,
        winning_attribute: attribute,
        potion,
        created_at: clock.now(),
    })
}

/// Brews three ingredients.
///
/// `chosen` is honored only when the potion brewer talent offers a choice
/// and `chosen` is one of the two offered attributes; otherwise the
/// tie-break winner is used. When a choice is offered and `chosen` is
/// `None`, returns `BrewOutcome::AwaitingChoice` without touching `rng`.
///
/// The only random draw is the potion brewer d100.
///
/// # Errors
///
/// Returns `DomainError::InvalidRecipeComposition` unless there are exactly
/// three distinct ingredients, and `DomainError::EmptyCatalog` if a needed
/// potion category is empty.
pub fn compose_brew(
    ingredients: &[Ingredient],
    chosen: Option<PotionCategory>,
    talents: &TalentConfig,
    catalog: &dyn CatalogPort,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
) -> Result<BrewOutcome, DomainError> {
    let card = scoring::score(ingredients)?;
    let ingredients: [Ingredient; 3] = ingredients.to_vec().try_into().map_err(|_| {
        DomainError::InvalidRecipeComposition("expected 3 ingredients".to_owned())
    })?;

    let choice = card.choice(talents.potion_brewer_talent);
    let winning = match chosen {
        Some(attribute) if choice.can_choose && choice.offers(attribute) => attribute,
        None if choice.can_choose => return Ok(BrewOutcome::AwaitingChoice(choice)),
        _ => card.winning_attribute,
    };

    let recipe = build_recipe(&ingredients, &card, winning, catalog, clock)?;

    let remains_potion = if talents.cauldron_bonus
        && matches!(
            recipe.potion.rarity,
            PotionRarity::Uncommon | PotionRarity::Rare
        ) {
        Some(select_remains_potion(catalog, winning)?)
    } else {
        None
    };

    let mut second_potion = None;
    let potion_brewer = if talents.potion_brewer_talent {
        let roll = rng.next_u32_range(1, 100);
        let success = roll <= talents.potion_brewer_level;
        if success {
            second_potion = Some(build_recipe(
                &ingredients,
                &card,
                card.winning_attribute,
                catalog,
                clock,
            )?);
        }
        Some(PotionBrewerRoll {
            roll,
            level: talents.potion_brewer_level,
            success,
        })
    } else {
        None
    };

    Ok(BrewOutcome::Brewed(BrewResult {
        recipe,
        cauldron_bonus: remains_potion.is_some(),
        remains_potion,
        potion_brewer,
        second_potion,
    }))
}
