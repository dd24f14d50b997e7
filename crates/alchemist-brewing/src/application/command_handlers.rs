//! Command handlers for the Brewing context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: resolve the ingredients from the pantry, brew,
//! persist the resulting records, then consume the ingredients.

use std::sync::Mutex;

use alchemist_catalog::domain::catalog::CatalogPort;
use alchemist_catalog::domain::ingredient::Ingredient;
use alchemist_core::clock::Clock;
use alchemist_core::command::Command;
use alchemist_core::error::DomainError;
use alchemist_core::repository::{RecordRepository, StoredRecord};
use alchemist_core::rng::DeterministicRng;
use alchemist_core::talents::TalentConfig;
use alchemist_inventory::domain::pantry::Pantry;
use tracing::{debug, info, instrument};

use crate::domain::commands::BrewPotion;
use crate::domain::composer::{BrewOutcome, BrewResult, compose_brew};
use crate::domain::recipe::{
    CreatedPotion, POTION_CREATED_RECORD_TYPE, PotionRecipe, RECIPE_RECORD_TYPE,
};
use crate::domain::scoring::ScoreChoice;

/// Result of a brew request.
#[derive(Debug, Clone)]
pub enum BrewReport {
    /// The player must pick an attribute. Nothing was consumed or stored.
    AwaitingChoice(ScoreChoice),
    /// The brew completed.
    Brewed {
        /// The composed brew.
        result: BrewResult,
        /// Potions added to the inventory: the primary potion, then the
        /// remains potion and the second potion when present.
        created_potions: Vec<CreatedPotion>,
    },
}

fn resolve_ingredients(pantry: &Pantry, ids: &[u32]) -> Result<Vec<Ingredient>, DomainError> {
    ids.iter()
        .map(|&id| {
            pantry
                .get(id)
                .filter(|entry| entry.stock.is_available())
                .map(|entry| entry.ingredient.clone())
                .ok_or_else(|| {
                    DomainError::Validation(format!(
                        "ingredient {id} is not available in the pantry"
                    ))
                })
        })
        .collect()
}

fn recipe_record(
    recipe: &PotionRecipe,
    command: &BrewPotion,
    clock: &dyn Clock,
) -> Result<StoredRecord, DomainError> {
    StoredRecord::from_payload(
        recipe.id,
        command.player_id(),
        RECIPE_RECORD_TYPE,
        recipe,
        command.correlation_id(),
        clock.now(),
    )
}

/// Handles the `BrewPotion` command: resolves the ingredients from the
/// pantry, brews them, stores the recipes and created potions, and uses one
/// unit of each ingredient.
///
/// Nothing is consumed or stored when the brew awaits a player choice or
/// fails. The `Mutex` is locked only around the synchronous domain call to
/// avoid holding a `MutexGuard` across await points.
///
/// # Errors
///
/// Returns `DomainError::Validation` if an ingredient is missing from the
/// pantry or used up, `DomainError::InvalidRecipeComposition` unless there
/// are exactly three distinct ingredients, `DomainError::EmptyCatalog` if a
/// potion category is empty, and `DomainError::Infrastructure` if the
/// repository fails or the RNG mutex is poisoned.
#[allow(clippy::too_many_arguments)]
#[instrument(
    skip_all,
    fields(
        player_id = %command.player_id,
        correlation_id = %command.correlation_id,
    )
)]
pub async fn handle_brew(
    command: &BrewPotion,
    talents: &TalentConfig,
    catalog: &dyn CatalogPort,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
    pantry: &mut Pantry,
    repo: &dyn RecordRepository,
) -> Result<BrewReport, DomainError> {
    let ingredients = resolve_ingredients(pantry, &command.ingredient_ids)?;

    // Lock RNG only for the synchronous domain call, never across an await.
    let outcome = {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        compose_brew(
            &ingredients,
            command.chosen_attribute,
            talents,
            catalog,
            clock,
            &mut *rng_guard,
        )?
    };

    let result = match outcome {
        BrewOutcome::AwaitingChoice(choice) => {
            info!(
                first = %choice.scores[0].attribute,
                second = %choice.scores[1].attribute,
                "brew awaiting attribute choice"
            );
            return Ok(BrewReport::AwaitingChoice(choice));
        }
        BrewOutcome::Brewed(result) => result,
    };
    debug!(
        combat = result.recipe.scores.combat,
        utility = result.recipe.scores.utility,
        whimsy = result.recipe.scores.whimsy,
        winning_attribute = %result.recipe.winning_attribute,
        potion_brewer_roll = ?result.potion_brewer.map(|roll| roll.roll),
        "brew composed"
    );

    let mut created_potions = vec![CreatedPotion::new(
        result.recipe.potion.clone(),
        &result.recipe,
        clock,
    )];
    if let Some(remains) = &result.remains_potion {
        created_potions.push(CreatedPotion::new(remains.clone(), &result.recipe, clock));
    }
    if let Some(second) = &result.second_potion {
        created_potions.push(CreatedPotion::new(second.potion.clone(), second, clock));
    }

    let mut records = vec![recipe_record(&result.recipe, command, clock)?];
    if let Some(second) = &result.second_potion {
        records.push(recipe_record(second, command, clock)?);
    }
    for potion in &created_potions {
        records.push(StoredRecord::from_payload(
            potion.id,
            command.player_id(),
            POTION_CREATED_RECORD_TYPE,
            potion,
            command.correlation_id(),
            potion.created_at,
        )?);
    }
    repo.append_records(&records).await?;

    for ingredient in &result.recipe.ingredients {
        pantry.use_ingredient(ingredient.id, clock)?;
    }

    info!(
        recipe_id = %result.recipe.id,
        potion = %result.recipe.potion.name,
        rarity = %result.recipe.potion.rarity,
        cauldron_bonus = result.cauldron_bonus,
        potion_brewer_success = result.potion_brewer_success(),
        potions_created = created_potions.len(),
        "potion brewed"
    );

    Ok(BrewReport::Brewed {
        result,
        created_potions,
    })
}
