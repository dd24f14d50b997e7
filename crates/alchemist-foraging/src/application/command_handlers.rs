//! Command handlers for the Foraging context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: check the daily gate, run the engine, persist
//! the resulting records.

use std::sync::Mutex;

use alchemist_catalog::domain::catalog::CatalogPort;
use alchemist_core::clock::Clock;
use alchemist_core::command::Command;
use alchemist_core::error::DomainError;
use alchemist_core::repository::{RecordRepository, StoredRecord};
use alchemist_core::rng::DeterministicRng;
use alchemist_core::talents::TalentConfig;
use alchemist_inventory::domain::pantry::{CollectedIngredient, Pantry};
use tracing::{debug, info, instrument, warn};

use crate::domain::attempt::{
    FORAGE_ATTEMPT_RECORD_TYPE, ForageAttempt, INGREDIENT_COLLECTED_RECORD_TYPE,
};
use crate::domain::commands::ForageIngredient;
use crate::domain::config::ForagingConfig;
use crate::domain::gate;

/// A completed foraging attempt and what it added to the pantry.
#[derive(Debug, Clone)]
pub struct ForageReport {
    /// The stored attempt.
    pub attempt: ForageAttempt,
    /// The pantry entry the ingredient went into, after collection.
    pub collected: Option<CollectedIngredient>,
}

/// Result of a foraging request.
#[derive(Debug, Clone)]
pub enum ForageOutcome {
    /// The player has used up today's attempts. Nothing was rolled or stored.
    LimitExceeded {
        /// The configured daily limit.
        limit: u32,
        /// Attempts already recorded today. When the attempt lost the race
        /// for the last slot, the store refused it for being at the limit,
        /// so this is the limit itself rather than a fresh count.
        attempts_today: u32,
    },
    /// The attempt was rolled and stored.
    Completed(ForageReport),
}

/// Handles the `ForageIngredient` command: checks the daily gate, performs
/// the attempt, stores it under the daily limit, and collects any
/// ingredient into the pantry.
///
/// The `Mutex` is locked only around the synchronous domain call to avoid
/// holding a `MutexGuard` across await points.
///
/// # Errors
///
/// Returns `DomainError` if the repository fails, the catalog pool for a
/// successful roll is empty, or the RNG mutex is poisoned.
#[allow(clippy::too_many_arguments)]
#[instrument(
    skip_all,
    fields(
        player_id = %command.player_id,
        region = %command.region,
        correlation_id = %command.correlation_id,
    )
)]
pub async fn handle_forage(
    command: &ForageIngredient,
    config: &ForagingConfig,
    talents: &TalentConfig,
    catalog: &dyn CatalogPort,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
    pantry: &mut Pantry,
    repo: &dyn RecordRepository,
) -> Result<ForageOutcome, DomainError> {
    let since = clock.start_of_day();
    let attempts_today = repo
        .count_records_since(command.player_id(), FORAGE_ATTEMPT_RECORD_TYPE, since)
        .await?;

    let remaining = gate::remaining(config.daily_limit, attempts_today);
    if !gate::check(remaining) {
        warn!(attempts_today, limit = config.daily_limit, "daily forage limit reached");
        return Ok(ForageOutcome::LimitExceeded {
            limit: config.daily_limit,
            attempts_today,
        });
    }

    // Lock RNG only for the synchronous domain call, never across an await.
    let attempt = {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        ForageAttempt::perform(command, talents, catalog, clock, &mut *rng_guard)?
    };
    debug!(
        natural_roll = attempt.natural_roll,
        second_roll = ?attempt.second_roll,
        total_roll = attempt.total_roll,
        rarity = %attempt.rarity,
        "forage check resolved"
    );

    let record = StoredRecord::from_payload(
        attempt.id,
        attempt.player_id,
        FORAGE_ATTEMPT_RECORD_TYPE,
        &attempt,
        command.correlation_id(),
        attempt.timestamp,
    )?;
    if !repo
        .append_if_under_limit(record, since, config.daily_limit)
        .await?
    {
        warn!(limit = config.daily_limit, "forage attempt lost the race for the last daily slot");
        return Ok(ForageOutcome::LimitExceeded {
            limit: config.daily_limit,
            attempts_today: config.daily_limit,
        });
    }

    let collected = match &attempt.ingredient {
        Some(ingredient) => {
            let entry =
                pantry.preview_collect(ingredient.clone(), attempt.quantity, attempt.id, clock);
            let record = StoredRecord::from_payload(
                entry.id,
                attempt.player_id,
                INGREDIENT_COLLECTED_RECORD_TYPE,
                &entry,
                command.correlation_id(),
                clock.now(),
            )?;
            repo.append_records(&[record]).await?;
            Some(pantry.store(entry).clone())
        }
        None => None,
    };

    info!(
        attempt_id = %attempt.id,
        success = attempt.success,
        rarity = %attempt.rarity,
        quantity = attempt.quantity,
        "forage attempt completed"
    );

    Ok(ForageOutcome::Completed(ForageReport { attempt, collected }))
}
