//! The foraging attempt record.

use alchemist_catalog::domain::catalog::CatalogPort;
use alchemist_catalog::domain::ingredient::{Ingredient, IngredientRarity, Region};
use alchemist_core::clock::Clock;
use alchemist_core::error::DomainError;
use alchemist_core::rng::DeterministicRng;
use alchemist_core::talents::TalentConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::commands::ForageIngredient;
use super::dice::{self, AdvantageMode, BonusDie};
use super::resolver::resolve_forage;
use super::selector::pick_for_resolution;
use super::talents::apply_double_forage;

/// Record type of a stored foraging attempt.
pub const FORAGE_ATTEMPT_RECORD_TYPE: &str = "foraging.attempt";

/// Record type of a stored pantry collection.
pub const INGREDIENT_COLLECTED_RECORD_TYPE: &str = "inventory.ingredient_collected";

/// An immutable record of one foraging attempt.
///
/// `success == false` exactly when `rarity` is `Common`, `ingredient` is
/// `None` and `quantity` is 0 because the roll missed the lowest band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForageAttempt {
    /// Attempt identifier.
    pub id: Uuid,
    /// The player who foraged.
    pub player_id: Uuid,
    /// When the attempt was made.
    pub timestamp: DateTime<Utc>,
    /// Where the player foraged.
    pub region: Region,
    /// The skill used for the check.
    pub test_type: String,
    /// Flat modifier added to the check.
    pub modifier: i32,
    /// Bonus die added to the check, if any.
    pub bonus_die: Option<BonusDie>,
    /// Advantage mode of the check die.
    pub advantage: AdvantageMode,
    /// The kept d20.
    pub natural_roll: u32,
    /// The discarded d20 under advantage or disadvantage.
    pub second_roll: Option<u32>,
    /// Final total.
    pub total_roll: i32,
    /// DC of the band reached.
    pub dc: i32,
    /// Label of the band reached.
    pub dc_range: String,
    /// Whether the roll reached the lowest band.
    pub success: bool,
    /// Rarity tier after downgrades.
    pub rarity: IngredientRarity,
    /// Whether the ingredient is native to `region`.
    pub is_native: bool,
    /// The ingredient found.
    pub ingredient: Option<Ingredient>,
    /// Units found.
    pub quantity: u32,
}

impl ForageAttempt {
    /// Rolls, resolves and picks an ingredient for `command`.
    ///
    /// Draw order: the check die (twice under advantage or disadvantage),
    /// any downgrade draws, then the pool pick.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCatalog` if the roll succeeded but the
    /// matching ingredient pool is empty.
    pub fn perform(
        command: &ForageIngredient,
        talents: &TalentConfig,
        catalog: &dyn CatalogPort,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Self, DomainError> {
        let check = dice::roll_with_advantage(rng, command.advantage);
        let total = dice::total_roll(check.roll, command.modifier, command.bonus_die.as_ref());
        let resolution = resolve_forage(total, rng);
        let ingredient = pick_for_resolution(catalog, &command.region, &resolution, rng)?;
        let quantity = if ingredient.is_some() {
            apply_double_forage(&resolution, talents.double_forage_talent)
        } else {
            0
        };

        Ok(Self {
            id: Uuid::new_v4(),
            player_id: command.player_id,
            timestamp: clock.now(),
            region: command.region.clone(),
            test_type: command.test_type.clone(),
            modifier: command.modifier,
            bonus_die: command.bonus_die,
            advantage: command.advantage,
            natural_roll: check.roll,
            second_roll: check.second_roll,
            total_roll: total,
            dc: resolution.dc,
            dc_range: resolution.dc_range,
            success: resolution.success,
            rarity: resolution.rarity,
            is_native: resolution.is_native,
            ingredient,
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dice::BonusDieKind;
    use alchemist_catalog::domain::catalog::{CatalogData, InMemoryCatalog};
    use alchemist_test_support::{FixedClock, SequenceRng, sample_catalog};
    use chrono::TimeZone;

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    fn command(modifier: i32, advantage: AdvantageMode) -> ForageIngredient {
        ForageIngredient {
            correlation_id: Uuid::new_v4(),
            player_id: Uuid::new_v4(),
            region: Region::new("Whispering Woods"),
            test_type: "survival".to_owned(),
            modifier,
            bonus_die: None,
            advantage,
        }
    }

    #[test]
    fn test_failed_roll_records_no_ingredient() {
        // d20 = 5, +2 → 7: below the lowest band, no further draws.
        let mut rng = SequenceRng::new(vec![5]);
        let cmd = command(2, AdvantageMode::Normal);

        let attempt = ForageAttempt::perform(
            &cmd,
            &TalentConfig::default(),
            &sample_catalog(),
            &fixed_clock(),
            &mut rng,
        )
        .unwrap();

        assert!(!attempt.success);
        assert_eq!(attempt.total_roll, 7);
        assert_eq!(attempt.rarity, IngredientRarity::Common);
        assert_eq!(attempt.dc, 10);
        assert_eq!(attempt.dc_range, "10-15");
        assert!(attempt.ingredient.is_none());
        assert_eq!(attempt.quantity, 0);
        assert_eq!(attempt.player_id, cmd.player_id);
        assert_eq!(attempt.timestamp, fixed_clock().0);
    }

    #[test]
    fn test_common_success_with_double_forage_yields_two() {
        // d20 = 11, +1 → 12: common band, pick index 1 → Thornroot.
        let mut rng = SequenceRng::new(vec![11, 1]);
        let talents = TalentConfig {
            double_forage_talent: true,
            ..TalentConfig::default()
        };

        let attempt = ForageAttempt::perform(
            &command(1, AdvantageMode::Normal),
            &talents,
            &sample_catalog(),
            &fixed_clock(),
            &mut rng,
        )
        .unwrap();

        assert!(attempt.success);
        assert_eq!(attempt.rarity, IngredientRarity::Common);
        assert!(attempt.is_native);
        assert_eq!(attempt.ingredient.unwrap().name, "Thornroot");
        assert_eq!(attempt.quantity, 2);
    }

    #[test]
    fn test_advantage_and_bonus_die_feed_the_total() {
        // d20s 9 and 18 under advantage → 18, +3 modifier, +5 bonus → 26.
        // Rare band: 0.8 keeps rare, pick index 0 → Drake Tear.
        let mut rng = SequenceRng::new(vec![9, 18, 0]).with_fractions(vec![0.8]);
        let mut cmd = command(3, AdvantageMode::Advantage);
        cmd.bonus_die = Some(BonusDie {
            kind: BonusDieKind::D6,
            value: 5,
        });

        let attempt = ForageAttempt::perform(
            &cmd,
            &TalentConfig::default(),
            &sample_catalog(),
            &fixed_clock(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(attempt.natural_roll, 18);
        assert_eq!(attempt.second_roll, Some(9));
        assert_eq!(attempt.total_roll, 26);
        assert_eq!(attempt.rarity, IngredientRarity::Rare);
        assert_eq!(attempt.ingredient.unwrap().id, 7);
        assert_eq!(attempt.quantity, 1);
    }

    #[test]
    fn test_success_against_empty_catalog_returns_error() {
        let mut rng = SequenceRng::new(vec![15, 0]);
        let catalog = InMemoryCatalog::new(CatalogData::default());

        let result = ForageAttempt::perform(
            &command(0, AdvantageMode::Normal),
            &TalentConfig::default(),
            &catalog,
            &fixed_clock(),
            &mut rng,
        );

        assert!(matches!(result, Err(DomainError::EmptyCatalog(_))));
    }
}
