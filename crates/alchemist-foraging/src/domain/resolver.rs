//! Maps a foraging total onto a rarity band.
//!
//! | total | rarity   | native |
//! |-------|----------|--------|
//! | < 10  | failure  |        |
//! | 10-15 | common   | yes    |
//! | 16-20 | uncommon | yes    |
//! | 21-25 | uncommon | no     |
//! | 26-30 | rare     | no     |
//! | 31+   | unique   | no     |
//!
//! The rare and unique bands may downgrade. Reaching them does not
//! guarantee the top rarity.

use alchemist_catalog::domain::ingredient::IngredientRarity;
use alchemist_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};

/// Chance that a rare-band roll yields an uncommon ingredient instead.
pub const RARE_DOWNGRADE_CHANCE: f64 = 0.3;

/// Chance that a unique-band roll does not stay unique.
pub const UNIQUE_DOWNGRADE_CHANCE: f64 = 0.9;

/// Once a unique-band roll downgrades, chance it lands on rare (else uncommon).
pub const UNIQUE_DOWNGRADE_TO_RARE_CHANCE: f64 = 0.3;

struct Band {
    min_total: i32,
    dc_range: &'static str,
    rarity: IngredientRarity,
    native: bool,
}

// Highest band first.
const BANDS: [Band; 5] = [
    Band {
        min_total: 31,
        dc_range: "31+",
        rarity: IngredientRarity::Unique,
        native: false,
    },
    Band {
        min_total: 26,
        dc_range: "26-30",
        rarity: IngredientRarity::Rare,
        native: false,
    },
    Band {
        min_total: 21,
        dc_range: "21-25",
        rarity: IngredientRarity::Uncommon,
        native: false,
    },
    Band {
        min_total: 16,
        dc_range: "16-20",
        rarity: IngredientRarity::Uncommon,
        native: true,
    },
    Band {
        min_total: 10,
        dc_range: "10-15",
        rarity: IngredientRarity::Common,
        native: true,
    },
];

const BASELINE: &Band = &BANDS[4];

/// Outcome of mapping a total roll onto the bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForageResolution {
    /// Whether the roll reached the lowest band.
    pub success: bool,
    /// Rarity after any downgrade. `Common` on failure.
    pub rarity: IngredientRarity,
    /// DC of the band the roll reached (baseline DC on failure).
    pub dc: i32,
    /// Label of that band.
    pub dc_range: String,
    /// Whether the ingredient comes from the attempt's own region.
    pub is_native: bool,
}

/// Resolves a total roll. The rare and unique bands draw from `rng` to
/// decide downgrades; lower bands never draw.
pub fn resolve_forage(total_roll: i32, rng: &mut dyn DeterministicRng) -> ForageResolution {
    let Some(band) = BANDS.iter().find(|band| total_roll >= band.min_total) else {
        return ForageResolution {
            success: false,
            rarity: IngredientRarity::Common,
            dc: BASELINE.min_total,
            dc_range: BASELINE.dc_range.to_owned(),
            is_native: false,
        };
    };

    let rarity = match band.rarity {
        IngredientRarity::Rare => {
            if rng.next_f64() < RARE_DOWNGRADE_CHANCE {
                IngredientRarity::Uncommon
            } else {
                IngredientRarity::Rare
            }
        }
        IngredientRarity::Unique => {
            if rng.next_f64() >= UNIQUE_DOWNGRADE_CHANCE {
                IngredientRarity::Unique
            } else if rng.next_f64() < UNIQUE_DOWNGRADE_TO_RARE_CHANCE {
                IngredientRarity::Rare
            } else {
                IngredientRarity::Uncommon
            }
        }
        other => other,
    };

    ForageResolution {
        success: true,
        rarity,
        dc: band.min_total,
        dc_range: band.dc_range.to_owned(),
        is_native: band.native,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alchemist_core::rng::SeededRng;
    use alchemist_test_support::{MockRng, SequenceRng};

    #[test]
    fn test_totals_below_ten_fail_with_baseline_dc() {
        for total in [-5, 0, 1, 9] {
            let resolution = resolve_forage(total, &mut MockRng);

            assert!(!resolution.success);
            assert_eq!(resolution.rarity, IngredientRarity::Common);
            assert_eq!(resolution.dc, 10);
            assert_eq!(resolution.dc_range, "10-15");
            assert!(!resolution.is_native);
        }
    }

    #[test]
    fn test_common_band_is_native_success() {
        for total in 10..=15 {
            let resolution = resolve_forage(total, &mut MockRng);

            assert!(resolution.success);
            assert_eq!(resolution.rarity, IngredientRarity::Common);
            assert_eq!(resolution.dc, 10);
            assert!(resolution.is_native);
        }
    }

    #[test]
    fn test_native_uncommon_band() {
        for total in 16..=20 {
            let resolution = resolve_forage(total, &mut MockRng);

            assert!(resolution.success);
            assert_eq!(resolution.rarity, IngredientRarity::Uncommon);
            assert_eq!(resolution.dc, 16);
            assert_eq!(resolution.dc_range, "16-20");
            assert!(resolution.is_native);
        }
    }

    #[test]
    fn test_non_native_uncommon_band() {
        for total in 21..=25 {
            let resolution = resolve_forage(total, &mut MockRng);

            assert_eq!(resolution.rarity, IngredientRarity::Uncommon);
            assert_eq!(resolution.dc, 21);
            assert!(!resolution.is_native);
        }
    }

    #[test]
    fn test_lower_bands_never_draw() {
        // An empty script panics on any draw.
        let mut rng = SequenceRng::new(Vec::new());

        for total in 0..=25 {
            resolve_forage(total, &mut rng);
        }
    }

    #[test]
    fn test_rare_band_without_downgrade_stays_rare() {
        for _ in 0..10_000 {
            let mut rng = SequenceRng::new(Vec::new()).with_fractions(vec![0.3]);

            let resolution = resolve_forage(26, &mut rng);

            assert_eq!(resolution.rarity, IngredientRarity::Rare);
            assert_eq!(resolution.dc, 26);
            assert_eq!(resolution.dc_range, "26-30");
        }
    }

    #[test]
    fn test_rare_band_downgrade_draw_yields_uncommon() {
        let mut rng = SequenceRng::new(Vec::new()).with_fractions(vec![0.29]);

        let resolution = resolve_forage(30, &mut rng);

        assert!(resolution.success);
        assert_eq!(resolution.rarity, IngredientRarity::Uncommon);
        assert_eq!(resolution.dc, 26);
        assert!(!resolution.is_native);
    }

    #[test]
    fn test_rare_band_downgrade_rate_is_about_thirty_percent() {
        let trials = 20_000;
        let mut downgrades = 0;
        for seed in 0..trials {
            let mut rng = SeededRng::from_seed(seed);
            if resolve_forage(26, &mut rng).rarity == IngredientRarity::Uncommon {
                downgrades += 1;
            }
        }

        let rate = f64::from(downgrades) / 20_000.0;
        assert!((rate - 0.3).abs() < 0.02, "downgrade rate was {rate}");
    }

    #[test]
    fn test_unique_band_stays_unique_on_high_draw() {
        let mut rng = SequenceRng::new(Vec::new()).with_fractions(vec![0.95]);

        let resolution = resolve_forage(31, &mut rng);

        assert_eq!(resolution.rarity, IngredientRarity::Unique);
        assert_eq!(resolution.dc, 31);
        assert_eq!(resolution.dc_range, "31+");
    }

    #[test]
    fn test_unique_band_downgrades_split_between_rare_and_uncommon() {
        let mut to_rare = SequenceRng::new(Vec::new()).with_fractions(vec![0.5, 0.1]);
        let mut to_uncommon = SequenceRng::new(Vec::new()).with_fractions(vec![0.5, 0.3]);

        assert_eq!(
            resolve_forage(40, &mut to_rare).rarity,
            IngredientRarity::Rare
        );
        assert_eq!(
            resolve_forage(40, &mut to_uncommon).rarity,
            IngredientRarity::Uncommon
        );
    }

    #[test]
    fn test_unique_band_distribution_matches_tuned_chances() {
        let trials: u32 = 20_000;
        let (mut unique, mut rare, mut uncommon) = (0_u32, 0_u32, 0_u32);
        for seed in 0..u64::from(trials) {
            let mut rng = SeededRng::from_seed(seed);
            match resolve_forage(35, &mut rng).rarity {
                IngredientRarity::Unique => unique += 1,
                IngredientRarity::Rare => rare += 1,
                IngredientRarity::Uncommon => uncommon += 1,
                IngredientRarity::Common => panic!("unique band never yields common"),
            }
        }

        let total = f64::from(trials);
        assert!((f64::from(unique) / total - 0.10).abs() < 0.015);
        assert!((f64::from(rare) / total - 0.27).abs() < 0.02);
        assert!((f64::from(uncommon) / total - 0.63).abs() < 0.02);
    }
}
