//! Die rolls for foraging checks.
//!
//! A check is a d20 (optionally rolled twice for advantage or
//! disadvantage) plus a flat modifier plus an optional bonus die whose
//! value was rolled beforehand.

use std::fmt;

use alchemist_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};

/// Sides on the check die.
pub const CHECK_DIE_SIDES: u32 = 20;

/// Roll-twice modifier applied to the check die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvantageMode {
    /// Roll once.
    #[default]
    Normal,
    /// Roll twice, keep the higher.
    Advantage,
    /// Roll twice, keep the lower.
    Disadvantage,
}

/// Die types usable as a bonus die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BonusDieKind {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
}

impl BonusDieKind {
    /// Returns the number of sides on this die.
    #[must_use]
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
        }
    }
}

impl fmt::Display for BonusDieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A bonus die together with the value it already rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusDie {
    /// The die type.
    #[serde(rename = "type")]
    pub kind: BonusDieKind,
    /// The rolled value.
    pub value: u32,
}

impl BonusDie {
    /// Rolls a bonus die so its value can be shown before the check.
    pub fn roll(kind: BonusDieKind, rng: &mut dyn DeterministicRng) -> Self {
        Self {
            kind,
            value: roll_die(rng, kind.sides()),
        }
    }
}

/// The kept d20 result of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRoll {
    /// The kept roll.
    pub roll: u32,
    /// The discarded roll under advantage or disadvantage.
    pub second_roll: Option<u32>,
}

/// Rolls a die with `sides` sides, uniformly in `[1, sides]`.
pub fn roll_die(rng: &mut dyn DeterministicRng, sides: u32) -> u32 {
    rng.next_u32_range(1, sides)
}

/// Rolls the check die under the given mode.
pub fn roll_with_advantage(rng: &mut dyn DeterministicRng, mode: AdvantageMode) -> CheckRoll {
    let first = roll_die(rng, CHECK_DIE_SIDES);
    if mode == AdvantageMode::Normal {
        return CheckRoll {
            roll: first,
            second_roll: None,
        };
    }

    let second = roll_die(rng, CHECK_DIE_SIDES);
    let (kept, discarded) = if mode == AdvantageMode::Advantage {
        (first.max(second), first.min(second))
    } else {
        (first.min(second), first.max(second))
    };
    CheckRoll {
        roll: kept,
        second_roll: Some(discarded),
    }
}

/// Adds the modifier and the bonus die's already-rolled value to a base roll.
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn total_roll(base_roll: u32, modifier: i32, bonus_die: Option<&BonusDie>) -> i32 {
    let bonus = bonus_die.map_or(0, |die| die.value as i32);
    base_roll as i32 + modifier + bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use alchemist_core::rng::SeededRng;
    use alchemist_test_support::SequenceRng;

    #[test]
    fn test_roll_die_stays_within_sides() {
        let mut rng = SeededRng::from_seed(3);

        for _ in 0..500 {
            let value = roll_die(&mut rng, 6);
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    fn test_normal_mode_rolls_once() {
        let mut rng = SequenceRng::new(vec![12]);

        let roll = roll_with_advantage(&mut rng, AdvantageMode::Normal);

        assert_eq!(
            roll,
            CheckRoll {
                roll: 12,
                second_roll: None
            }
        );
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_advantage_keeps_higher_and_reports_discarded() {
        let mut rng = SequenceRng::new(vec![4, 17]);

        let roll = roll_with_advantage(&mut rng, AdvantageMode::Advantage);

        assert_eq!(roll.roll, 17);
        assert_eq!(roll.second_roll, Some(4));
    }

    #[test]
    fn test_disadvantage_keeps_lower_and_reports_discarded() {
        let mut rng = SequenceRng::new(vec![4, 17]);

        let roll = roll_with_advantage(&mut rng, AdvantageMode::Disadvantage);

        assert_eq!(roll.roll, 4);
        assert_eq!(roll.second_roll, Some(17));
    }

    #[test]
    fn test_total_roll_adds_modifier_and_bonus_value() {
        let bonus = BonusDie {
            kind: BonusDieKind::D6,
            value: 5,
        };

        assert_eq!(total_roll(10, 3, Some(&bonus)), 18);
        assert_eq!(total_roll(10, -4, None), 6);
    }

    #[test]
    fn test_bonus_die_roll_uses_its_sides() {
        let mut rng = SequenceRng::new(vec![3]);

        let bonus = BonusDie::roll(BonusDieKind::D4, &mut rng);

        assert_eq!(bonus.kind, BonusDieKind::D4);
        assert_eq!(bonus.value, 3);
        assert_eq!(bonus.kind.to_string(), "d4");
    }

    #[test]
    fn test_bonus_die_serializes_kind_as_type() {
        let bonus = BonusDie {
            kind: BonusDieKind::D8,
            value: 6,
        };

        assert_eq!(
            serde_json::to_value(bonus).unwrap(),
            serde_json::json!({ "type": "d8", "value": 6 })
        );
    }
}
