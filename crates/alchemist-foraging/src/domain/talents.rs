//! Foraging talents.

use alchemist_catalog::domain::ingredient::IngredientRarity;

use super::resolver::ForageResolution;

/// Units collected for a resolution under the double forage talent.
///
/// Successful common and uncommon forages yield two units when the talent
/// is enabled; everything else yields one.
#[must_use]
pub fn apply_double_forage(resolution: &ForageResolution, enabled: bool) -> u32 {
    let doubles = matches!(
        resolution.rarity,
        IngredientRarity::Common | IngredientRarity::Uncommon
    );
    if enabled && resolution.success && doubles {
        2
    } else {
        1
    }
}
