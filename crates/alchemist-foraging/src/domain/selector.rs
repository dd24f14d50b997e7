//! Picks a concrete ingredient for a resolved rarity.
//!
//! All picks are uniform over the pool; the rarity band is the only
//! weighting.

use alchemist_catalog::domain::catalog::CatalogPort;
use alchemist_catalog::domain::ingredient::{Ingredient, IngredientRarity, Region};
use alchemist_core::error::DomainError;
use alchemist_core::rng::DeterministicRng;

use super::resolver::ForageResolution;

fn pick_uniform(pool: &[Ingredient], rng: &mut dyn DeterministicRng) -> Option<Ingredient> {
    let last = pool.len().checked_sub(1)?;
    let max = u32::try_from(last).unwrap_or(u32::MAX);
    let index = usize::try_from(rng.next_u32_range(0, max)).map_or(last, |i| i.min(last));
    pool.get(index).cloned()
}

/// Picks from the region's pool for `rarity`. `None` if the pool is empty.
pub fn pick_common_or_uncommon(
    catalog: &dyn CatalogPort,
    region: &Region,
    rarity: IngredientRarity,
    rng: &mut dyn DeterministicRng,
) -> Option<Ingredient> {
    pick_uniform(catalog.ingredients_by_region_and_rarity(region, rarity), rng)
}

/// Picks from the uncommon pools of all regions.
pub fn pick_non_native_uncommon(
    catalog: &dyn CatalogPort,
    rng: &mut dyn DeterministicRng,
) -> Option<Ingredient> {
    pick_uniform(catalog.uncommon_ingredients_any_region(), rng)
}

/// Picks from the global rare pool.
pub fn pick_rare(catalog: &dyn CatalogPort, rng: &mut dyn DeterministicRng) -> Option<Ingredient> {
    pick_uniform(catalog.rare_ingredients(), rng)
}

/// Picks from the global unique pool.
pub fn pick_unique(
    catalog: &dyn CatalogPort,
    rng: &mut dyn DeterministicRng,
) -> Option<Ingredient> {
    pick_uniform(catalog.unique_ingredients(), rng)
}

/// Picks the ingredient a resolution entitles the player to.
///
/// Returns `Ok(None)` for a failed resolution.
///
/// # Errors
///
/// Returns `DomainError::EmptyCatalog` if the pool for a successful
/// resolution has no entries.
pub fn pick_for_resolution(
    catalog: &dyn CatalogPort,
    region: &Region,
    resolution: &ForageResolution,
    rng: &mut dyn DeterministicRng,
) -> Result<Option<Ingredient>, DomainError> {
    if !resolution.success {
        return Ok(None);
    }

    let picked = match (resolution.rarity, resolution.is_native) {
        (IngredientRarity::Common, _) => {
            pick_common_or_uncommon(catalog, region, IngredientRarity::Common, rng)
        }
        (IngredientRarity::Uncommon, true) => {
            pick_common_or_uncommon(catalog, region, IngredientRarity::Uncommon, rng)
        }
        (IngredientRarity::Uncommon, false) => pick_non_native_uncommon(catalog, rng),
        (IngredientRarity::Rare, _) => pick_rare(catalog, rng),
        (IngredientRarity::Unique, _) => pick_unique(catalog, rng),
    };

    picked.map(Some).ok_or_else(|| {
        let scope = if resolution.is_native {
            format!("region {region}")
        } else {
            "any region".to_owned()
        };
        DomainError::EmptyCatalog(format!(
            "no {} ingredients available in {scope}",
            resolution.rarity
        ))
    })
}
