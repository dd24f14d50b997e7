//! Maps a score onto a potion of its category.

use alchemist_catalog::domain::catalog::CatalogPort;
use alchemist_catalog::domain::potion::{Potion, PotionCategory, PotionRarity};
use alchemist_core::error::DomainError;

fn potions(catalog: &dyn CatalogPort, category: PotionCategory) -> Result<&[Potion], DomainError> {
    let list = catalog.potions_by_category(category);
    if list.is_empty() {
        return Err(DomainError::EmptyCatalog(format!(
            "no {category} potions in the catalog"
        )));
    }
    Ok(list)
}

/// Position of `score` in a list of `len` potions.
///
/// Scores wrap around the list: 1 is the first entry, `len + 1` is the first
/// entry again. Zero and negative scores wrap the same way.
#[must_use]
pub fn potion_index(score: i32, len: usize) -> usize {
    let Ok(len) = i64::try_from(len) else {
        return 0;
    };
    if len == 0 {
        return 0;
    }
    usize::try_from((i64::from(score) - 1).rem_euclid(len)).unwrap_or(0)
}

/// Picks the potion for `score` from the `category` list.
///
/// # Errors
///
/// Returns `DomainError::EmptyCatalog` if the category has no potions.
pub fn select_potion(
    catalog: &dyn CatalogPort,
    category: PotionCategory,
    score: i32,
) -> Result<Potion, DomainError> {
    let list = potions(catalog, category)?;
    Ok(list[potion_index(score, list.len())].clone())
}

/// The extra potion granted by the cauldron bonus: the first Common entry
/// of the category, or its first entry when it has no Common potion.
///
/// # Errors
///
/// Returns `DomainError::EmptyCatalog` if the category has no potions.
pub fn select_remains_potion(
    catalog: &dyn CatalogPort,
    category: PotionCategory,
) -> Result<Potion, DomainError> {
    let list = potions(catalog, category)?;
    let potion = list
        .iter()
        .find(|potion| potion.rarity == PotionRarity::Common)
        .unwrap_or(&list[0]);
    Ok(potion.clone())
}
