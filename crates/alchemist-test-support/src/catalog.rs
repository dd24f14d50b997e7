//! Test catalog: a small, fully populated catalog fixture.
//!
//! Layout:
//! - "Whispering Woods": common ids 1, 2; uncommon ids 3, 4
//! - "Ashen Coast": common id 5; uncommon id 6
//! - rare ids 7, 8; unique id 9
//! - combat potions 101..=105 (Common, Uncommon, Rare, Common, Very Rare)
//! - utility potions 201..=203 (Uncommon, Common, Rare)
//! - whimsy potions 301..=302 (Rare, Legendary), no Common entry

use std::collections::BTreeMap;

use alchemist_catalog::domain::catalog::{
    CatalogData, InMemoryCatalog, PotionLists, RegionIngredients,
};
use alchemist_catalog::domain::ingredient::{Ingredient, IngredientRarity, Region};
use alchemist_catalog::domain::potion::{Potion, PotionRarity};

/// Builds an ingredient with the given stats.
#[must_use]
pub fn sample_ingredient(
    id: u32,
    name: &str,
    stats: (i32, i32, i32),
    rarity: IngredientRarity,
) -> Ingredient {
    Ingredient {
        id,
        name: name.to_owned(),
        combat: stats.0,
        utility: stats.1,
        whimsy: stats.2,
        description: String::new(),
        rarity,
    }
}

fn potion(id: u32, name: &str, rarity: PotionRarity) -> Potion {
    Potion {
        id,
        name: name.to_owned(),
        rarity,
        description: String::new(),
    }
}

/// Returns the sample catalog described in the module docs.
#[must_use]
pub fn sample_catalog() -> InMemoryCatalog {
    use IngredientRarity::{Common, Rare, Uncommon, Unique};

    let mut regions = BTreeMap::new();
    regions.insert(
        Region::new("Whispering Woods"),
        RegionIngredients {
            common: vec![
                sample_ingredient(1, "Dewcap", (1, 2, 1), Common),
                sample_ingredient(2, "Thornroot", (3, 1, 1), Common),
            ],
            uncommon: vec![
                sample_ingredient(3, "Starleaf", (2, 4, 3), Uncommon),
                sample_ingredient(4, "Owl Feather", (1, 2, 5), Uncommon),
            ],
        },
    );
    regions.insert(
        Region::new("Ashen Coast"),
        RegionIngredients {
            common: vec![sample_ingredient(5, "Salt Kelp", (1, 1, 2), Common)],
            uncommon: vec![sample_ingredient(6, "Ember Shell", (5, 2, 1), Uncommon)],
        },
    );

    InMemoryCatalog::new(CatalogData {
        regions,
        rare: vec![
            sample_ingredient(7, "Drake Tear", (6, 3, 2), Rare),
            sample_ingredient(8, "Phoenix Ash", (4, 4, 6), Rare),
        ],
        unique: vec![sample_ingredient(9, "Heart of the Grove", (8, 8, 8), Unique)],
        potions: PotionLists {
            combat: vec![
                potion(101, "Draught of Vigor", PotionRarity::Common),
                potion(102, "Ironskin Tonic", PotionRarity::Uncommon),
                potion(103, "Berserker Brew", PotionRarity::Rare),
                potion(104, "Minor Healing", PotionRarity::Common),
                potion(105, "Dragonfire Elixir", PotionRarity::VeryRare),
            ],
            utility: vec![
                potion(201, "Climbing Oil", PotionRarity::Uncommon),
                potion(202, "Lantern Water", PotionRarity::Common),
                potion(203, "Phase Draught", PotionRarity::Rare),
            ],
            whimsy: vec![
                potion(301, "Bubble Voice", PotionRarity::Rare),
                potion(302, "Rainbow Hair", PotionRarity::Legendary),
            ],
        },
    })
}
