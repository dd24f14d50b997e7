//! Catalog port and in-memory implementation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ingredient::{Ingredient, IngredientRarity, Region};
use super::potion::{Potion, PotionCategory};

/// Read-only lookup of catalog data.
///
/// An empty slice means the data is missing; callers decide whether that
/// is an error.
pub trait CatalogPort: Send + Sync {
    /// Ingredients of `rarity` native to `region`. Only common and uncommon
    /// ingredients are grouped by region.
    fn ingredients_by_region_and_rarity(
        &self,
        region: &Region,
        rarity: IngredientRarity,
    ) -> &[Ingredient];

    /// Uncommon ingredients of every region, pooled.
    fn uncommon_ingredients_any_region(&self) -> &[Ingredient];

    /// The global rare pool.
    fn rare_ingredients(&self) -> &[Ingredient];

    /// The global unique pool.
    fn unique_ingredients(&self) -> &[Ingredient];

    /// The ordered potion list of a category.
    fn potions_by_category(&self, category: PotionCategory) -> &[Potion];
}

/// Common and uncommon ingredients of a single region.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionIngredients {
    /// Common pool.
    #[serde(default)]
    pub common: Vec<Ingredient>,
    /// Uncommon pool.
    #[serde(default)]
    pub uncommon: Vec<Ingredient>,
}

/// Ordered potion lists, one per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PotionLists {
    /// Combat potions.
    #[serde(default)]
    pub combat: Vec<Potion>,
    /// Utility potions.
    #[serde(default)]
    pub utility: Vec<Potion>,
    /// Whimsy potions.
    #[serde(default)]
    pub whimsy: Vec<Potion>,
}

/// Already-parsed catalog data as handed over by the loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    /// Region pools keyed by region name.
    #[serde(default)]
    pub regions: BTreeMap<Region, RegionIngredients>,
    /// Global rare pool.
    #[serde(default)]
    pub rare: Vec<Ingredient>,
    /// Global unique pool.
    #[serde(default)]
    pub unique: Vec<Ingredient>,
    /// Potion lists.
    #[serde(default)]
    pub potions: PotionLists,
}

/// `CatalogPort` over data held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    data: CatalogData,
    uncommon_any_region: Vec<Ingredient>,
}

impl InMemoryCatalog {
    /// Indexes the given catalog data.
    #[must_use]
    pub fn new(data: CatalogData) -> Self {
        let uncommon_any_region = data
            .regions
            .values()
            .flat_map(|pools| pools.uncommon.iter().cloned())
            .collect();
        Self {
            data,
            uncommon_any_region,
        }
    }

    /// Regions known to the catalog, in name order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.data.regions.keys()
    }
}

impl From<CatalogData> for InMemoryCatalog {
    fn from(data: CatalogData) -> Self {
        Self::new(data)
    }
}

impl CatalogPort for InMemoryCatalog {
    fn ingredients_by_region_and_rarity(
        &self,
        region: &Region,
        rarity: IngredientRarity,
    ) -> &[Ingredient] {
        let Some(pools) = self.data.regions.get(region) else {
            return &[];
        };
        match rarity {
            IngredientRarity::Common => &pools.common,
            IngredientRarity::Uncommon => &pools.uncommon,
            IngredientRarity::Rare | IngredientRarity::Unique => &[],
        }
    }

    fn uncommon_ingredients_any_region(&self) -> &[Ingredient] {
        &self.uncommon_any_region
    }

    fn rare_ingredients(&self) -> &[Ingredient] {
        &self.data.rare
    }

    fn unique_ingredients(&self) -> &[Ingredient] {
        &self.data.unique
    }

    fn potions_by_category(&self, category: PotionCategory) -> &[Potion] {
        match category {
            PotionCategory::Combat => &self.data.potions.combat,
            PotionCategory::Utility => &self.data.potions.utility,
            PotionCategory::Whimsy => &self.data.potions.whimsy,
        }
    }
}
