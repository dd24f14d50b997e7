//! Ingredient entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rarity tier of an ingredient, in increasing scarcity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum IngredientRarity {
    /// Found in a region's common pool.
    #[default]
    Common,
    /// Found in a region's uncommon pool.
    Uncommon,
    /// Found in the global rare pool.
    Rare,
    /// Found in the global unique pool.
    Unique,
}

impl fmt::Display for IngredientRarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => write!(f, "common"),
            Self::Uncommon => write!(f, "uncommon"),
            Self::Rare => write!(f, "rare"),
            Self::Unique => write!(f, "unique"),
        }
    }
}

/// A foraging region. Common and uncommon ingredients are grouped per region.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    /// Creates a region from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the region name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable catalog ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Catalog identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Contribution to the combat score of a brew.
    pub combat: i32,
    /// Contribution to the utility score of a brew.
    pub utility: i32,
    /// Contribution to the whimsy score of a brew.
    pub whimsy: i32,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Rarity tag.
    pub rarity: IngredientRarity,
}
