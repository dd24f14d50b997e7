//! Potion entities and categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rarity of a brewed potion.
///
/// Catalog files use the Portuguese tags, which are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PotionRarity {
    /// Common potion.
    #[serde(alias = "Comum", alias = "common")]
    Common,
    /// Uncommon potion.
    #[serde(alias = "Incomum", alias = "uncommon")]
    Uncommon,
    /// Rare potion.
    #[serde(alias = "Raro", alias = "Rara", alias = "rare")]
    Rare,
    /// Very rare potion.
    #[serde(alias = "Muito Raro", alias = "Muito Rara", alias = "very_rare")]
    VeryRare,
    /// Legendary potion.
    #[serde(alias = "Lendário", alias = "Lendária", alias = "legendary")]
    Legendary,
}

impl fmt::Display for PotionRarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => write!(f, "Common"),
            Self::Uncommon => write!(f, "Uncommon"),
            Self::Rare => write!(f, "Rare"),
            Self::VeryRare => write!(f, "Very Rare"),
            Self::Legendary => write!(f, "Legendary"),
        }
    }
}

/// The three potion categories, which double as the scoring attributes of
/// a brew.
///
/// Declaration order is the tie-break priority: combat beats utility beats
/// whimsy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PotionCategory {
    /// Combat potions.
    Combat,
    /// Utility potions.
    Utility,
    /// Whimsy potions.
    Whimsy,
}

impl PotionCategory {
    /// All categories in tie-break priority order.
    pub const ALL: [Self; 3] = [Self::Combat, Self::Utility, Self::Whimsy];
}

impl fmt::Display for PotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Combat => write!(f, "combat"),
            Self::Utility => write!(f, "utility"),
            Self::Whimsy => write!(f, "whimsy"),
        }
    }
}

/// An immutable catalog potion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    /// Catalog identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Rarity tag.
    pub rarity: PotionRarity,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_potion_rarity_accepts_catalog_tags() {
        let tags = serde_json::json!(["Comum", "Incomum", "Raro", "Muito Raro", "Lendário"]);

        let rarities: Vec<PotionRarity> = serde_json::from_value(tags).unwrap();

        assert_eq!(
            rarities,
            vec![
                PotionRarity::Common,
                PotionRarity::Uncommon,
                PotionRarity::Rare,
                PotionRarity::VeryRare,
                PotionRarity::Legendary,
            ]
        );
    }

    #[test]
    fn test_category_priority_follows_declaration_order() {
        let mut shuffled = vec![
            PotionCategory::Whimsy,
            PotionCategory::Combat,
            PotionCategory::Utility,
        ];
        shuffled.sort();

        assert_eq!(shuffled, PotionCategory::ALL.to_vec());
    }
}
