//! A player's collected ingredients.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use alchemist_catalog::domain::ingredient::Ingredient;
use alchemist_core::clock::Clock;
use alchemist_core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::stock::StockLevel;

/// An ingredient in a player's pantry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedIngredient {
    /// Entry identifier.
    pub id: Uuid,
    /// The catalog ingredient.
    pub ingredient: Ingredient,
    /// Units held and used markers.
    pub stock: StockLevel,
    /// The foraging attempt that first produced this entry.
    pub forage_attempt_id: Uuid,
    /// When the entry was created.
    pub collected_at: DateTime<Utc>,
}

/// The collected ingredients of one player, keyed by catalog id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pantry {
    entries: BTreeMap<u32, CollectedIngredient>,
}

impl Pantry {
    /// Creates an empty pantry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `ingredient`.
    ///
    /// Collecting an ingredient already present restocks the existing entry
    /// instead of creating a second one.
    pub fn collect(
        &mut self,
        ingredient: Ingredient,
        quantity: u32,
        forage_attempt_id: Uuid,
        clock: &dyn Clock,
    ) -> &CollectedIngredient {
        let entry = self.preview_collect(ingredient, quantity, forage_attempt_id, clock);
        self.store(entry)
    }

    /// The entry `collect` would leave behind, without changing the pantry.
    #[must_use]
    pub fn preview_collect(
        &self,
        ingredient: Ingredient,
        quantity: u32,
        forage_attempt_id: Uuid,
        clock: &dyn Clock,
    ) -> CollectedIngredient {
        if let Some(existing) = self.entries.get(&ingredient.id) {
            let mut entry = existing.clone();
            entry.stock.restock(quantity);
            return entry;
        }
        CollectedIngredient {
            id: Uuid::new_v4(),
            ingredient,
            stock: StockLevel::new(quantity),
            forage_attempt_id,
            collected_at: clock.now(),
        }
    }

    /// Stores `entry`, replacing any entry for the same ingredient.
    pub fn store(&mut self, entry: CollectedIngredient) -> &CollectedIngredient {
        match self.entries.entry(entry.ingredient.id) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(entry);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(entry),
        }
    }

    /// Uses one unit of the ingredient with catalog id `ingredient_id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the ingredient is not in the
    /// pantry or has no units left.
    pub fn use_ingredient(
        &mut self,
        ingredient_id: u32,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        let entry = self.entries.get_mut(&ingredient_id).ok_or_else(|| {
            DomainError::Validation(format!("ingredient {ingredient_id} not found in pantry"))
        })?;
        entry.stock.consume(1, clock)
    }

    /// Whether at least one unit of the ingredient remains.
    #[must_use]
    pub fn is_available(&self, ingredient_id: u32) -> bool {
        self.entries
            .get(&ingredient_id)
            .is_some_and(|entry| entry.stock.is_available())
    }

    /// Looks up an entry by catalog id.
    #[must_use]
    pub fn get(&self, ingredient_id: u32) -> Option<&CollectedIngredient> {
        self.entries.get(&ingredient_id)
    }

    /// Removes an entry entirely, whatever its quantity.
    pub fn remove(&mut self, ingredient_id: u32) -> Option<CollectedIngredient> {
        self.entries.remove(&ingredient_id)
    }

    /// Entries in catalog id order.
    pub fn iter(&self) -> impl Iterator<Item = &CollectedIngredient> {
        self.entries.values()
    }

    /// Number of entries, used-up ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pantry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
