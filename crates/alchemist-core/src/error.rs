//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Randomness-driven branches (rarity downgrades, the potion brewer roll)
/// are modelled outcomes and never surface here. Reaching the daily
/// foraging limit is likewise an outcome, not an error.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A brew was requested with the wrong number of ingredients or with
    /// duplicates.
    #[error("invalid recipe composition: {0}")]
    InvalidRecipeComposition(String),

    /// Catalog data required by the operation is missing or empty.
    #[error("empty catalog: {0}")]
    EmptyCatalog(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
