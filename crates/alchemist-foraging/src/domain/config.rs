//! Foraging configuration.

use alchemist_core::error::DomainError;

/// Environment variable holding the daily foraging limit.
pub const DAILY_LIMIT_ENV: &str = "ALCHEMIST_DAILY_FORAGE_LIMIT";

/// Attempts per day when nothing is configured.
pub const DEFAULT_DAILY_LIMIT: u32 = 10;

/// Settings for the foraging engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForagingConfig {
    /// Maximum foraging attempts per player per UTC day.
    pub daily_limit: u32,
}

impl Default for ForagingConfig {
    fn default() -> Self {
        Self {
            daily_limit: DEFAULT_DAILY_LIMIT,
        }
    }
}

impl ForagingConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset keys.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if a value cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let daily_limit = match lookup(DAILY_LIMIT_ENV) {
            Some(raw) => raw.trim().parse().map_err(|e| {
                DomainError::Configuration(format!("{DAILY_LIMIT_ENV} must be a valid u32: {e}"))
            })?,
            None => DEFAULT_DAILY_LIMIT,
        };
        Ok(Self { daily_limit })
    }
}
