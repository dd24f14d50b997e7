//! Quantity lifecycle shared by collected ingredients and created potions.

use alchemist_core::clock::Clock;
use alchemist_core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Units held of a single stack, plus the used-up markers.
///
/// A stack that reaches zero is marked used but kept; only an explicit
/// removal deletes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    quantity: u32,
    used: bool,
    used_at: Option<DateTime<Utc>>,
}

impl StockLevel {
    /// Creates a fresh stack of `quantity` units.
    #[must_use]
    pub fn new(quantity: u32) -> Self {
        Self {
            quantity,
            used: quantity == 0,
            used_at: None,
        }
    }

    /// Units remaining.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether the stack has been used up.
    #[must_use]
    pub fn is_used(&self) -> bool {
        self.used
    }

    /// When the last unit was consumed.
    #[must_use]
    pub fn used_at(&self) -> Option<DateTime<Utc>> {
        self.used_at
    }

    /// Whether at least one unit remains.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Removes `amount` units.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if fewer than `amount` units remain.
    pub fn consume(&mut self, amount: u32, clock: &dyn Clock) -> Result<(), DomainError> {
        if amount > self.quantity {
            return Err(DomainError::Validation(format!(
                "cannot use {amount} unit(s), only {} left",
                self.quantity
            )));
        }
        self.quantity -= amount;
        if self.quantity == 0 {
            self.used = true;
            self.used_at = Some(clock.now());
        }
        Ok(())
    }

    /// Adds `amount` units and clears the used markers.
    pub fn restock(&mut self, amount: u32) {
        self.quantity = self.quantity.saturating_add(amount);
        if self.quantity > 0 {
            self.used = false;
            self.used_at = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alchemist_test_support::FixedClock;
    use chrono::TimeZone;

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_consume_decrements_quantity() {
        let mut stock = StockLevel::new(2);

        stock.consume(1, &fixed_clock()).unwrap();

        assert_eq!(stock.quantity(), 1);
        assert!(!stock.is_used());
        assert!(stock.used_at().is_none());
    }

    #[test]
    fn test_consume_last_unit_marks_used_with_timestamp() {
        let clock = fixed_clock();
        let mut stock = StockLevel::new(1);

        stock.consume(1, &clock).unwrap();

        assert_eq!(stock.quantity(), 0);
        assert!(stock.is_used());
        assert_eq!(stock.used_at(), Some(clock.0));
    }

    #[test]
    fn test_consume_more_than_available_returns_validation_error() {
        let mut stock = StockLevel::new(1);

        let result = stock.consume(2, &fixed_clock());

        match result.unwrap_err() {
            DomainError::Validation(msg) => {
                assert_eq!(msg, "cannot use 2 unit(s), only 1 left");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
        assert_eq!(stock.quantity(), 1);
    }

    #[test]
    fn test_restock_clears_used_markers() {
        let mut stock = StockLevel::new(1);
        stock.consume(1, &fixed_clock()).unwrap();

        stock.restock(2);

        assert_eq!(stock.quantity(), 2);
        assert!(!stock.is_used());
        assert!(stock.used_at().is_none());
    }
}
