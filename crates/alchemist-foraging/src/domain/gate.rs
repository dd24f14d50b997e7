//! Daily attempt limit.
//!
//! The gate holds no counters. The number of attempts already made today
//! comes from the persistence collaborator, so calling it repeatedly is
//! harmless. The read-then-compare here is advisory; the binding check is
//! `RecordRepository::append_if_under_limit`, which closes the race between
//! two concurrent attempts that both see room under the limit.

/// Attempts left today.
#[must_use]
pub fn remaining(limit_per_day: u32, attempts_today: u32) -> u32 {
    limit_per_day.saturating_sub(attempts_today)
}

/// Whether another attempt is allowed.
#[must_use]
pub fn check(remaining: u32) -> bool {
    remaining > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_counts_down_to_zero() {
        assert_eq!(remaining(3, 0), 3);
        assert_eq!(remaining(3, 2), 1);
        assert_eq!(remaining(3, 3), 0);
    }

    #[test]
    fn test_remaining_never_goes_negative() {
        assert_eq!(remaining(3, 5), 0);
    }

    #[test]
    fn test_check_allows_only_with_attempts_left() {
        assert!(!check(0));
        assert!(check(1));
    }

    #[test]
    fn test_gate_is_stateless() {
        for _ in 0..5 {
            assert_eq!(remaining(3, 1), 2);
            assert!(check(remaining(3, 1)));
        }
    }
}
