//! Query handlers for the Foraging context.

use alchemist_core::clock::Clock;
use alchemist_core::error::DomainError;
use alchemist_core::repository::RecordRepository;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::attempt::FORAGE_ATTEMPT_RECORD_TYPE;
use crate::domain::config::ForagingConfig;
use crate::domain::gate;

/// Read-only view of a player's foraging allowance for today.
#[derive(Debug, Serialize)]
pub struct AttemptAllowanceView {
    /// The player.
    pub player_id: Uuid,
    /// The configured daily limit.
    pub limit: u32,
    /// Attempts recorded since UTC midnight.
    pub attempts_today: u32,
    /// Attempts left today.
    pub remaining: u32,
    /// Whether another attempt is allowed.
    pub allowed: bool,
}

/// Retrieves how many foraging attempts the player has left today.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn remaining_attempts_today(
    player_id: Uuid,
    config: &ForagingConfig,
    clock: &dyn Clock,
    repo: &dyn RecordRepository,
) -> Result<AttemptAllowanceView, DomainError> {
    let attempts_today = repo
        .count_records_since(player_id, FORAGE_ATTEMPT_RECORD_TYPE, clock.start_of_day())
        .await?;
    let remaining = gate::remaining(config.daily_limit, attempts_today);
    Ok(AttemptAllowanceView {
        player_id,
        limit: config.daily_limit,
        attempts_today,
        remaining,
        allowed: gate::check(remaining),
    })
}

#[cfg(test)]
mod tests {
    use alchemist_core::error::DomainError;
    use alchemist_core::repository::StoredRecord;
    use alchemist_test_support::{
        EmptyRecordRepository, FailingRecordRepository, FixedClock, RecordingRecordRepository,
    };
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::remaining_attempts_today;
    use crate::domain::attempt::FORAGE_ATTEMPT_RECORD_TYPE;
    use crate::domain::config::ForagingConfig;

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn test_remaining_attempts_with_no_history_is_full_limit() {
        let view = remaining_attempts_today(
            Uuid::new_v4(),
            &ForagingConfig { daily_limit: 3 },
            &fixed_clock(),
            &EmptyRecordRepository,
        )
        .await
        .unwrap();

        assert_eq!(view.remaining, 3);
        assert!(view.allowed);
    }

    #[tokio::test]
    async fn test_remaining_attempts_at_limit_is_zero_and_disallowed() {
        // Arrange
        let player_id = Uuid::new_v4();
        let records = (0..3)
            .map(|_| StoredRecord {
                record_id: Uuid::new_v4(),
                player_id,
                record_type: FORAGE_ATTEMPT_RECORD_TYPE.to_owned(),
                payload: serde_json::json!({}),
                correlation_id: Uuid::new_v4(),
                recorded_at: fixed_clock().0,
            })
            .collect();
        let repo = RecordingRecordRepository::with_records(records);

        // Act
        let view = remaining_attempts_today(
            player_id,
            &ForagingConfig { daily_limit: 3 },
            &fixed_clock(),
            &repo,
        )
        .await
        .unwrap();

        // Assert
        assert_eq!(view.attempts_today, 3);
        assert_eq!(view.remaining, 0);
        assert!(!view.allowed);
    }

    #[tokio::test]
    async fn test_remaining_attempts_with_failing_repo_returns_error() {
        let result = remaining_attempts_today(
            Uuid::new_v4(),
            &ForagingConfig::default(),
            &fixed_clock(),
            &FailingRecordRepository,
        )
        .await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
