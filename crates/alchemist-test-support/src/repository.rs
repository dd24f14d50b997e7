//! Test repositories: mock `RecordRepository` implementations for tests.

use std::sync::Mutex;

use alchemist_core::error::DomainError;
use alchemist_core::repository::{RecordRepository, StoredRecord};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

fn matches(
    record: &StoredRecord,
    player_id: Uuid,
    record_type: &str,
    since: DateTime<Utc>,
) -> bool {
    record.player_id == player_id
        && record.record_type == record_type
        && record.recorded_at >= since
}

#[allow(clippy::cast_possible_truncation)]
fn count_matching(
    records: &[StoredRecord],
    player_id: Uuid,
    record_type: &str,
    since: DateTime<Utc>,
) -> u32 {
    records
        .iter()
        .filter(|r| matches(r, player_id, record_type, since))
        .count() as u32
}

/// A record repository that keeps every record in memory and records all
/// appends. Counting sees both the pre-existing records and the appended
/// ones; the conditional append checks and writes under a single lock.
#[derive(Debug, Default)]
pub struct RecordingRecordRepository {
    existing: Vec<StoredRecord>,
    appended: Mutex<Vec<StoredRecord>>,
}

impl RecordingRecordRepository {
    /// Create a new, empty recording repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording repository pre-loaded with `existing` records.
    #[must_use]
    pub fn with_records(existing: Vec<StoredRecord>) -> Self {
        Self {
            existing,
            appended: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all records that were appended.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn appended_records(&self) -> Vec<StoredRecord> {
        self.appended.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordRepository for RecordingRecordRepository {
    async fn count_records_since(
        &self,
        player_id: Uuid,
        record_type: &str,
        since: DateTime<Utc>,
    ) -> Result<u32, DomainError> {
        let appended = self.appended.lock().unwrap();
        Ok(count_matching(&self.existing, player_id, record_type, since)
            + count_matching(&appended, player_id, record_type, since))
    }

    async fn append_if_under_limit(
        &self,
        record: StoredRecord,
        since: DateTime<Utc>,
        limit: u32,
    ) -> Result<bool, DomainError> {
        let mut appended = self.appended.lock().unwrap();
        let count = count_matching(&self.existing, record.player_id, &record.record_type, since)
            + count_matching(&appended, record.player_id, &record.record_type, since);
        if count >= limit {
            return Ok(false);
        }
        appended.push(record);
        Ok(true)
    }

    async fn append_records(&self, records: &[StoredRecord]) -> Result<(), DomainError> {
        self.appended.lock().unwrap().extend_from_slice(records);
        Ok(())
    }
}

/// A record repository that never holds anything: counts are always zero
/// and appends are silently accepted.
#[derive(Debug)]
pub struct EmptyRecordRepository;

#[async_trait]
impl RecordRepository for EmptyRecordRepository {
    async fn count_records_since(
        &self,
        _player_id: Uuid,
        _record_type: &str,
        _since: DateTime<Utc>,
    ) -> Result<u32, DomainError> {
        Ok(0)
    }

    async fn append_if_under_limit(
        &self,
        _record: StoredRecord,
        _since: DateTime<Utc>,
        _limit: u32,
    ) -> Result<bool, DomainError> {
        Ok(true)
    }

    async fn append_records(&self, _records: &[StoredRecord]) -> Result<(), DomainError> {
        Ok(())
    }
}

/// A record repository that reports room under the limit when counting but
/// refuses the conditional append, as if a concurrent request took the last
/// slot in between.
#[derive(Debug)]
pub struct ContendedRecordRepository;

#[async_trait]
impl RecordRepository for ContendedRecordRepository {
    async fn count_records_since(
        &self,
        _player_id: Uuid,
        _record_type: &str,
        _since: DateTime<Utc>,
    ) -> Result<u32, DomainError> {
        Ok(0)
    }

    async fn append_if_under_limit(
        &self,
        _record: StoredRecord,
        _since: DateTime<Utc>,
        _limit: u32,
    ) -> Result<bool, DomainError> {
        Ok(false)
    }

    async fn append_records(&self, _records: &[StoredRecord]) -> Result<(), DomainError> {
        Ok(())
    }
}

/// A record repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingRecordRepository;

#[async_trait]
impl RecordRepository for FailingRecordRepository {
    async fn count_records_since(
        &self,
        _player_id: Uuid,
        _record_type: &str,
        _since: DateTime<Utc>,
    ) -> Result<u32, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn append_if_under_limit(
        &self,
        _record: StoredRecord,
        _since: DateTime<Utc>,
        _limit: u32,
    ) -> Result<bool, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn append_records(&self, _records: &[StoredRecord]) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}

/// A record repository that accepts the conditional append but fails every
/// unconditional append, so a forage is stored while its collection is not.
#[derive(Debug)]
pub struct UnsavedCollectionRecordRepository;

#[async_trait]
impl RecordRepository for UnsavedCollectionRecordRepository {
    async fn count_records_since(
        &self,
        _player_id: Uuid,
        _record_type: &str,
        _since: DateTime<Utc>,
    ) -> Result<u32, DomainError> {
        Ok(0)
    }

    async fn append_if_under_limit(
        &self,
        _record: StoredRecord,
        _since: DateTime<Utc>,
        _limit: u32,
    ) -> Result<bool, DomainError> {
        Ok(true)
    }

    async fn append_records(&self, _records: &[StoredRecord]) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection reset".into()))
    }
}
