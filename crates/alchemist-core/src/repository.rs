//! Record repository abstraction.
//!
//! The engine never stores anything itself. It hands plain records to the
//! persistence collaborator through this port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::DomainError;

/// Stored representation of an engine record.
#[derive(Debug, Clone)]
pub struct StoredRecord {
    /// Unique record identifier.
    pub record_id: Uuid,
    /// The player who owns the record.
    pub player_id: Uuid,
    /// Record type name for deserialization routing.
    pub record_type: String,
    /// Serialized record payload.
    pub payload: serde_json::Value,
    /// Correlation ID of the command that produced the record.
    pub correlation_id: Uuid,
    /// Timestamp of record creation.
    pub recorded_at: DateTime<Utc>,
}

impl StoredRecord {
    /// Serializes `payload` into a stored record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the payload cannot be
    /// serialized.
    pub fn from_payload<T: Serialize>(
        record_id: Uuid,
        player_id: Uuid,
        record_type: &str,
        payload: &T,
        correlation_id: Uuid,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let payload = serde_json::to_value(payload).map_err(|e| {
            DomainError::Infrastructure(format!("record serialization failed: {e}"))
        })?;
        Ok(Self {
            record_id,
            player_id,
            record_type: record_type.to_owned(),
            payload,
            correlation_id,
            recorded_at,
        })
    }
}

/// Repository trait for appending and counting player records.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Counts records of `record_type` owned by `player_id` recorded at or
    /// after `since`.
    async fn count_records_since(
        &self,
        player_id: Uuid,
        record_type: &str,
        since: DateTime<Utc>,
    ) -> Result<u32, DomainError>;

    /// Atomically appends `record` only if fewer than `limit` records of the
    /// same type and player exist since `since`.
    ///
    /// Returns `false` without writing when the limit is already reached.
    async fn append_if_under_limit(
        &self,
        record: StoredRecord,
        since: DateTime<Utc>,
        limit: u32,
    ) -> Result<bool, DomainError>;

    /// Appends records unconditionally.
    async fn append_records(&self, records: &[StoredRecord]) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Serialize)]
    struct Payload {
        name: &'static str,
        quantity: u32,
    }

    #[test]
    fn test_from_payload_serializes_and_copies_metadata() {
        let record_id = Uuid::new_v4();
        let player_id = Uuid::new_v4();
        let correlation_id = Uuid::new_v4();
        let at = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();

        let record = StoredRecord::from_payload(
            record_id,
            player_id,
            "inventory.ingredient_collected",
            &Payload {
                name: "Dewcap",
                quantity: 2,
            },
            correlation_id,
            at,
        )
        .unwrap();

        assert_eq!(record.record_id, record_id);
        assert_eq!(record.player_id, player_id);
        assert_eq!(record.record_type, "inventory.ingredient_collected");
        assert_eq!(record.correlation_id, correlation_id);
        assert_eq!(record.recorded_at, at);
        assert_eq!(
            record.payload,
            serde_json::json!({ "name": "Dewcap", "quantity": 2 })
        );
    }
}
