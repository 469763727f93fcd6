use serde::{Deserialize, Serialize};

/// Inbound "new user" registration event
///
/// Decoded from the raw message carried by each batch record. `created_at`
/// is accepted for completeness but not used by processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub created_at: String,
}

/// Persisted marker of a processed notification
///
/// Existence of a record for an id means that id was already fully
/// processed and must not be reprocessed. `expires_at` is epoch seconds;
/// the store purges the record after that point, not the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: i64,
    pub name: String,
    pub expires_at: i64,
}

/// One well-formed entry drawn from the candidate pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledUser {
    pub id: i64,
    pub name: String,
}

/// Outbound payload sent to the push backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushEvent {
    pub sender: String,
    pub receiver: i64,
    pub message: String,
    pub recent_user_ids: Vec<i64>,
}

/// One raw item of an inbound batch; `message` is a JSON-encoded Notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub message: String,
}

/// Inbound batch envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBatch {
    pub records: Vec<EventRecord>,
}

/// Per-batch processing outcome returned to the host
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DispatchSummary {
    pub received: usize,
    pub processed: usize,
    pub failed: usize,
}
