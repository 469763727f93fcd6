/// Welcome event processing core
///
/// This module implements the registration-event pipeline:
/// 1. Dedup check against the processed-user store
/// 2. Random sampling of previously registered users
/// 3. Welcome message composition
/// 4. Push event delivery
/// 5. Record persistence with a 24h expiry
use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{Notification, PushEvent, SampledUser, StoredRecord};
use crate::services::push_client::Notifier;
use crate::services::store::{RawRecord, Store};

/// Upper bound on the candidate pool fetched from the store scan
const CANDIDATE_SCAN_LIMIT: usize = 50;

/// Maximum number of recently joined users referenced per welcome message
const MAX_SAMPLED_USERS: usize = 3;

pub struct EventProcessor {
    store: Arc<dyn Store>,
    notifier: Arc<dyn Notifier>,
    sender: String,
    service_name: String,
    record_ttl: Duration,
    rng: Mutex<StdRng>,
}

impl EventProcessor {
    pub fn new(
        store: Arc<dyn Store>,
        notifier: Arc<dyn Notifier>,
        sender: String,
        service_name: String,
        record_ttl_secs: u64,
    ) -> Self {
        Self {
            store,
            notifier,
            sender,
            service_name,
            record_ttl: Duration::seconds(record_ttl_secs as i64),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Replace the sampling RNG with a seeded one for deterministic tests.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Process one registration event, idempotent at id granularity.
    ///
    /// The dedup check and the final persistence are not atomic: two
    /// concurrent calls for the same id can both pass the check and
    /// double-deliver. Callers needing strict at-most-once delivery must
    /// serialize same-id events externally.
    pub async fn process(&self, notification: &Notification) -> Result<()> {
        info!(
            "processing registration event for user id {}",
            notification.id
        );

        if self.store.get(notification.id).await?.is_some() {
            info!(
                "notification {} already processed, skipping",
                notification.id
            );
            return Ok(());
        }

        let sample = self.sample_users().await?;
        let message = self.compose_message(&notification.name, &sample);

        let event = PushEvent {
            sender: self.sender.clone(),
            receiver: notification.id,
            message,
            recent_user_ids: sample.iter().map(|user| user.id).collect(),
        };
        let status = self.notifier.send(&event).await?;
        debug!(
            "push backend acknowledged event for user id {} with status {}",
            notification.id, status
        );

        self.persist(notification).await
    }

    /// Draw up to 3 users uniformly at random from the scanned pool.
    ///
    /// Shuffle-then-slice: the whole pool is permuted, the first 3 taken.
    /// Entries missing an id or name, or with an unparseable id, are
    /// dropped after selection, so a malformed pick shrinks the sample.
    async fn sample_users(&self) -> Result<Vec<SampledUser>> {
        let mut pool = self.store.scan(CANDIDATE_SCAN_LIMIT).await?;
        {
            let mut rng = self.rng.lock().await;
            pool.shuffle(&mut *rng);
        }
        pool.truncate(MAX_SAMPLED_USERS);

        let mut sample = Vec::with_capacity(pool.len());
        for fields in pool {
            match parse_candidate(&fields) {
                Some(user) => sample.push(user),
                None => debug!("skipping malformed candidate record: {:?}", fields),
            }
        }
        Ok(sample)
    }

    fn compose_message(&self, name: &str, sample: &[SampledUser]) -> String {
        let greeting = format!("Hi {}, welcome to {}.", name, self.service_name);
        let connections = match sample {
            [] => return greeting,
            [a] => format!("{} also joined recently.", a.name),
            [a, b] => format!("{} and {} also joined recently.", a.name, b.name),
            [a, b, c, ..] => format!(
                "{}, {} and {} also joined recently.",
                a.name, b.name, c.name
            ),
        };
        format!("{} {}", greeting, connections)
    }

    async fn persist(&self, notification: &Notification) -> Result<()> {
        let record = StoredRecord {
            id: notification.id,
            name: notification.name.clone(),
            expires_at: (Utc::now() + self.record_ttl).timestamp(),
        };
        self.store.put(&record).await?;
        info!(
            "persisted processed marker for user id {}, expires at {}",
            record.id, record.expires_at
        );
        Ok(())
    }
}

/// A candidate is usable only if both id and name are present and well-formed.
fn parse_candidate(fields: &RawRecord) -> Option<SampledUser> {
    let id = fields.get("id")?.parse().ok()?;
    let name = fields.get("name")?;
    if name.is_empty() {
        return None;
    }
    Some(SampledUser {
        id,
        name: name.clone(),
    })
}
