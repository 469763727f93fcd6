/// Processed-user record store
///
/// The store is a key-value capability: point lookup by user id, a
/// bounded unordered scan used to build the sampling candidate pool, and
/// an upsert carrying an expiry. Expired records are purged by the store
/// itself (Redis key expiry), never by application-side deletion.
use std::collections::HashMap;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use tracing::debug;

use crate::error::Result;
use crate::models::StoredRecord;

/// Raw record as returned by the store: a flat field map.
///
/// Kept untyped so the sampling step can filter malformed entries
/// (missing or unparseable fields) instead of failing the whole scan.
pub type RawRecord = HashMap<String, String>;

#[async_trait]
pub trait Store: Send + Sync {
    /// Point lookup; `Some` for any existing record regardless of content.
    async fn get(&self, id: i64) -> Result<Option<RawRecord>>;

    /// Unordered scan of up to `limit` records. No ordering guarantee.
    async fn scan(&self, limit: usize) -> Result<Vec<RawRecord>>;

    /// Upsert a processed-user record; expiry is enforced by the store.
    async fn put(&self, record: &StoredRecord) -> Result<()>;
}

/// Redis-backed store: one hash per user at `{prefix}:{id}`
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    pub fn new(conn: ConnectionManager, key_prefix: String) -> Self {
        Self { conn, key_prefix }
    }

    fn key(&self, id: i64) -> String {
        format!("{}:{}", self.key_prefix, id)
    }
}

#[async_trait]
impl Store for RedisStore {
    async fn get(&self, id: i64) -> Result<Option<RawRecord>> {
        let mut conn = self.conn.clone();
        let fields: RawRecord = conn.hgetall(self.key(id)).await?;
        // A missing hash comes back as an empty map
        Ok(if fields.is_empty() { None } else { Some(fields) })
    }

    async fn scan(&self, limit: usize) -> Result<Vec<RawRecord>> {
        let pattern = format!("{}:*", self.key_prefix);

        let mut keys: Vec<String> = Vec::new();
        {
            let mut conn = self.conn.clone();
            let mut iter = conn.scan_match::<_, String>(&pattern).await?;
            while let Some(key) = iter.next_item().await {
                keys.push(key);
                if keys.len() >= limit {
                    break;
                }
            }
        }

        let mut conn = self.conn.clone();
        let mut records = Vec::with_capacity(keys.len());
        for key in keys {
            let fields: RawRecord = conn.hgetall(&key).await?;
            if fields.is_empty() {
                // Key expired between SCAN and HGETALL
                debug!("record at {} vanished during scan, skipping", key);
                continue;
            }
            records.push(fields);
        }
        Ok(records)
    }

    async fn put(&self, record: &StoredRecord) -> Result<()> {
        let key = self.key(record.id);
        let mut conn = self.conn.clone();
        let _: () = conn
            .hset_multiple(
                &key,
                &[
                    ("id", record.id.to_string()),
                    ("name", record.name.clone()),
                    ("expires_at", record.expires_at.to_string()),
                ],
            )
            .await?;
        let _: bool = conn.expire_at(&key, record.expires_at).await?;
        Ok(())
    }
}
