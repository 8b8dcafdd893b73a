use crate::utils::roles::RoleEntry;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// How long a cached result set stays valid.
pub const SESSION_TTL_MINUTES: i64 = 10;

/// How often the sweeper evicts expired entries.
pub const SWEEP_INTERVAL_SECONDS: u64 = 5 * 60;

/// Identifies one cached result set: a player queried within a chat.
///
/// A struct key rather than a concatenated string, so a chat id or ckey
/// containing a separator character cannot collide with another key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub chat_id: i64,
    pub ckey: String,
}

/// A cached play-time result set. Read-only once inserted; a repeat query
/// for the same key replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub roles: Vec<RoleEntry>,
    pub total_time: Option<String>,
    pub ckey: String,
    pub captured_at: DateTime<Utc>,
}

/// Shared cache of query results, so page navigation never re-queries the
/// database. Cloning yields another handle to the same map.
///
/// Expiry is enforced only by the periodic sweep, not at read time, so an
/// entry can stay readable for up to TTL + sweep interval.
#[derive(Debug, Clone, Default)]
pub struct SessionCache {
    inner: Arc<Mutex<HashMap<SessionKey, SessionRecord>>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a result set, stamping it with the current time. Any
    /// previous record under the same key is replaced.
    pub async fn insert(&self, key: SessionKey, roles: Vec<RoleEntry>, total_time: Option<String>) {
        let record = SessionRecord {
            roles,
            total_time,
            ckey: key.ckey.clone(),
            captured_at: Utc::now(),
        };
        self.inner.lock().await.insert(key, record);
    }

    pub async fn get(&self, key: &SessionKey) -> Option<SessionRecord> {
        self.inner.lock().await.get(key).cloned()
    }

    /// Finds a cached record for the given chat, whatever player it is
    /// for. Normally a chat holds at most one live session; if several
    /// exist, which one is returned is unspecified.
    pub async fn find_by_chat(&self, chat_id: i64) -> Option<(SessionKey, SessionRecord)> {
        self.inner
            .lock()
            .await
            .iter()
            .find(|(key, _)| key.chat_id == chat_id)
            .map(|(key, record)| (key.clone(), record.clone()))
    }

    /// Removes every entry older than `ttl`.
    pub async fn sweep_expired(&self, ttl: Duration) -> usize {
        self.sweep_expired_at(Utc::now(), ttl).await
    }

    /// Sweep against an explicit "now", used directly by tests.
    pub async fn sweep_expired_at(&self, now: DateTime<Utc>, ttl: Duration) -> usize {
        let mut map = self.inner.lock().await;
        let before = map.len();
        map.retain(|_, record| now - record.captured_at <= ttl);
        before - map.len()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}
