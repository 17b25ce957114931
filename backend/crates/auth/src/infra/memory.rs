//! In-Memory Session Store
//!
//! Process-local expiring key-value store. Entries expire lazily: an
//! expired entry is invisible to `get` the instant its deadline passes,
//! and is physically removed by the periodic `cleanup_expired` sweep.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::repository::SessionStore;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

struct SessionEntry {
    user_id: UserId,
    expires_at_ms: i64,
}

/// In-memory implementation of the session store
#[derive(Default)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, SessionEntry>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn deadline(ttl: Duration) -> i64 {
        Utc::now().timestamp_millis() + ttl.as_millis() as i64
    }
}

impl SessionStore for InMemorySessionStore {
    async fn put(&self, key: &str, user_id: &UserId, ttl: Duration) -> AuthResult<()> {
        let entry = SessionEntry {
            user_id: user_id.clone(),
            expires_at_ms: Self::deadline(ttl),
        };
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn get(&self, key: &str) -> AuthResult<Option<UserId>> {
        let now_ms = Utc::now().timestamp_millis();
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|e| e.expires_at_ms > now_ms)
            .map(|e| e.user_id.clone()))
    }

    async fn delete(&self, key: &str) -> AuthResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| e.expires_at_ms > now_ms);
        let removed = (before - entries.len()) as u64;

        if removed > 0 {
            tracing::info!(sessions_deleted = removed, "Cleaned up expired sessions");
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ttl() -> Duration {
        Duration::from_secs(60)
    }

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let store = InMemorySessionStore::new();
        let user_id = UserId::generate();

        store.put("request::abc", &user_id, ttl()).await.unwrap();

        let found = store.get("request::abc").await.unwrap();
        assert_eq!(found, Some(user_id));
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get("request::nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_entry_invisible() {
        let store = InMemorySessionStore::new();
        let user_id = UserId::generate();

        store
            .put("request::abc", &user_id, Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(store.get("request::abc").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_replaces_existing() {
        let store = InMemorySessionStore::new();
        let first = UserId::generate();
        let second = UserId::generate();

        store.put("request::abc", &first, ttl()).await.unwrap();
        store.put("request::abc", &second, ttl()).await.unwrap();

        assert_eq!(store.get("request::abc").await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemorySessionStore::new();
        let user_id = UserId::generate();

        store.put("request::abc", &user_id, ttl()).await.unwrap();
        store.delete("request::abc").await.unwrap();

        assert_eq!(store.get("request::abc").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_absent_key_is_ok() {
        let store = InMemorySessionStore::new();
        assert!(store.delete("request::nope").await.is_ok());
    }

    #[tokio::test]
    async fn test_cleanup_expired() {
        let store = InMemorySessionStore::new();
        let user_id = UserId::generate();

        store
            .put("request::dead", &user_id, Duration::ZERO)
            .await
            .unwrap();
        store.put("request::live", &user_id, ttl()).await.unwrap();

        let removed = store.cleanup_expired().await.unwrap();
        assert_eq!(removed, 1);

        assert_eq!(store.get("request::dead").await.unwrap(), None);
        assert_eq!(store.get("request::live").await.unwrap(), Some(user_id));
    }
}
