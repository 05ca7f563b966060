use std::future::Future;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::backend::StorageBackend;
use crate::errors::CoreError;

/// How long a cache entry stays fresh: 5 minutes.
pub const CACHE_EXPIRY_MS: i64 = 5 * 60 * 1000;

/// A cached payload paired with the timestamp it was fetched,
/// used to decide staleness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub payload: T,
    /// Fetch time, unix milliseconds
    pub timestamp: i64,
}

/// Time-boxed cache over session-scoped storage.
///
/// Entries are JSON envelopes under string keys (`coin_{id}`,
/// `history_{id}_{interval}`). An entry is fresh while
/// `now - timestamp < expiry`; staleness triggers a refetch that
/// overwrites it. Callers pass `now_ms` explicitly so freshness is
/// decided in one place and tests control the clock.
///
/// If two callers race past a stale check, both fetch and the last
/// write wins — acceptable duplicate work on idempotent read-only data.
pub struct SessionCache {
    backend: Box<dyn StorageBackend>,
}

impl SessionCache {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Return the payload under `key` if present and still fresh.
    /// A missing entry, corrupt envelope, or stale timestamp is a miss.
    #[must_use]
    pub fn fresh_payload<T: DeserializeOwned>(
        &self,
        key: &str,
        now_ms: i64,
        expiry_ms: i64,
    ) -> Option<T> {
        let raw = self.backend.get(key)?;
        let envelope: Envelope<T> = match serde_json::from_str(&raw) {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Corrupt cache envelope under '{key}', treating as miss: {e}");
                return None;
            }
        };
        (now_ms - envelope.timestamp < expiry_ms).then_some(envelope.payload)
    }

    /// Store `payload` under `key` stamped with `now_ms`.
    pub fn store<T: Serialize>(
        &mut self,
        key: &str,
        payload: &T,
        now_ms: i64,
    ) -> Result<(), CoreError> {
        let raw = serde_json::to_string(&Envelope {
            payload,
            timestamp: now_ms,
        })
        .map_err(|e| CoreError::Serialization(e.to_string()))?;
        self.backend.set(key, &raw)
    }

    /// Cache-or-fetch: return the fresh cached payload without invoking
    /// `fetch`, or await `fetch()`, overwrite the entry with a fresh
    /// timestamp, and return the result.
    ///
    /// If `fetch` fails the entry is left untouched — stale data, if any,
    /// remains available on the next read — and the error is surfaced to
    /// the caller rather than retried.
    pub async fn get_or_fetch<T, F, Fut>(
        &mut self,
        key: &str,
        now_ms: i64,
        expiry_ms: i64,
        fetch: F,
    ) -> Result<T, CoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, CoreError>>,
    {
        if let Some(hit) = self.fresh_payload(key, now_ms, expiry_ms) {
            return Ok(hit);
        }

        let payload = fetch().await?;
        self.store(key, &payload, now_ms)?;
        Ok(payload)
    }

    /// Drop the entry under `key`, fresh or not.
    pub fn evict(&mut self, key: &str) -> Result<(), CoreError> {
        self.backend.remove(key)
    }
}

impl std::fmt::Debug for SessionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCache").finish_non_exhaustive()
    }
}
