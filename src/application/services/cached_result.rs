use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::application::ports::ResultCache;
use crate::domain::Fingerprint;

/// Reads a JSON-encoded value. Undecodable entries count as misses.
pub(super) fn load<T: DeserializeOwned>(cache: &dyn ResultCache, key: &Fingerprint) -> Option<T> {
    let raw = cache.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Discarding undecodable cache entry");
            None
        }
    }
}

pub(super) fn store<T: Serialize>(
    cache: &dyn ResultCache,
    key: Fingerprint,
    value: &T,
    ttl: Duration,
) {
    match serde_json::to_string(value) {
        Ok(raw) => cache.set(key, raw, ttl),
        Err(e) => tracing::warn!(key = %key, error = %e, "Could not encode result for cache"),
    }
}
