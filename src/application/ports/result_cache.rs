use std::time::Duration;

use crate::domain::Fingerprint;

/// Expiring store for computed text results.
///
/// Implementations must be safe to share between concurrent requests.
pub trait ResultCache: Send + Sync {
    fn get(&self, key: &Fingerprint) -> Option<String>;

    fn set(&self, key: Fingerprint, value: String, ttl: Duration);
}
