use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::application::ports::ResultCache;
use crate::domain::Fingerprint;

#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    pub max_entries: usize,
    /// When full, `1 / cull_frequency` of the entries (oldest first) are dropped.
    pub cull_frequency: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            cull_frequency: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug)]
struct CacheEntry {
    value: String,
    created_at: Instant,
    ttl: Duration,
    sequence: u64,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.ttl
    }
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<Fingerprint, CacheEntry>,
    next_sequence: u64,
    stats: CacheStats,
}

impl CacheState {
    fn purge_expired(&mut self, now: Instant) {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        self.stats.expirations += (before - self.entries.len()) as u64;
    }

    fn cull_oldest(&mut self, count: usize) {
        let mut by_age: Vec<(u64, Fingerprint)> = self
            .entries
            .iter()
            .map(|(key, entry)| (entry.sequence, key.clone()))
            .collect();
        by_age.sort_unstable_by_key(|(sequence, _)| *sequence);

        for (_, key) in by_age.into_iter().take(count) {
            self.entries.remove(&key);
        }
        self.stats.evictions += count as u64;
    }
}

/// Process-local bounded cache. Contents do not survive a restart.
pub struct InMemoryResultCache {
    config: CacheConfig,
    state: Mutex<CacheState>,
}

impl InMemoryResultCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config: CacheConfig {
                max_entries: config.max_entries.max(1),
                cull_frequency: config.cull_frequency.max(1),
            },
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        self.state.lock().stats
    }

    pub fn clear(&self) {
        self.state.lock().entries.clear();
    }
}

impl Default for InMemoryResultCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl ResultCache for InMemoryResultCache {
    fn get(&self, key: &Fingerprint) -> Option<String> {
        let now = Instant::now();
        let mut guard = self.state.lock();
        let state = &mut *guard;

        let expired = match state.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                let value = entry.value.clone();
                state.stats.hits += 1;
                return Some(value);
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            state.entries.remove(key);
            state.stats.expirations += 1;
        }
        state.stats.misses += 1;
        None
    }

    fn set(&self, key: Fingerprint, value: String, ttl: Duration) {
        let now = Instant::now();
        let mut state = self.state.lock();

        if !state.entries.contains_key(&key) && state.entries.len() >= self.config.max_entries {
            state.purge_expired(now);

            if state.entries.len() >= self.config.max_entries {
                let count = (state.entries.len() / self.config.cull_frequency).max(1);
                state.cull_oldest(count);
                tracing::debug!(culled = count, "Result cache full, culled oldest entries");
            }
        }

        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.entries.insert(
            key,
            CacheEntry {
                value,
                created_at: now,
                ttl,
                sequence,
            },
        );
    }
}
