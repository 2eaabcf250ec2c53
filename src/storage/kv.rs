//! Size-bounded local key-value area.

use crate::errors::{AppError, AppResult};
use std::collections::HashMap;

/// Default capacity, matching what browsers grant to local storage.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Persistence seam used by the record store.
///
/// `set` must fail with [`AppError::QuotaExceeded`] when storing the value
/// would push the area past its capacity. Each call is atomic: a failed
/// `set` leaves the previous value in place.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Record an audit line for a store operation. No-op unless the backend
    /// keeps an audit trail.
    fn audit(&self, _operation: &str, _target: &str, _message: &str) {}
}

/// In-memory backend with the same quota rules as the SQLite one.
#[derive(Debug, Clone)]
pub struct MemoryKv {
    entries: HashMap<String, String>,
    quota: usize,
}

impl Default for MemoryKv {
    fn default() -> Self {
        Self::with_quota(DEFAULT_QUOTA_BYTES)
    }
}

impl MemoryKv {
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota,
        }
    }

    /// Bytes currently used (keys + values).
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let others: usize = self
            .entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum();
        let needed = key.len() + value.len();

        if others + needed > self.quota {
            return Err(AppError::QuotaExceeded {
                needed,
                quota: self.quota.saturating_sub(others),
            });
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
