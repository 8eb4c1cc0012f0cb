//! In-memory storage with fault and latency injection.
//!
//! Used by tests to stand in for the durable store: it records write
//! completion order and can delay or fail individual operations.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::{StorageAdapter, StorageError};

#[derive(Default)]
struct MemoryInner {
    entries: Mutex<HashMap<String, String>>,
    /// Writes in completion order, recorded after any injected delay.
    write_log: Mutex<Vec<(String, String)>>,
    write_delay: Mutex<Option<Duration>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

/// Shared in-memory key-value store.
///
/// Clones share the same entries, so a test can keep one handle while
/// the service under test owns another.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<MemoryInner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stored value.
    pub fn insert(&self, key: &str, value: &str) {
        self.inner
            .entries
            .lock()
            .insert(key.to_string(), value.to_string());
    }

    /// Current stored value for `key`.
    pub fn value_of(&self, key: &str) -> Option<String> {
        self.inner.entries.lock().get(key).cloned()
    }

    /// All completed writes, in completion order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.inner.write_log.lock().clone()
    }

    /// Delay every subsequent write by `delay`.
    pub fn set_write_delay(&self, delay: Option<Duration>) {
        *self.inner.write_delay.lock() = delay;
    }

    /// Make subsequent reads fail.
    pub fn fail_reads(&self, fail: bool) {
        self.inner.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent writes fail (after any injected delay).
    pub fn fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl StorageAdapter for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.inner.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable {
                reason: "injected read failure".to_string(),
            });
        }
        Ok(self.inner.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let delay = *self.inner.write_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable {
                reason: "injected write failure".to_string(),
            });
        }
        self.inner
            .entries
            .lock()
            .insert(key.to_string(), value.to_string());
        self.inner
            .write_log
            .lock()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}
