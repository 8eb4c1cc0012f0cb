//! Persistent key-value storage for preference data.
//!
//! The preference service is the only consumer; a single key is
//! reserved for it and no other component reads or writes the entry.

mod file;
mod memory;

use std::future::Future;
use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors that can occur against the persistent store.
///
/// All of them are non-fatal to the caller: the preference service logs
/// and ignores them, and in-memory state stays authoritative.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read preference file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preference file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to encode preference file '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },

    #[error("Failed to write preference file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Durable key-value storage used for the preference record.
pub trait StorageAdapter: Send + Sync + 'static {
    /// Read the value stored under `key`, or `None` when absent.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}
