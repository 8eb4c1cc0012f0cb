//! Hydration and write-through persistence for the theme preference.
//!
//! State updates are synchronous and authoritative; persistence is
//! best-effort and happens behind the dispatch. All writes funnel
//! through a single background writer so the value durable on disk is
//! always the one from the latest `set_mode` call, regardless of how
//! long individual writes take.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::prefs::intent::PrefsIntent;
use crate::prefs::state::ThemeMode;
use crate::prefs::PrefsStore;
use crate::storage::StorageAdapter;

/// Storage key reserved for the preference record.
///
/// No other component may read or write this entry.
pub const PREFERENCE_KEY: &str = "app_theme_preference";

/// Preference service over the store and the persistent storage.
///
/// Must be created inside a Tokio runtime: construction spawns the
/// background writer task. Dropping the service stops the writer.
pub struct ThemePreference<S: StorageAdapter> {
    store: PrefsStore,
    storage: Arc<S>,
    /// Latest requested write, coalesced by the writer.
    pending: watch::Sender<(u64, Option<ThemeMode>)>,
    /// Sequence number of the last write the writer finished handling.
    completed: watch::Receiver<u64>,
    submitted: AtomicU64,
    hydrate_started: AtomicBool,
}

impl<S: StorageAdapter> ThemePreference<S> {
    pub fn new(store: PrefsStore, storage: S) -> Self {
        let storage = Arc::new(storage);
        let (pending, mut pending_rx) = watch::channel((0u64, None::<ThemeMode>));
        let (completed_tx, completed) = watch::channel(0u64);

        let writer_storage = Arc::clone(&storage);
        tokio::spawn(async move {
            while pending_rx.changed().await.is_ok() {
                let (seq, mode) = *pending_rx.borrow_and_update();
                if let Some(mode) = mode {
                    if let Err(err) = writer_storage.set(PREFERENCE_KEY, mode.as_str()).await {
                        tracing::warn!("Failed to persist theme preference: {}", err);
                    }
                }
                let _ = completed_tx.send(seq);
            }
        });

        Self {
            store,
            storage,
            pending,
            completed,
            submitted: AtomicU64::new(0),
            hydrate_started: AtomicBool::new(false),
        }
    }

    /// One-time startup read of the persisted mode.
    ///
    /// A valid stored literal is applied to the store; a missing,
    /// invalid, or failed read leaves the mode untouched. Either way
    /// the slice is marked hydrated afterwards. Repeat calls are no-ops.
    pub async fn hydrate(&self) {
        if self.hydrate_started.swap(true, Ordering::SeqCst) {
            return;
        }

        let saved = match self.storage.get(PREFERENCE_KEY).await {
            Ok(value) => value.as_deref().and_then(ThemeMode::parse),
            Err(err) => {
                tracing::warn!("Failed to read theme preference: {}", err);
                None
            }
        };
        self.store.dispatch(PrefsIntent::Hydrate { saved });
    }

    /// Set the mode: dispatch synchronously, then persist in the
    /// background.
    ///
    /// Dependent views see the new mode immediately. A persistence
    /// failure never rolls the in-memory value back.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.store.dispatch(PrefsIntent::SetMode(mode));

        let seq = self.submitted.fetch_add(1, Ordering::SeqCst) + 1;
        self.pending.send_modify(|slot| {
            // A concurrent later call may already have landed; never
            // replace a newer request with an older one.
            if slot.0 < seq {
                *slot = (seq, Some(mode));
            }
        });
    }

    /// Flip the current in-memory mode.
    pub fn toggle(&self) {
        let next = self.store.state().mode.opposite();
        self.set_mode(next);
    }

    /// Current in-memory mode.
    pub fn mode(&self) -> ThemeMode {
        self.store.state().mode
    }

    /// Whether the startup read has completed (success or failure).
    pub fn hydrated(&self) -> bool {
        self.store.state().hydrated
    }

    /// The underlying store, for subscriptions.
    pub fn store(&self) -> &PrefsStore {
        &self.store
    }

    /// Wait until the writer has handled every write submitted so far.
    ///
    /// Failed writes count as handled; this only guarantees the writer
    /// caught up, not that the disk value changed.
    pub async fn flush(&self) {
        let target = self.submitted.load(Ordering::SeqCst);
        let mut completed = self.completed.clone();
        while *completed.borrow_and_update() < target {
            if completed.changed().await.is_err() {
                break;
            }
        }
    }
}
