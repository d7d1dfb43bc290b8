//! The settings store: in-memory preferences backed by durable storage.
//!
//! The store starts `Uninitialized`, serving defaults. The first call to
//! [`SettingsStore::hydrate`] reads the persisted document once and moves the
//! store to `Hydrated`, whatever the read produced. Mutators update memory
//! synchronously and hand a snapshot to the background writer; storage faults
//! never reach the caller.
//!
//! Changes made before hydration resolves are recorded and replayed on top of
//! the loaded record, and their writes are held back until then, so an early
//! setter never replaces the stored document with defaults.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tokio::sync::{OnceCell, watch};
use tokio::task::JoinHandle;

use super::persistence::PersistenceWriter;
use crate::events::SettingsEvent;
use crate::persisted::{SETTINGS_STORAGE_KEY, decode_settings};
use crate::ports::{NoopEmitter, SettingsEventEmitter, StorageBackend};
use crate::settings::{Language, Settings, SettingsChange};

/// Lifecycle of the store. The transition happens once per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePhase {
    /// Serving defaults; the initial read has not resolved.
    Uninitialized,
    /// Serving persisted or default values.
    Hydrated,
}

/// How the initial storage read resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrationOutcome {
    /// A well-formed document was loaded.
    Restored,
    /// Nothing was stored; defaults are in effect.
    Empty,
    /// The stored document could not be decoded; defaults are in effect.
    Malformed,
    /// The backend read failed; defaults are in effect.
    ReadFailed,
}

impl HydrationOutcome {
    /// Whether the stored document was discarded or absent.
    pub const fn used_defaults(self) -> bool {
        matches!(self, Self::Empty | Self::Malformed | Self::ReadFailed)
    }
}

struct Inner {
    backend: Arc<dyn StorageBackend>,
    emitter: Arc<dyn SettingsEventEmitter>,
    state: watch::Sender<Settings>,
    phase: watch::Sender<StorePhase>,
    hydration: OnceCell<HydrationOutcome>,
    // Only touched while the `state` lock is held.
    hydrated: AtomicBool,
    early_changes: Mutex<Vec<SettingsChange>>,
    writer: PersistenceWriter,
}

/// Shared handle to the settings store.
///
/// Construct one at startup and clone the handle into every consumer. Clones
/// share the same record, observers and writer.
#[derive(Clone)]
pub struct SettingsStore {
    inner: Arc<Inner>,
}

impl SettingsStore {
    /// Create a store over `backend` that emits no events.
    ///
    /// When called inside a Tokio runtime, the background writer is spawned on
    /// it. Outside a runtime the store works in memory only.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_emitter(backend, Arc::new(NoopEmitter::new()))
    }

    /// Create a store that reports changes through `emitter`.
    pub fn with_emitter(
        backend: Arc<dyn StorageBackend>,
        emitter: Arc<dyn SettingsEventEmitter>,
    ) -> Self {
        let writer = PersistenceWriter::spawn(Arc::clone(&backend), SETTINGS_STORAGE_KEY);
        let (state, _) = watch::channel(Settings::with_defaults());
        let (phase, _) = watch::channel(StorePhase::Uninitialized);
        Self {
            inner: Arc::new(Inner {
                backend,
                emitter,
                state,
                phase,
                hydration: OnceCell::new(),
                hydrated: AtomicBool::new(false),
                early_changes: Mutex::new(Vec::new()),
                writer,
            }),
        }
    }

    /// The current record. Defaults until hydration resolves.
    pub fn current(&self) -> Settings {
        *self.inner.state.borrow()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> StorePhase {
        *self.inner.phase.borrow()
    }

    /// Observe the record. The receiver is notified on every change,
    /// including the hydration transition.
    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.inner.state.subscribe()
    }

    /// Observe the lifecycle phase.
    pub fn subscribe_phase(&self) -> watch::Receiver<StorePhase> {
        self.inner.phase.subscribe()
    }

    /// Read persisted state and move to `Hydrated`.
    ///
    /// Only the first call touches the backend; later calls return the same
    /// outcome.
    pub async fn hydrate(&self) -> HydrationOutcome {
        *self
            .inner
            .hydration
            .get_or_init(|| self.load_and_apply())
            .await
    }

    /// Run [`hydrate`](Self::hydrate) in the background.
    pub fn spawn_hydration(&self) -> JoinHandle<HydrationOutcome> {
        let store = self.clone();
        tokio::spawn(async move { store.hydrate().await })
    }

    /// Wait until the store is hydrated. Does not start hydration itself.
    pub async fn wait_hydrated(&self) {
        let mut rx = self.inner.phase.subscribe();
        // The sender lives in `inner`, which `self` keeps alive.
        let _ = rx.wait_for(|phase| *phase == StorePhase::Hydrated).await;
    }

    /// Wait until every write queued so far has been attempted.
    pub async fn flush(&self) {
        self.inner.writer.flush().await;
    }

    pub fn set_notifications(&self, enabled: bool) {
        self.update(SettingsChange::Notifications(enabled));
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        self.update(SettingsChange::DarkMode(enabled));
    }

    pub fn set_auto_connect(&self, enabled: bool) {
        self.update(SettingsChange::AutoConnect(enabled));
    }

    pub fn set_battery_optimization(&self, enabled: bool) {
        self.update(SettingsChange::BatteryOptimization(enabled));
    }

    pub fn set_language(&self, language: Language) {
        self.update(SettingsChange::Language(language));
    }

    /// Apply one change, persist the full record, and notify observers.
    ///
    /// Every call is persisted, even when the value did not change. Events
    /// and watch notifications fire only on an actual change. Before
    /// hydration the write is deferred until the stored record is merged in.
    pub fn update(&self, change: SettingsChange) {
        let inner = &self.inner;
        let mut snapshot = Settings::with_defaults();
        let changed = inner.state.send_if_modified(|settings| {
            let changed = settings.apply(change);
            snapshot = *settings;
            if inner.hydrated.load(Ordering::Acquire) {
                // Enqueue under the lock so snapshots reach the writer in order.
                inner.writer.enqueue(snapshot);
            } else {
                inner
                    .early_changes
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(change);
            }
            changed
        });

        tracing::debug!(field = %change.field(), changed, "settings updated");
        if changed {
            inner
                .emitter
                .emit(SettingsEvent::changed(change.field(), snapshot));
        }
    }

    async fn load_and_apply(&self) -> HydrationOutcome {
        let inner = &self.inner;
        let (outcome, loaded) = match inner.backend.read(SETTINGS_STORAGE_KEY).await {
            Ok(Some(raw)) => match decode_settings(&raw) {
                Ok(settings) => (HydrationOutcome::Restored, Some(settings)),
                Err(e) => {
                    tracing::warn!(error = %e, "stored settings unusable; using defaults");
                    (HydrationOutcome::Malformed, None)
                }
            },
            Ok(None) => (HydrationOutcome::Empty, None),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored settings; using defaults");
                (HydrationOutcome::ReadFailed, None)
            }
        };

        let mut snapshot = Settings::with_defaults();
        let mut replayed = 0;
        inner.state.send_modify(|settings| {
            let early = std::mem::take(
                &mut *inner
                    .early_changes
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner),
            );
            let mut merged = loaded.unwrap_or(*settings);
            for change in &early {
                merged.apply(*change);
            }
            *settings = merged;
            inner.hydrated.store(true, Ordering::Release);
            snapshot = merged;
            replayed = early.len();
            if replayed > 0 {
                // One write carries the stored record plus the early changes.
                inner.writer.enqueue(merged);
            }
        });
        inner.phase.send_replace(StorePhase::Hydrated);

        tracing::debug!(?outcome, replayed, "settings hydrated");
        inner
            .emitter
            .emit(SettingsEvent::hydrated(outcome, snapshot));
        outcome
    }
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("phase", &self.phase())
            .field("settings", &self.current())
            .finish_non_exhaustive()
    }
}
