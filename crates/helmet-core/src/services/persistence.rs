//! Ordered, best-effort persistence of settings snapshots.
//!
//! Every mutation enqueues a full snapshot. A single background task drains
//! the queue, coalesces to the newest snapshot, and writes it. Failures are
//! logged and dropped.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};

use crate::persisted::encode_settings;
use crate::ports::StorageBackend;
use crate::settings::Settings;

enum WriteCommand {
    Snapshot(Settings),
    Flush(oneshot::Sender<()>),
}

/// Handle to the background writer task.
pub(crate) struct PersistenceWriter {
    tx: Option<mpsc::UnboundedSender<WriteCommand>>,
}

impl PersistenceWriter {
    /// Spawn the writer on the current Tokio runtime.
    ///
    /// Outside a runtime the writer is disabled and snapshots are dropped.
    pub(crate) fn spawn(backend: Arc<dyn StorageBackend>, key: &'static str) -> Self {
        match Handle::try_current() {
            Ok(handle) => {
                let (tx, rx) = mpsc::unbounded_channel();
                handle.spawn(run_writer(backend, key, rx));
                Self { tx: Some(tx) }
            }
            Err(_) => {
                tracing::warn!("no Tokio runtime available; settings changes will not be persisted");
                Self { tx: None }
            }
        }
    }

    /// Queue a snapshot for writing. Never blocks.
    pub(crate) fn enqueue(&self, settings: Settings) {
        if let Some(tx) = &self.tx {
            if tx.send(WriteCommand::Snapshot(settings)).is_err() {
                tracing::warn!("settings writer stopped; dropping snapshot");
            }
        }
    }

    /// Wait until every snapshot queued so far has been attempted.
    pub(crate) async fn flush(&self) {
        let Some(tx) = &self.tx else {
            return;
        };
        let (ack_tx, ack_rx) = oneshot::channel();
        if tx.send(WriteCommand::Flush(ack_tx)).is_ok() {
            // An error here means the writer is gone; nothing is left to wait for.
            let _ = ack_rx.await;
        }
    }
}

async fn run_writer(
    backend: Arc<dyn StorageBackend>,
    key: &'static str,
    mut rx: mpsc::UnboundedReceiver<WriteCommand>,
) {
    while let Some(first) = rx.recv().await {
        let mut latest = None;
        let mut acks = Vec::new();

        absorb(first, &mut latest, &mut acks);
        while let Ok(next) = rx.try_recv() {
            absorb(next, &mut latest, &mut acks);
        }

        if let Some(settings) = latest {
            write_snapshot(backend.as_ref(), key, &settings).await;
        }
        for ack in acks {
            let _ = ack.send(());
        }
    }
    tracing::debug!("settings writer shut down");
}

fn absorb(
    command: WriteCommand,
    latest: &mut Option<Settings>,
    acks: &mut Vec<oneshot::Sender<()>>,
) {
    match command {
        WriteCommand::Snapshot(settings) => *latest = Some(settings),
        WriteCommand::Flush(ack) => acks.push(ack),
    }
}

async fn write_snapshot(backend: &dyn StorageBackend, key: &str, settings: &Settings) {
    let raw = match encode_settings(settings) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "failed to encode settings; skipping write");
            return;
        }
    };

    match backend.write(key, &raw).await {
        Ok(()) => tracing::debug!(key, "settings persisted"),
        Err(e) => tracing::warn!(
            error = %e,
            key,
            "failed to persist settings; in-memory value kept"
        ),
    }
}
