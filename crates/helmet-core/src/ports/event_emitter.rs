//! Event emitter trait for settings change notifications.
//!
//! This module defines the abstraction for emitting settings events.
//! Implementations handle transport details (channels, UI bridges, logs, etc.).

use tokio::sync::mpsc;

use crate::events::SettingsEvent;

/// Trait for emitting settings events.
///
/// This abstraction keeps event plumbing out of the store and prevents
/// channel types from becoming part of its public API surface.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and contexts that don't need events
/// - `ChannelEmitter` - Forwards events into a tokio channel
pub trait SettingsEventEmitter: Send + Sync {
    /// Emit a settings event.
    ///
    /// This method must not block; it is called from the mutator path.
    fn emit(&self, event: SettingsEvent);
}

/// A no-op event emitter.
///
/// This implementation discards all events, making it suitable for:
/// - Unit tests that don't need to verify event emission
/// - Contexts where only the watch-based state observers matter
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl SettingsEventEmitter for NoopEmitter {
    fn emit(&self, _event: SettingsEvent) {
        // Intentionally do nothing
    }
}

/// Emitter that forwards every event into an unbounded tokio channel.
#[derive(Debug, Clone)]
pub struct ChannelEmitter {
    tx: mpsc::UnboundedSender<SettingsEvent>,
}

impl ChannelEmitter {
    /// Create an emitter together with the receiving half.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SettingsEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl SettingsEventEmitter for ChannelEmitter {
    fn emit(&self, event: SettingsEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("settings event dropped: receiver closed");
        }
    }
}
