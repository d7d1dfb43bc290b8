//! CLI event emitter.
//!
//! The terminal has no live observers, so settings events are only logged.

use helmet_core::{SettingsEvent, SettingsEventEmitter};

/// Logs every settings event at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEmitter;

impl SettingsEventEmitter for TracingEmitter {
    fn emit(&self, event: SettingsEvent) {
        match &event {
            SettingsEvent::Hydrated { outcome, .. } => {
                tracing::debug!(?outcome, "settings hydrated");
            }
            SettingsEvent::Changed { field, .. } => {
                tracing::debug!(%field, notice = ?event.notice(), "setting changed");
            }
        }
    }
}
