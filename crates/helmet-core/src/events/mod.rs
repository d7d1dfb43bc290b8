//! Settings events emitted by the store.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag so UI bridges can switch on it:
//!
//! ```json
//! { "type": "changed", "field": "darkMode", "settings": { ... } }
//! ```

use serde::{Deserialize, Serialize};

use crate::services::HydrationOutcome;
use crate::settings::{Settings, SettingsField};

/// Discrete events describing how the settings record evolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SettingsEvent {
    /// The initial storage read resolved and the store is now hydrated.
    Hydrated {
        /// How the initial read resolved.
        outcome: HydrationOutcome,
        /// The record after hydration.
        settings: Settings,
    },

    /// A setter changed one field.
    Changed {
        /// The field that changed.
        field: SettingsField,
        /// The full record after the change.
        settings: Settings,
    },
}

impl SettingsEvent {
    /// Create a hydration event.
    pub const fn hydrated(outcome: HydrationOutcome, settings: Settings) -> Self {
        Self::Hydrated { outcome, settings }
    }

    /// Create a field-changed event.
    pub const fn changed(field: SettingsField, settings: Settings) -> Self {
        Self::Changed { field, settings }
    }

    /// User-facing notice for this event, if any.
    ///
    /// Boolean fields read "Dark mode enabled"; language reads
    /// "Language changed to Español". Hydration produces no notice.
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Hydrated { .. } => None,
            Self::Changed {
                field: SettingsField::Language,
                settings,
            } => Some(format!(
                "Language changed to {}",
                settings.language.display_name()
            )),
            Self::Changed { field, settings } => settings.flag(*field).map(|enabled| {
                format!(
                    "{} {}",
                    field.label(),
                    if enabled { "enabled" } else { "disabled" }
                )
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Language;

    #[test]
    fn test_toggle_notices() {
        let settings = Settings {
            notifications: false,
            auto_connect: true,
            ..Settings::with_defaults()
        };
        assert_eq!(
            SettingsEvent::changed(SettingsField::Notifications, settings).notice(),
            Some("Notifications disabled".to_string())
        );
        assert_eq!(
            SettingsEvent::changed(SettingsField::AutoConnect, settings).notice(),
            Some("Auto-connect enabled".to_string())
        );
    }

    #[test]
    fn test_language_notice_uses_display_name() {
        let settings = Settings {
            language: Language::French,
            ..Settings::with_defaults()
        };
        assert_eq!(
            SettingsEvent::changed(SettingsField::Language, settings).notice(),
            Some("Language changed to Français".to_string())
        );
    }

    #[test]
    fn test_hydrated_has_no_notice() {
        let event = SettingsEvent::hydrated(HydrationOutcome::Empty, Settings::with_defaults());
        assert_eq!(event.notice(), None);
    }

    #[test]
    fn test_event_wire_format() {
        let event = SettingsEvent::changed(SettingsField::DarkMode, Settings::with_defaults());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "changed");
        assert_eq!(json["field"], "darkMode");
        assert_eq!(json["settings"]["darkMode"], true);

        let event = SettingsEvent::hydrated(HydrationOutcome::Restored, Settings::with_defaults());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "hydrated");
        assert_eq!(json["outcome"], "restored");
    }
}
