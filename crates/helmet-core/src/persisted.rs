//! Persisted representation of [`Settings`].
//!
//! The record is stored under [`SETTINGS_STORAGE_KEY`] as a JSON envelope:
//!
//! ```json
//! {"state":{"notifications":true,"darkMode":true,"autoConnect":true,"language":"en","batteryOptimization":true},"version":0}
//! ```
//!
//! Decoding also accepts a bare record without the envelope and treats it as
//! version 0, provided every key is a settings field. Fields missing from
//! `state` take their defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::settings::{Settings, SettingsError, SettingsField};

/// Fixed key the settings document lives under.
pub const SETTINGS_STORAGE_KEY: &str = "settings-storage";

/// Version tag written with every document.
pub const SETTINGS_SCHEMA_VERSION: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    state: Settings,
    #[serde(default)]
    version: u32,
}

/// Serialize settings into the persisted envelope.
pub fn encode_settings(settings: &Settings) -> Result<String, SettingsError> {
    serde_json::to_string(&Envelope {
        state: *settings,
        version: SETTINGS_SCHEMA_VERSION,
    })
    .map_err(|e| SettingsError::Malformed(e.to_string()))
}

/// Parse a persisted document, migrating older layouts.
pub fn decode_settings(raw: &str) -> Result<Settings, SettingsError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| SettingsError::Malformed(e.to_string()))?;

    let Value::Object(map) = &value else {
        return Err(SettingsError::Malformed(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    };

    if map.contains_key("state") {
        let envelope: Envelope =
            serde_json::from_value(value).map_err(|e| SettingsError::Malformed(e.to_string()))?;
        migrate(envelope.state, envelope.version)
    } else {
        // Bare record, written before the envelope existed.
        if map.is_empty() {
            return Err(SettingsError::Malformed(
                "document has neither an envelope nor settings fields".to_string(),
            ));
        }
        if let Some(unknown) = map.keys().find(|key| !is_field_key(key)) {
            return Err(SettingsError::Malformed(format!(
                "unknown settings field `{unknown}`"
            )));
        }
        let settings: Settings =
            serde_json::from_value(value).map_err(|e| SettingsError::Malformed(e.to_string()))?;
        migrate(settings, 0)
    }
}

fn migrate(settings: Settings, version: u32) -> Result<Settings, SettingsError> {
    if version > SETTINGS_SCHEMA_VERSION {
        return Err(SettingsError::UnsupportedVersion {
            found: version,
            supported: SETTINGS_SCHEMA_VERSION,
        });
    }
    // Version 0 is current; future layouts get their upgrade steps here.
    Ok(settings)
}

fn is_field_key(key: &str) -> bool {
    SettingsField::ALL.iter().any(|field| field.key() == key)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
