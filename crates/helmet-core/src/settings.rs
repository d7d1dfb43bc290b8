//! Settings domain types.
//!
//! This module contains the preference record shared by every screen, the
//! supported UI languages, and the field identifiers used by change events.
//! These are pure domain types with no infrastructure dependencies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User preferences for the helmet companion app.
///
/// One record exists per installation. Field names on the wire are camelCase
/// so persisted documents stay readable by every client of the store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Whether alert notifications are enabled.
    pub notifications: bool,

    /// UI theme preference.
    pub dark_mode: bool,

    /// Whether to auto-connect to known peripheral devices.
    pub auto_connect: bool,

    /// UI locale selection.
    pub language: Language,

    /// Whether power-saving behavior is enabled.
    pub battery_optimization: bool,
}

impl Settings {
    /// The record used on first run, or whenever persisted state is unusable.
    pub const DEFAULT: Self = Self {
        notifications: true,
        dark_mode: true,
        auto_connect: true,
        language: Language::English,
        battery_optimization: true,
    };

    /// Create settings with the first-run defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self::DEFAULT
    }

    /// Read a boolean field.
    ///
    /// Returns `None` for [`SettingsField::Language`], which is not a toggle.
    pub const fn flag(&self, field: SettingsField) -> Option<bool> {
        match field {
            SettingsField::Notifications => Some(self.notifications),
            SettingsField::DarkMode => Some(self.dark_mode),
            SettingsField::AutoConnect => Some(self.auto_connect),
            SettingsField::BatteryOptimization => Some(self.battery_optimization),
            SettingsField::Language => None,
        }
    }

    /// Apply a single change, leaving every other field untouched.
    ///
    /// Returns `true` if the record actually changed.
    pub fn apply(&mut self, change: SettingsChange) -> bool {
        let before = *self;
        match change {
            SettingsChange::Notifications(enabled) => self.notifications = enabled,
            SettingsChange::DarkMode(enabled) => self.dark_mode = enabled,
            SettingsChange::AutoConnect(enabled) => self.auto_connect = enabled,
            SettingsChange::BatteryOptimization(enabled) => self.battery_optimization = enabled,
            SettingsChange::Language(language) => self.language = language,
        }
        before != *self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Identifies one field of [`Settings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingsField {
    Notifications,
    DarkMode,
    AutoConnect,
    Language,
    BatteryOptimization,
}

impl SettingsField {
    /// Every field, in persisted-document order.
    pub const ALL: [Self; 5] = [
        Self::Notifications,
        Self::DarkMode,
        Self::AutoConnect,
        Self::Language,
        Self::BatteryOptimization,
    ];

    /// Boolean fields, in settings-screen order.
    pub const TOGGLES: [Self; 4] = [
        Self::Notifications,
        Self::DarkMode,
        Self::AutoConnect,
        Self::BatteryOptimization,
    ];

    /// Human-readable label used in notices ("Dark mode enabled").
    pub const fn label(self) -> &'static str {
        match self {
            Self::Notifications => "Notifications",
            Self::DarkMode => "Dark mode",
            Self::AutoConnect => "Auto-connect",
            Self::Language => "Language",
            Self::BatteryOptimization => "Battery optimization",
        }
    }

    /// Field name as it appears in the persisted document.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Notifications => "notifications",
            Self::DarkMode => "darkMode",
            Self::AutoConnect => "autoConnect",
            Self::Language => "language",
            Self::BatteryOptimization => "batteryOptimization",
        }
    }
}

impl FromStr for SettingsField {
    type Err = SettingsError;

    /// Accepts the persisted key (`darkMode`) or a kebab/snake spelling
    /// (`dark-mode`, `dark_mode`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "notifications" => Ok(Self::Notifications),
            "darkmode" => Ok(Self::DarkMode),
            "autoconnect" => Ok(Self::AutoConnect),
            "language" => Ok(Self::Language),
            "batteryoptimization" => Ok(Self::BatteryOptimization),
            _ => Err(SettingsError::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single-field mutation of [`Settings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    Notifications(bool),
    DarkMode(bool),
    AutoConnect(bool),
    Language(Language),
    BatteryOptimization(bool),
}

impl SettingsChange {
    /// Build a change for a boolean field.
    ///
    /// Returns `None` for [`SettingsField::Language`].
    pub const fn toggle(field: SettingsField, enabled: bool) -> Option<Self> {
        match field {
            SettingsField::Notifications => Some(Self::Notifications(enabled)),
            SettingsField::DarkMode => Some(Self::DarkMode(enabled)),
            SettingsField::AutoConnect => Some(Self::AutoConnect(enabled)),
            SettingsField::BatteryOptimization => Some(Self::BatteryOptimization(enabled)),
            SettingsField::Language => None,
        }
    }

    /// The field this change touches.
    pub const fn field(self) -> SettingsField {
        match self {
            Self::Notifications(_) => SettingsField::Notifications,
            Self::DarkMode(_) => SettingsField::DarkMode,
            Self::AutoConnect(_) => SettingsField::AutoConnect,
            Self::Language(_) => SettingsField::Language,
            Self::BatteryOptimization(_) => SettingsField::BatteryOptimization,
        }
    }
}

/// Supported UI languages.
///
/// Serialized as the two-letter code (`"en"`, `"es"`, ...). Unknown codes
/// fail to deserialize, so a record holding one is rejected as a whole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pt")]
    Portuguese,
}

impl Language {
    /// Every supported language, in picker order.
    pub const ALL: [Self; 6] = [
        Self::English,
        Self::Spanish,
        Self::French,
        Self::German,
        Self::Italian,
        Self::Portuguese,
    ];

    /// Two-letter code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Italian => "it",
            Self::Portuguese => "pt",
        }
    }

    /// Name shown in the language picker, in the language itself.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::English => "English (US)",
            Self::Spanish => "Español",
            Self::French => "Français",
            Self::German => "Deutsch",
            Self::Italian => "Italiano",
            Self::Portuguese => "Português",
        }
    }

    /// Look up a language by its code.
    pub fn from_code(code: &str) -> Result<Self, SettingsError> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| SettingsError::UnsupportedLanguage(code.to_string()))
    }
}

impl FromStr for Language {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Display name for a raw code, falling back to the code itself.
pub fn display_name_for_code(code: &str) -> String {
    Language::from_code(code).map_or_else(|_| code.to_string(), |l| l.display_name().to_string())
}

/// Settings domain error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Unsupported language code '{0}' (expected one of: en, es, fr, de, it, pt)")]
    UnsupportedLanguage(String),

    #[error("Unknown settings field '{0}'")]
    UnknownField(String),

    #[error("'{0}' is not a toggle")]
    NotAToggle(SettingsField),

    #[error("Malformed settings document: {0}")]
    Malformed(String),

    #[error("Settings document version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
