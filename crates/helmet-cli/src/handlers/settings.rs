//! Settings command handler.
//!
//! Every subcommand waits for hydration before reading, and flushes pending
//! writes before returning so the process exits after its last write.

use helmet_core::{SettingsChange, SettingsError, SettingsEvent, SettingsField, SettingsStore};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{render_languages, render_settings};
use crate::settings_commands::SettingsCommand;

/// Execute the settings command and print its output.
pub async fn execute(ctx: &CliContext, command: SettingsCommand) -> Result<(), CliError> {
    for line in run(ctx, command).await? {
        println!("{line}");
    }
    Ok(())
}

/// Execute the settings command, returning the lines to print.
pub async fn run(ctx: &CliContext, command: SettingsCommand) -> Result<Vec<String>, CliError> {
    let store = ctx.settings();
    store.wait_hydrated().await;

    let output = match command {
        SettingsCommand::Show { json } => {
            let settings = store.current();
            let text = if json {
                serde_json::to_string_pretty(&settings)?
            } else {
                render_settings(&settings)
            };
            vec![text]
        }
        SettingsCommand::Set {
            notifications,
            dark_mode,
            auto_connect,
            battery_optimization,
            language,
        } => {
            let changes: Vec<SettingsChange> = [
                notifications.map(SettingsChange::Notifications),
                dark_mode.map(SettingsChange::DarkMode),
                language.map(SettingsChange::Language),
                auto_connect.map(SettingsChange::AutoConnect),
                battery_optimization.map(SettingsChange::BatteryOptimization),
            ]
            .into_iter()
            .flatten()
            .collect();

            if changes.is_empty() {
                return Ok(vec![
                    "No settings provided. Use --help to see available options.".to_string(),
                ]);
            }
            changes
                .into_iter()
                .map(|change| apply_with_notice(store, change))
                .collect()
        }
        SettingsCommand::Toggle { field } => {
            let enabled = store
                .current()
                .flag(field)
                .ok_or(SettingsError::NotAToggle(field))?;
            let change =
                SettingsChange::toggle(field, !enabled).ok_or(SettingsError::NotAToggle(field))?;
            vec![apply_with_notice(store, change)]
        }
        SettingsCommand::Language { code: None } => {
            vec![render_languages(store.current().language)]
        }
        SettingsCommand::Language {
            code: Some(language),
        } => vec![apply_with_notice(store, SettingsChange::Language(language))],
    };

    store.flush().await;
    Ok(output)
}

/// Apply a change and describe it the way the settings screen does.
fn apply_with_notice(store: &SettingsStore, change: SettingsChange) -> String {
    store.update(change);
    let field: SettingsField = change.field();
    SettingsEvent::changed(field, store.current())
        .notice()
        .unwrap_or_else(|| format!("{field} updated"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{CliConfig, bootstrap_with};
    use helmet_core::{Language, MemoryStorage, SETTINGS_STORAGE_KEY, Settings, decode_settings};
    use helmet_storage::StorageKind;
    use std::sync::Arc;

    fn context(backend: Arc<MemoryStorage>) -> CliContext {
        let config = CliConfig {
            storage: StorageKind::Memory,
            data_root: std::env::temp_dir(),
        };
        bootstrap_with(backend, config)
    }

    fn persisted(backend: &MemoryStorage) -> Settings {
        decode_settings(&backend.get(SETTINGS_STORAGE_KEY).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_show_renders_defaults() {
        let ctx = context(Arc::new(MemoryStorage::new()));
        let lines = run(&ctx, SettingsCommand::Show { json: false })
            .await
            .unwrap();

        assert_eq!(lines, vec![render_settings(&Settings::with_defaults())]);
    }

    #[tokio::test]
    async fn test_show_json_uses_wire_names() {
        let ctx = context(Arc::new(MemoryStorage::new()));
        let lines = run(&ctx, SettingsCommand::Show { json: true })
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["batteryOptimization"], true);
        assert_eq!(value["language"], "en");
    }

    #[tokio::test]
    async fn test_set_applies_and_persists_each_field() {
        let backend = Arc::new(MemoryStorage::new());
        let ctx = context(backend.clone());

        let lines = run(
            &ctx,
            SettingsCommand::Set {
                notifications: Some(false),
                dark_mode: None,
                auto_connect: Some(true),
                battery_optimization: None,
                language: Some(Language::Italian),
            },
        )
        .await
        .unwrap();

        assert_eq!(
            lines,
            vec![
                "Notifications disabled".to_string(),
                "Language changed to Italiano".to_string(),
                "Auto-connect enabled".to_string(),
            ]
        );
        let expected = Settings {
            notifications: false,
            language: Language::Italian,
            ..Settings::with_defaults()
        };
        assert_eq!(ctx.settings().current(), expected);
        assert_eq!(persisted(&backend), expected);
    }

    #[tokio::test]
    async fn test_set_without_flags_is_a_no_op() {
        let backend = Arc::new(MemoryStorage::new());
        let ctx = context(backend.clone());

        let lines = run(
            &ctx,
            SettingsCommand::Set {
                notifications: None,
                dark_mode: None,
                auto_connect: None,
                battery_optimization: None,
                language: None,
            },
        )
        .await
        .unwrap();

        assert!(lines[0].starts_with("No settings provided"));
        assert_eq!(backend.write_count(), 0);
    }

    #[tokio::test]
    async fn test_toggle_flips_current_value() {
        let backend = Arc::new(MemoryStorage::new());
        let ctx = context(backend.clone());

        let first = run(
            &ctx,
            SettingsCommand::Toggle {
                field: SettingsField::DarkMode,
            },
        )
        .await
        .unwrap();
        assert_eq!(first, vec!["Dark mode disabled".to_string()]);

        let second = run(
            &ctx,
            SettingsCommand::Toggle {
                field: SettingsField::DarkMode,
            },
        )
        .await
        .unwrap();
        assert_eq!(second, vec!["Dark mode enabled".to_string()]);
        assert!(persisted(&backend).dark_mode);
    }

    #[tokio::test]
    async fn test_toggle_rejects_language() {
        let ctx = context(Arc::new(MemoryStorage::new()));
        let err = run(
            &ctx,
            SettingsCommand::Toggle {
                field: SettingsField::Language,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, CliError::Arguments(_)));
        assert_eq!(ctx.settings().current(), Settings::with_defaults());
    }

    #[tokio::test]
    async fn test_language_lists_and_selects() {
        let backend = Arc::new(MemoryStorage::new());
        let ctx = context(backend.clone());

        let listing = run(&ctx, SettingsCommand::Language { code: None })
            .await
            .unwrap();
        assert!(listing[0].contains("* en  English (US)"));

        let changed = run(
            &ctx,
            SettingsCommand::Language {
                code: Some(Language::Spanish),
            },
        )
        .await
        .unwrap();
        assert_eq!(changed, vec!["Language changed to Español".to_string()]);
        assert_eq!(persisted(&backend).language, Language::Spanish);
    }

    #[tokio::test]
    async fn test_reads_wait_for_hydration() {
        let backend = Arc::new(MemoryStorage::new());
        backend.insert(
            SETTINGS_STORAGE_KEY,
            helmet_core::encode_settings(&Settings {
                auto_connect: false,
                ..Settings::with_defaults()
            })
            .unwrap(),
        );
        let ctx = context(backend);

        let lines = run(&ctx, SettingsCommand::Show { json: true })
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["autoConnect"], false);
    }

    #[tokio::test]
    async fn test_write_failure_does_not_fail_command() {
        let backend = Arc::new(MemoryStorage::new());
        backend.set_fail_writes(true);
        let ctx = context(backend);

        let lines = run(
            &ctx,
            SettingsCommand::Language {
                code: Some(Language::French),
            },
        )
        .await
        .unwrap();
        assert_eq!(lines, vec!["Language changed to Français".to_string()]);
        assert_eq!(ctx.settings().current().language, Language::French);
    }
}
