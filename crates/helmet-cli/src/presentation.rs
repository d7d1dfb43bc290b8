//! Terminal rendering for settings output.

use std::fmt::Write as _;

use helmet_core::{Language, Settings};

const fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

/// Render the settings screen as text, grouped like the app's sections.
pub fn render_settings(settings: &Settings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "General");
    let _ = writeln!(out, "  Notifications:         {}", on_off(settings.notifications));
    let _ = writeln!(out, "  Dark mode:             {}", on_off(settings.dark_mode));
    let _ = writeln!(
        out,
        "  Language:              {} ({})",
        settings.language.display_name(),
        settings.language.code()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Device");
    let _ = writeln!(out, "  Auto-connect:          {}", on_off(settings.auto_connect));
    let _ = write!(
        out,
        "  Battery optimization:  {}",
        on_off(settings.battery_optimization)
    );
    out
}

/// Render the language picker, marking the selected entry.
pub fn render_languages(selected: Language) -> String {
    Language::ALL
        .iter()
        .map(|lang| {
            let marker = if *lang == selected { '*' } else { ' ' };
            format!("{marker} {}  {}", lang.code(), lang.display_name())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_settings_groups_sections() {
        let settings = Settings {
            dark_mode: false,
            language: Language::German,
            ..Settings::with_defaults()
        };
        let text = render_settings(&settings);

        assert!(text.starts_with("General\n"));
        assert!(text.contains("Dark mode:             off"));
        assert!(text.contains("Language:              Deutsch (de)"));
        assert!(text.contains("\nDevice\n"));
        assert!(text.ends_with("Battery optimization:  on"));
    }

    #[test]
    fn test_render_languages_marks_selection() {
        let text = render_languages(Language::Spanish);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), Language::ALL.len());
        assert_eq!(lines[0], "  en  English (US)");
        assert_eq!(lines[1], "* es  Español");
    }
}
