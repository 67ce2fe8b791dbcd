// Integration tests for settings persistence
use birthday_tribute::models::settings::Settings;
use birthday_tribute::services::settings::{load_settings, save_settings};
use tempfile::tempdir;

#[test]
fn test_settings_persistence() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("settings.toml");

    // Get default settings
    let mut settings = load_settings(&path).expect("Failed to get settings");
    assert_eq!(settings.theme, "light");
    assert_eq!(settings.music_enabled, false);
    assert_eq!(settings.effects_enabled, true);
    assert_eq!(settings.anniversary_month, 10);
    assert_eq!(settings.anniversary_day, 4);

    // Update settings to simulate UI changes
    settings.theme = "dark".to_string();
    settings.music_enabled = true;
    settings.effects_enabled = false;
    settings.honoree = "Star".to_string();

    save_settings(&path, &settings).expect("Failed to update settings");

    // Verify persistence by reading again
    let loaded_settings = load_settings(&path).expect("Failed to load settings");
    assert_eq!(loaded_settings.theme, "dark");
    assert_eq!(loaded_settings.music_enabled, true);
    assert_eq!(loaded_settings.effects_enabled, false);
    assert_eq!(loaded_settings.honoree, "Star");
}

#[test]
fn test_app_lifecycle_simulation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("settings.toml");

    // Simulate first app launch
    {
        let mut settings = load_settings(&path).expect("Failed to get settings");

        // User changes theme to dark
        settings.theme = "dark".to_string();
        save_settings(&path, &settings).expect("Failed to save theme");
    }

    // Simulate second app launch - settings should persist
    {
        let settings = load_settings(&path).expect("Failed to load settings");
        assert_eq!(settings.theme, "dark", "Theme should persist across app restarts");
    }
}

#[test]
fn test_anniversary_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let mut settings = Settings::default();
    settings.anniversary_month = 2;
    settings.anniversary_day = 29;
    settings.first_observed = chrono::NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
    save_settings(&path, &settings).expect("Failed to save settings");

    let loaded = load_settings(&path).expect("Failed to load settings");
    let anniversary = loaded.anniversary().expect("Leap-day anniversary is valid");
    assert_eq!(anniversary.date.month(), 2);
    assert_eq!(anniversary.date.day(), 29);
    assert_eq!(anniversary.first_observed, settings.first_observed);
}

#[test]
fn test_content_sections_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let mut settings = Settings::default();
    settings.content.greeting = "Happy Anniversary".to_string();
    settings.content.gallery_captions = vec!["Just one memory.".to_string()];
    save_settings(&path, &settings).expect("Failed to save settings");

    let loaded = load_settings(&path).expect("Failed to load settings");
    assert_eq!(loaded.content.greeting, "Happy Anniversary");
    assert_eq!(loaded.content.gallery_captions.len(), 1);
}
