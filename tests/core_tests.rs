//! Integration tests for xfboard settings persistence
//!
//! Round-trips settings through a real file in a temporary directory and
//! checks the lenient fallbacks used at startup.

use std::fs;
use xfboard::core::settings::SERVER_URL_ENV;
use xfboard::core::{ClientSettings, CoreError, LayoutSettings};

#[test]
fn test_settings_save_then_load() {
    //! Saved settings come back unchanged, parent directories are created
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = ClientSettings {
        server_url: "http://chess.local:9000/api-root".to_string(),
        request_timeout_ms: 2_500,
        layout: LayoutSettings {
            origin_x: 12.0,
            origin_y: 40.0,
            square_size: 80.0,
        },
        asset_root: "static/pieces".to_string(),
    };
    settings.save_to(&path).unwrap();

    assert_eq!(ClientSettings::load_from(&path), settings);
}

#[test]
fn test_missing_or_corrupt_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    assert_eq!(ClientSettings::load_from(&missing), ClientSettings::default());

    let corrupt = dir.path().join("corrupt.json");
    fs::write(&corrupt, "{ not json").unwrap();
    assert_eq!(ClientSettings::load_from(&corrupt), ClientSettings::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"server_url":"https://example.org","layout":{"square_size":50.0}}"#).unwrap();

    let settings = ClientSettings::load_from(&path);
    assert_eq!(settings.server_url, "https://example.org");
    assert_eq!(settings.layout.square_size, 50.0);
    assert_eq!(settings.layout.origin_x, 0.0);
    assert_eq!(settings.request_timeout_ms, ClientSettings::default().request_timeout_ms);
    assert_eq!(settings.asset_root, "assets/pieces");
}

#[test]
fn test_base_url_validation() {
    let mut settings = ClientSettings::default();
    assert_eq!(settings.base_url().unwrap().as_str(), "http://127.0.0.1:8000/");

    for bad in ["not a url", "ftp://example.org", "mailto:someone@example.org"] {
        settings.server_url = bad.to_string();
        assert!(
            matches!(settings.base_url(), Err(CoreError::InvalidServerUrl { .. })),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_env_override_wins_over_file() {
    let mut settings = ClientSettings::default();
    std::env::set_var(SERVER_URL_ENV, " http://override.local:7000 ");
    settings.apply_env_overrides();
    std::env::remove_var(SERVER_URL_ENV);
    assert_eq!(settings.server_url, "http://override.local:7000");

    std::env::set_var(SERVER_URL_ENV, "   ");
    let mut untouched = ClientSettings::default();
    untouched.apply_env_overrides();
    std::env::remove_var(SERVER_URL_ENV);
    assert_eq!(untouched, ClientSettings::default());
}
